//! Load Error Component
//!
//! Shown instead of the list when the saved todos cannot be read.

use leptos::prelude::*;

use crate::storage::STORAGE_KEY;

#[component]
pub fn LoadError(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="load-error">
            <h2>"Couldn't load your todos"</h2>
            <p class="load-error-message">{message}</p>
            <p class="load-error-hint">
                "The saved data under \"" {STORAGE_KEY} "\" was left untouched."
            </p>
        </div>
    }
}
