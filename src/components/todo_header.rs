//! Todo Header Component
//!
//! Title, today's date and the completed/total badge.

use leptos::prelude::*;
use serde::Serialize;
use wasm_bindgen::JsValue;

use crate::context::use_app_context;

const TITLE: &str = "Cozy Todos";

/// `Intl.DateTimeFormat` options for the date line
#[derive(Serialize)]
struct DateFormat {
    month: &'static str,
    day: &'static str,
    weekday: &'static str,
}

/// Today formatted like "Mon, October 19"
fn today_label() -> String {
    let options = serde_wasm_bindgen::to_value(&DateFormat {
        month: "long",
        day: "numeric",
        weekday: "short",
    })
    .unwrap_or(JsValue::UNDEFINED);
    js_sys::Date::new_0()
        .to_locale_date_string("en-US", &options)
        .into()
}

#[component]
pub fn TodoHeader() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <header class="todo-header">
            <div class="todo-heading">
                <h1>{TITLE} <span class="heart">"♥"</span></h1>
                <p class="todo-date">"📅 " {today_label()}</p>
            </div>
            <div class="todo-badge">
                {move || format!("Done {}/{}", ctx.completed_count(), ctx.total())}
            </div>
        </header>
    }
}
