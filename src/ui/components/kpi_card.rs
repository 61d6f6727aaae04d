use dioxus::prelude::*;

use crate::ui::theme;

/// Small stat block: caption on top, highlighted value below. `tone`
/// overrides the value color, e.g. to flag a negative margin.
#[component]
pub fn KpiCard(title: String, value: String, tone: Option<String>) -> Element {
    let tone = tone.unwrap_or_else(|| "text-slate-800".to_string());

    rsx! {
        div {
            p { class: "{theme::TEXT_MUTED}", "{title}" }
            p { class: "mt-1 text-lg font-semibold {tone}", "{value}" }
        }
    }
}
