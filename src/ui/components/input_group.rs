use dioxus::prelude::*;

use crate::domain::InputField;
use crate::ui::theme;

/// Labelled numeric control with a unit suffix. Emits the raw text on
/// every keystroke; parsing stays with the caller so a half-typed value
/// never clobbers the draft.
#[component]
pub fn InputGroup(
    field: InputField,
    value: String,
    wide: bool,
    on_change: EventHandler<String>,
) -> Element {
    let span = if wide { "col-span-2" } else { "" };

    rsx! {
        div { class: "flex flex-col space-y-1 {span}",
            label { class: "{theme::LABEL}", "{field.label()}" }
            div { class: "relative",
                input {
                    r#type: "number",
                    inputmode: "decimal",
                    class: "{theme::INPUT}",
                    value: value,
                    placeholder: "{field.placeholder()}",
                    oninput: move |evt| on_change.call(evt.value()),
                }
                span { class: "pointer-events-none absolute right-3 top-3 text-sm font-medium text-slate-400",
                    "{field.suffix()}"
                }
            }
        }
    }
}
