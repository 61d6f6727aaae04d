use dioxus::prelude::*;

use crate::{
    app::{persist_user_state, Route},
    domain::{compute, AppState, DraftInput, InputField},
    ui::{
        components::{input_group::InputGroup, result_card::ResultCard},
        theme,
    },
};

#[component]
pub fn CalculatorPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let nav = use_navigator();

    let draft = state.with(|st| st.draft);
    let mut field_text = use_signal(|| FieldTexts::from_draft(&draft));

    let input = draft.normalized();
    let result = compute(&input);

    rsx! {
        div { class: "space-y-6 p-4 pb-12",
            ResultCard { result, selling_price: input.selling_price }

            section { class: "{theme::PANEL_SOFT}",
                h3 { class: "mb-4 flex items-center text-sm font-semibold text-indigo-700",
                    span { class: "mr-2 h-4 w-1 rounded-full bg-indigo-500" }
                    "Listing details"
                }
                div { class: "grid grid-cols-2 gap-3",
                    for field in InputField::ALL {
                        InputGroup {
                            field,
                            value: field_text.with(|texts| texts.get(field).to_string()),
                            wide: matches!(field, InputField::AdsCost),
                            on_change: move |raw: String| {
                                field_text.with_mut(|texts| texts.set(field, raw.clone()));
                                match classify_edit(&raw) {
                                    FieldEdit::Invalid => {}
                                    FieldEdit::Cleared => {
                                        state.with_mut(|st| st.draft.set(field, None));
                                        persist_user_state(&state);
                                    }
                                    FieldEdit::Value(value) => {
                                        state.with_mut(|st| st.draft.set(field, Some(value)));
                                        persist_user_state(&state);
                                    }
                                }
                            },
                        }
                    }
                }
            }

            button {
                class: "{theme::BTN_PRIMARY}",
                onclick: move |_| { nav.push(Route::Pro {}); },
                "⭐ Save calculation history (PRO)"
            }
        }
    }
}

/// Raw text per form field, kept separate from the parsed draft so the
/// control shows exactly what the seller typed (including a trailing dot
/// mid-entry).
struct FieldTexts([String; InputField::ALL.len()]);

impl FieldTexts {
    fn from_draft(draft: &DraftInput) -> Self {
        Self(InputField::ALL.map(|field| display_value(draft.get(field))))
    }

    fn get(&self, field: InputField) -> &str {
        &self.0[field as usize]
    }

    fn set(&mut self, field: InputField, raw: String) {
        self.0[field as usize] = raw;
    }
}

enum FieldEdit {
    Cleared,
    Value(f64),
    Invalid,
}

fn classify_edit(raw: &str) -> FieldEdit {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return FieldEdit::Cleared;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => FieldEdit::Value(value),
        _ => FieldEdit::Invalid,
    }
}

fn display_value(value: Option<f64>) -> String {
    match value {
        None => String::new(),
        Some(v) if v.fract() == 0.0 => format!("{v:.0}"),
        Some(v) => v.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_or_blank_text_clears_the_field() {
        assert!(matches!(classify_edit(""), FieldEdit::Cleared));
        assert!(matches!(classify_edit("   "), FieldEdit::Cleared));
    }

    #[test]
    fn numeric_text_parses_including_decimals() {
        assert!(matches!(classify_edit("200000"), FieldEdit::Value(v) if v == 200_000.0));
        assert!(matches!(classify_edit("2.5"), FieldEdit::Value(v) if v == 2.5));
        assert!(matches!(classify_edit(" -5 "), FieldEdit::Value(v) if v == -5.0));
    }

    #[test]
    fn garbage_and_non_finite_text_is_ignored() {
        assert!(matches!(classify_edit("abc"), FieldEdit::Invalid));
        assert!(matches!(classify_edit("1,5"), FieldEdit::Invalid));
        assert!(matches!(classify_edit("inf"), FieldEdit::Invalid));
        assert!(matches!(classify_edit("NaN"), FieldEdit::Invalid));
    }

    #[test]
    fn display_value_round_trips_whole_and_fractional_numbers() {
        assert_eq!(display_value(None), "");
        assert_eq!(display_value(Some(200_000.0)), "200000");
        assert_eq!(display_value(Some(2.5)), "2.5");
    }
}
