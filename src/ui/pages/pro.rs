use dioxus::prelude::*;

use crate::{
    app::Route,
    ui::{
        components::toast::{push_toast, ToastKind, ToastMessage},
        theme,
    },
};

const PRO_FEATURES: [&str; 6] = [
    "Unlimited calculation history",
    "Batch calculation across many products",
    "Excel / CSV report export",
    "Smart alerts when ads spend runs too high",
    "No ads, ever",
    "Priority support, around the clock",
];

/// Upsell page for the paid tier. Everything here is presentation: the
/// subscribe buttons only surface a notice, no entitlement exists yet.
#[component]
pub fn ProUpgradePage() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let nav = use_navigator();

    let on_subscribe = move |_| {
        push_toast(
            toasts.clone(),
            ToastKind::Info,
            "Subscriptions aren't wired up yet — the PRO tier is coming soon.",
        );
    };

    rsx! {
        div { class: "space-y-6 p-6",
            div { class: "mt-4 space-y-2 text-center",
                h2 { class: "text-2xl font-bold text-slate-900", "Upgrade to PRO" }
                p { class: "text-slate-500", "Run your store's numbers like a professional." }
            }

            div { class: "overflow-hidden rounded-2xl border border-indigo-100 bg-white shadow-xl",
                div { class: "border-b border-indigo-100 bg-indigo-50 p-6 text-center",
                    p { class: "text-sm font-semibold uppercase tracking-wide text-indigo-600",
                        "Yearly plan (save 40%)"
                    }
                    div { class: "mt-2 flex items-baseline justify-center",
                        span { class: "text-4xl font-bold text-slate-900", "199.000" }
                        span { class: "ml-1 text-slate-500", "₫/year" }
                    }
                    p { class: "mt-1 {theme::TEXT_MUTED}", "That's about 16k a month" }
                }
                div { class: "p-6",
                    ul { class: "space-y-4",
                        for feature in PRO_FEATURES {
                            li { class: "flex items-start",
                                span { class: "mr-3 font-bold {theme::TEXT_PROFIT}", "✓" }
                                span { class: "text-sm text-slate-600", "{feature}" }
                            }
                        }
                    }
                    button {
                        class: "mt-8 {theme::BTN_PRIMARY}",
                        onclick: on_subscribe,
                        "Subscribe now"
                    }
                }
            }

            div { class: "{theme::PANEL_SOFT}",
                div { class: "mb-4 flex items-center justify-between",
                    h3 { class: "font-semibold text-slate-800", "Monthly plan" }
                    span { class: "text-lg font-bold text-slate-900",
                        "29.000 "
                        span { class: "text-sm font-normal text-slate-500", "₫" }
                    }
                }
                button {
                    class: "{theme::BTN_OUTLINE}",
                    onclick: on_subscribe,
                    "Choose monthly"
                }
            }

            div { class: "pt-4 text-center",
                button {
                    class: "text-sm text-slate-400 hover:text-slate-600",
                    onclick: move |_| { nav.push(Route::Calculator {}); },
                    "Back to the calculator"
                }
            }
        }
    }
}
