use dioxus::prelude::*;

use crate::domain::CalculationResult;
use crate::ui::components::kpi_card::KpiCard;
use crate::ui::theme;
use crate::util::currency::{format_currency, format_percent};

/// Headline card above the form: net profit in large type, margin and
/// break-even price underneath, and a warning strip when the listing
/// loses money.
#[component]
pub fn ResultCard(result: CalculationResult, selling_price: f64) -> Element {
    let headline_color = if result.is_profit {
        theme::TEXT_PROFIT
    } else {
        theme::TEXT_LOSS
    };
    let margin_tone = if result.profit_margin > 0.0 {
        None
    } else {
        Some(theme::TEXT_LOSS.to_string())
    };
    // A price of zero means nothing is on sale yet; staying quiet then
    // beats flagging an untouched form as a loss.
    let show_loss_warning = !result.is_profit && selling_price > 0.0;

    rsx! {
        div { class: "{theme::PANEL}",
            h2 { class: "mb-2 text-xs font-bold uppercase tracking-wider text-slate-500",
                "Net profit"
            }
            p { class: "mb-2 text-4xl font-bold {headline_color}",
                "{format_currency(result.net_profit)}"
            }
            div { class: "mt-4 grid grid-cols-2 gap-4 border-t border-slate-100 pt-4",
                KpiCard {
                    title: "Profit margin".to_string(),
                    value: format_percent(result.profit_margin),
                    tone: margin_tone,
                }
                KpiCard {
                    title: "Break-even price".to_string(),
                    value: format_currency(result.break_even_price),
                    tone: None,
                }
            }
            if show_loss_warning {
                div { class: "mt-3 flex items-start rounded-lg bg-rose-50 px-3 py-2 text-xs {theme::TEXT_LOSS}",
                    span { class: "mr-2", "⚠️" }
                    span { "You're selling at a loss. Raise the price or trim ads and fees." }
                }
            }
        }
    }
}
