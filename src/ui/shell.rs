use dioxus::prelude::*;

use crate::app::Route;
use crate::util::version::version_label;

/// Phone-width chrome around every page: brand header with contextual
/// navigation, scrollable content, attribution footer.
#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();
    let on_pro_page = matches!(current_route, Route::Pro {});

    rsx! {
        div { class: "relative mx-auto flex min-h-screen max-w-md flex-col bg-slate-50 font-sans text-slate-900 shadow-xl",
            header { class: "sticky top-0 z-10 bg-indigo-600 p-4 text-white shadow-md",
                div { class: "flex items-center justify-between",
                    h1 {
                        class: "cursor-pointer text-xl font-bold tracking-tight",
                        onclick: move |_| { nav.push(Route::Calculator {}); },
                        "Real Profit "
                        span { class: "font-light text-indigo-200", "Calc" }
                    }
                    nav {
                        if on_pro_page {
                            button {
                                class: "text-sm font-medium text-indigo-100 hover:text-white",
                                onclick: move |_| { nav.push(Route::Calculator {}); },
                                "Back"
                            }
                        } else {
                            button {
                                class: "rounded-full bg-white px-3 py-1 text-sm font-semibold text-indigo-600 shadow-sm transition hover:bg-indigo-50",
                                onclick: move |_| { nav.push(Route::Pro {}); },
                                "Upgrade to PRO"
                            }
                        }
                    }
                }
            }
            main { class: "grow overflow-y-auto",
                {children}
            }
            footer { class: "border-t border-slate-200 bg-white p-4 text-center text-xs text-slate-400",
                "Real Profit Calculator for Sellers · {version_label()}"
            }
        }
    }
}
