//! Shared Tailwind class fragments so the pages stay visually consistent.

pub const PANEL: &str = "rounded-2xl border border-slate-100 bg-white p-5 shadow-lg";
pub const PANEL_SOFT: &str = "rounded-xl border border-slate-100 bg-white p-5 shadow-sm";

pub const LABEL: &str = "text-sm font-medium text-slate-600";
pub const INPUT: &str = "w-full rounded-lg border border-slate-200 bg-white p-3 text-sm font-medium text-slate-800 outline-none transition focus:border-indigo-500";

pub const BTN_PRIMARY: &str = "w-full rounded-xl bg-indigo-600 px-4 py-3 text-sm font-bold text-white shadow-lg transition hover:bg-indigo-700";
pub const BTN_OUTLINE: &str = "w-full rounded-lg border border-indigo-500 py-2 text-sm font-medium text-indigo-600 transition hover:bg-indigo-50";

pub const TEXT_PROFIT: &str = "text-emerald-600";
pub const TEXT_LOSS: &str = "text-rose-600";
pub const TEXT_MUTED: &str = "text-xs text-slate-400";
