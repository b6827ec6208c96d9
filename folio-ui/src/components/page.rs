//! Page Shell Components
//!
//! Header, menu and empty state shared by the Blog and Projects screens.

use folio::Route as Screen;
use leptos::*;

use super::nav::Menu;

/// Screen frame with a title bar and a primary "new" action
#[component]
pub fn PageShell(
    current: Screen,
    subtitle: &'static str,
    action_label: &'static str,
    on_action: impl Fn() + 'static,
    /// Whether saved entries survive a reload
    persistent: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gradient-to-br from-slate-950 via-slate-900 to-slate-950 text-gray-100">
            <Menu current=current />

            <div class="max-w-4xl mx-auto px-6 py-16">
                <header class="flex flex-wrap items-end justify-between gap-4 mb-12">
                    <div>
                        <h1 class="text-5xl font-bold text-emerald-400 mb-2">{current.label()}</h1>
                        <p class="text-gray-400">{subtitle}</p>
                    </div>
                    <button
                        on:click=move |_| on_action()
                        class="px-6 py-3 bg-emerald-500/20 hover:bg-emerald-500/30 border border-emerald-500/40
                               rounded-lg transition-all text-emerald-400 font-semibold"
                    >
                        {format!("+ {}", action_label)}
                    </button>
                </header>

                <Show when=move || !persistent>
                    <p class="mb-8 px-4 py-3 rounded-lg border border-amber-500/40 bg-amber-500/10 text-amber-300 text-sm">
                        "Local storage is unavailable. Changes will be lost when you leave this page."
                    </p>
                </Show>

                {children()}
            </div>
        </div>
    }
}

/// Placeholder shown when a collection has no entries
#[component]
pub fn EmptyState(message: &'static str) -> impl IntoView {
    view! {
        <div class="text-center py-20 border border-dashed border-gray-700 rounded-2xl">
            <p class="text-gray-400 text-lg">{message}</p>
        </div>
    }
}

/// Edit and delete buttons on an entry card
#[component]
pub fn CardActions(
    on_edit: impl Fn() + 'static,
    on_delete: impl Fn() + 'static,
) -> impl IntoView {
    view! {
        <div class="flex gap-2 shrink-0">
            <button
                on:click=move |_| on_edit()
                class="px-3 py-1 text-sm bg-slate-700/50 hover:bg-slate-700 border border-slate-600 rounded-lg"
                title="Edit"
            >
                "Edit"
            </button>
            <button
                on:click=move |_| on_delete()
                class="px-3 py-1 text-sm bg-red-500/10 hover:bg-red-500/20 border border-red-500/40
                       text-red-400 rounded-lg"
                title="Delete"
            >
                "Delete"
            </button>
        </div>
    }
}
