//! Modal Form Components
//!
//! Overlay used by the create/edit forms, plus the labelled inputs inside it.

use leptos::*;

/// Overlay with a title bar, the form fields and Cancel/submit actions
#[component]
pub fn Modal(
    #[prop(into)]
    title: String,
    #[prop(into)]
    submit_label: String,
    on_close: impl Fn() + Clone + 'static,
    on_submit: impl Fn() + 'static,
    children: Children,
) -> impl IntoView {
    let close_button = on_close.clone();

    view! {
        <div class="fixed inset-0 bg-black/50 backdrop-blur-sm z-50 flex items-center justify-center p-6">
            <div class="bg-slate-800 rounded-2xl border border-emerald-500/40 max-w-2xl w-full
                        max-h-[90vh] overflow-y-auto p-8">
                <div class="flex justify-between items-center mb-6">
                    <h2 class="text-3xl font-bold text-emerald-400">{title}</h2>
                    <button
                        on:click=move |_| close_button()
                        class="p-2 hover:bg-slate-700 rounded-lg transition-all text-xl"
                        title="Close"
                    >
                        "✕"
                    </button>
                </div>

                <div class="space-y-6">
                    {children()}

                    <div class="flex gap-4 justify-end">
                        <button
                            on:click=move |_| on_close()
                            class="px-6 py-2 bg-slate-700/50 hover:bg-slate-700 border border-slate-600
                                   rounded-lg transition-all"
                        >
                            "Cancel"
                        </button>
                        <button
                            on:click=move |_| on_submit()
                            class="px-6 py-2 bg-emerald-500/20 hover:bg-emerald-500/30 border border-emerald-500/40
                                   rounded-lg transition-all text-emerald-400 font-semibold"
                        >
                            {submit_label}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

const INPUT_CLASS: &str = "w-full bg-slate-700/50 border border-emerald-500/20 rounded-lg px-4 py-3 \
                           text-gray-100 placeholder-gray-500 focus:outline-none \
                           focus:border-emerald-500/50 transition-all";

/// Labelled single-line input
#[component]
pub fn TextField(
    label: &'static str,
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(default = "")]
    placeholder: &'static str,
    value: impl Fn() -> String + 'static,
    on_input: impl Fn(String) + 'static,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-semibold mb-2 text-emerald-400">{label}</label>
            <input
                type=input_type
                placeholder=placeholder
                prop:value=value
                on:input=move |ev| on_input(event_target_value(&ev))
                class=INPUT_CLASS
            />
        </div>
    }
}

/// Labelled multi-line input
#[component]
pub fn TextArea(
    label: &'static str,
    #[prop(default = "")]
    placeholder: &'static str,
    #[prop(default = 6)]
    rows: u32,
    value: impl Fn() -> String + 'static,
    on_input: impl Fn(String) + 'static,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-semibold mb-2 text-emerald-400">{label}</label>
            <textarea
                placeholder=placeholder
                rows=rows
                prop:value=value
                on:input=move |ev| on_input(event_target_value(&ev))
                class=format!("{} resize-none", INPUT_CLASS)
            />
        </div>
    }
}
