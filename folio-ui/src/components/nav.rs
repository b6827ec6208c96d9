//! Navigation Components
//!
//! The top-right menu linking the screens, and the home page section nav.

use folio::home::{Section, SectionNav};
use folio::Route as Screen;
use leptos::*;
use leptos_router::*;

/// Toggleable menu with links to every other screen
#[component]
pub fn Menu(current: Screen) -> impl IntoView {
    let (open, set_open) = create_signal(false);

    view! {
        <div class="fixed top-6 right-6 z-50">
            <button
                on:click=move |_| set_open.update(|o| *o = !*o)
                class="p-3 bg-black/60 hover:bg-black/80 rounded-lg transition-all
                       border border-gray-700/60 flex items-center gap-2"
            >
                <span class="text-xl leading-none">{move || if open.get() { "✕" } else { "☰" }}</span>
                <span class="text-gray-200 font-semibold hidden sm:inline">"Menu"</span>
            </button>

            <Show when=move || open.get()>
                <nav class="absolute top-16 right-0 bg-slate-900/95 backdrop-blur-sm border border-gray-700/60
                            rounded-lg shadow-2xl overflow-hidden w-48 flex flex-col">
                    {current
                        .others()
                        .map(|screen| view! {
                            <div on:click=move |_| set_open.set(false)>
                                <MenuLink screen=screen />
                            </div>
                        })
                        .collect_view()}
                </nav>
            </Show>
        </div>
    }
}

#[component]
fn MenuLink(screen: Screen) -> impl IntoView {
    view! {
        <A
            href=screen.path()
            class="block px-6 py-3 text-gray-300 hover:text-amber-400 hover:bg-slate-800/50
                   transition-all border-b border-gray-700/40"
        >
            {screen.label()}
        </A>
    }
}

/// In-page nav: clicking a section scrolls to it smoothly and marks it active
#[component]
pub fn SectionLinks() -> impl IntoView {
    let nav = create_rw_signal(SectionNav::default());

    // Deep links such as `/#skills` open on that section
    let linked = window()
        .location()
        .hash()
        .ok()
        .and_then(|hash| Section::from_anchor(&hash));
    if let Some(section) = linked {
        let anchor = nav.try_update(|n| n.select(section)).unwrap_or(section.anchor());
        request_animation_frame(move || scroll_to(anchor));
    }

    let select = move |section: Section| {
        let mut anchor = "";
        nav.update(|n| anchor = n.select(section));
        scroll_to(anchor);
    };

    view! {
        <nav class="sticky top-0 z-40 bg-slate-900/80 backdrop-blur-sm border-b border-gray-700/60">
            <div class="max-w-5xl mx-auto px-6 flex gap-1 overflow-x-auto">
                {Section::ALL
                    .into_iter()
                    .map(|section| view! {
                        <button
                            on:click=move |_| select(section)
                            class=move || {
                                let base = "px-4 py-3 text-sm font-medium whitespace-nowrap transition-colors border-b-2";
                                if nav.with(|n| n.is_active(section)) {
                                    format!("{} border-amber-400 text-amber-400", base)
                                } else {
                                    format!("{} border-transparent text-gray-300 hover:text-white", base)
                                }
                            }
                        >
                            {section.label()}
                        </button>
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}

/// Smoothly scroll the element with id `anchor` into view
fn scroll_to(anchor: &str) {
    let Some(element) = document().get_element_by_id(anchor) else {
        web_sys::console::warn_1(&format!("No section with id {:?}", anchor).into());
        return;
    };

    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
