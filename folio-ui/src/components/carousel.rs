//! Background Carousel Component
//!
//! Stacks one full-screen layer per image and crossfades between them on a
//! fixed interval.

use folio::home::Carousel;
use gloo_timers::callback::Interval;
use leptos::*;

#[component]
pub fn BackgroundCarousel(images: Vec<String>, interval_ms: u32) -> impl IntoView {
    let carousel = create_rw_signal(Carousel::new(images.len()));

    if images.len() > 1 {
        let interval = Interval::new(interval_ms, move || {
            carousel.update(|c| {
                c.advance();
            });
        });
        on_cleanup(move || drop(interval));
    }

    view! {
        <div class="fixed inset-0 -z-10 overflow-hidden" aria-hidden="true">
            {images
                .into_iter()
                .enumerate()
                .map(|(index, src)| view! {
                    <div
                        class=move || format!(
                            "absolute inset-0 bg-cover bg-center transition-opacity duration-1000 {}",
                            carousel.with(|c| c.layer(index).class())
                        )
                        style=format!("background-image: url('{}')", src)
                    />
                })
                .collect_view()}
            <div class="absolute inset-0 z-30 bg-slate-950/75" />
        </div>
    }
}
