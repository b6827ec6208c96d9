//! Scramble Text Component
//!
//! Renders a line of text through the decrypt-style reveal, one frame per
//! timer tick, and stops the timer once the text has resolved.

use folio::home::TextScramble;
use leptos::leptos_dom::helpers::IntervalHandle;
use leptos::*;
use std::time::Duration;

#[component]
pub fn ScrambleText(
    #[prop(into)]
    text: String,
    frame_ms: u32,
    frames_per_char: u32,
    #[prop(optional)]
    class: &'static str,
) -> impl IntoView {
    let scramble = store_value(TextScramble::new(&text, frames_per_char));
    let handle = store_value(None::<IntervalHandle>);

    let first = scramble.try_update_value(|s| s.tick(random_index));
    let (display, set_display) = create_signal(first.map(|f| f.text).unwrap_or(text));

    let step = move || {
        let Some(frame) = scramble.try_update_value(|s| s.tick(random_index)) else {
            return;
        };
        set_display.set(frame.text);
        if frame.done {
            stop(handle);
        }
    };

    match set_interval_with_handle(step, Duration::from_millis(u64::from(frame_ms))) {
        Ok(h) => handle.set_value(Some(h)),
        Err(e) => web_sys::console::warn_2(&"Scramble timer unavailable".into(), &e),
    }
    on_cleanup(move || stop(handle));

    view! {
        <span class=class aria-label=scramble.with_value(TextScramble::target)>
            {move || display.get()}
        </span>
    }
}

fn stop(handle: StoredValue<Option<IntervalHandle>>) {
    if let Some(h) = handle.try_update_value(Option::take).flatten() {
        h.clear();
    }
}

fn random_index(n: usize) -> usize {
    (js_sys::Math::random() * n as f64) as usize
}
