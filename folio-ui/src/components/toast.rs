//! Toast Notification Component

use leptos::*;

use crate::state::global::{Notice, NoticeKind};
use crate::state::use_global_state;

/// Bottom-right notice for save/delete outcomes; click to dismiss
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_global_state();

    view! {
        <div class="fixed bottom-6 right-6 z-50">
            {move || state.notice.get().map(|notice| view! {
                <button on:click=move |_| state.dismiss() class=notice_class(&notice) title="Dismiss">
                    <span class="text-lg">{notice_icon(notice.kind)}</span>
                    <span class="text-sm font-medium">{notice.message.clone()}</span>
                </button>
            })}
        </div>
    }
}

fn notice_icon(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "✓",
        NoticeKind::Error => "✕",
    }
}

fn notice_class(notice: &Notice) -> String {
    let color = match notice.kind {
        NoticeKind::Success => "bg-emerald-600",
        NoticeKind::Error => "bg-red-600",
    };
    format!(
        "flex items-center gap-3 {} text-white px-4 py-3 rounded-lg shadow-lg animate-slide-in",
        color
    )
}
