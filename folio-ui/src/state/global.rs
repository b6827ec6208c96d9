//! Global Application State
//!
//! Site configuration, home page content and the current notice, provided to
//! all components. Entry collections are not global: each screen owns its own.

use folio::config::SiteConfig;
use folio::home::SiteContent;
use gloo_timers::callback::Timeout;
use leptos::*;

const SUCCESS_MS: u32 = 3000;
const ERROR_MS: u32 = 5000;

/// Kind of transient notice shown by the toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient notice; `seq` tells apart repeated identical messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    seq: u32,
}

#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Storage keys and animation timing, replaced once `/site.json` loads
    pub config: StoredValue<SiteConfig>,
    /// Resume content for the home page
    pub content: StoredValue<SiteContent>,
    /// Notice currently on screen
    pub notice: RwSignal<Option<Notice>>,
    next_seq: StoredValue<u32>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let content = match SiteContent::embedded() {
        Ok(content) => content,
        Err(e) => {
            web_sys::console::error_1(&format!("Site content rejected: {}", e).into());
            SiteContent::default()
        }
    };

    provide_context(GlobalState {
        config: store_value(SiteConfig::default()),
        content: store_value(content),
        notice: create_rw_signal(None),
        next_seq: store_value(0),
    });
}

pub fn use_global_state() -> GlobalState {
    use_context::<GlobalState>().expect("GlobalState not provided")
}

impl GlobalState {
    pub fn show_success(&self, message: &str) {
        self.notify(NoticeKind::Success, message, SUCCESS_MS);
    }

    /// Show an error notice and mirror it to the console
    pub fn show_error(&self, message: &str) {
        web_sys::console::error_1(&message.into());
        self.notify(NoticeKind::Error, message, ERROR_MS);
    }

    pub fn dismiss(&self) {
        self.notice.set(None);
    }

    /// Replace the current notice; it clears itself after `ms` unless a newer
    /// one took its place
    fn notify(&self, kind: NoticeKind, message: &str, ms: u32) {
        let seq = self.next_seq.get_value().wrapping_add(1);
        self.next_seq.set_value(seq);
        self.notice.set(Some(Notice {
            kind,
            message: message.to_string(),
            seq,
        }));

        let notice = self.notice;
        Timeout::new(ms, move || {
            if notice.with_untracked(|n| n.as_ref().is_some_and(|n| n.seq == seq)) {
                notice.set(None);
            }
        })
        .forget();
    }
}
