//! State Management
//!
//! Global application state, the per-screen entry editor and the browser
//! bindings it persists through.

pub mod editor;
pub mod global;
pub mod prompt;
pub mod storage;

pub use editor::{EditMode, EntryEditor};
pub use global::{provide_global_state, use_global_state, GlobalState};
pub use storage::BrowserStore;
