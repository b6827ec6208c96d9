//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod carousel;
pub mod modal;
pub mod nav;
pub mod page;
pub mod scramble;
pub mod toast;

pub use carousel::BackgroundCarousel;
pub use modal::{Modal, TextArea, TextField};
pub use nav::{Menu, SectionLinks};
pub use page::{CardActions, EmptyState, PageShell};
pub use scramble::ScrambleText;
pub use toast::Toast;
