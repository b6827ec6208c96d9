//! Pages
//!
//! Top-level page components for each route.

pub mod blog;
pub mod home;
pub mod projects;

pub use blog::Blog;
pub use home::Home;
pub use projects::Projects;
