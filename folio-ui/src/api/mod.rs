//! Server API
//!
//! The static server's only data endpoint is the published site config.

pub mod client;

pub use client::fetch_site_config;
