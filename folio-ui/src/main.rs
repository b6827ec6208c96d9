//! Folio
//!
//! Personal portfolio site built with Leptos (WASM).
//!
//! # Screens
//!
//! - Home: resume sections, name scramble and a rotating background
//! - Blog: posts with create/edit/delete, kept in local storage
//! - Projects: the same flow with technology tags and links
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Data models and their validation live in the `folio` crate;
//! this crate binds them to the DOM and to `window.localStorage`. The only
//! request it makes is for the site config published by `folio serve`.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
