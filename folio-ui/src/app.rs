//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::Toast;
use crate::pages::{Blog, Home, Projects};
use crate::state::{provide_global_state, use_global_state};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();
    let state = use_global_state();

    // Screens read storage keys and timings when they mount, so hold them
    // back until the site config has been settled
    let (ready, set_ready) = create_signal(false);
    spawn_local(async move {
        match api::fetch_site_config().await {
            Ok(site) => state.config.set_value(site),
            Err(e) => web_sys::console::warn_1(
                &format!("Using default site config ({})", e).into(),
            ),
        }
        set_ready.set(true);
    });

    view! {
        <Router>
            <Show when=move || ready.get()>
                <Routes>
                    <Route path="/" view=Home />
                    <Route path="/blog" view=Blog />
                    <Route path="/projects" view=Projects />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </Show>

            <Toast />
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-slate-950 text-gray-100 flex flex-col items-center justify-center text-center px-6">
            <h1 class="text-6xl font-bold text-amber-400 mb-4">"404"</h1>
            <p class="text-gray-400 mb-8">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-amber-500/20 hover:bg-amber-500/30 border border-amber-500/40
                       rounded-lg font-medium transition-colors text-amber-400"
            >
                "Go Home"
            </A>
        </div>
    }
}
