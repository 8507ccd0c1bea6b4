//! PetScan - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for sending pet photos to a cat/dog classifier
//! and rendering the verdict with an animated confidence bar.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ClassifierPage                                              │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadSection (drop zone, preview, predict button)     │
//! │  └── ResultSection (label, confidence text, bar)            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  NotificationHost (transient banners)                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (PredictResponse, ResultState, etc.)
//! - [`config`] - Endpoint and pacing configuration
//! - [`components`] - UI components (Upload, Result, Notifications, etc.)
//! - [`services`] - Backend communication (predict)

use leptos::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // API
    Confidence, PredictResponse,
    // Outcome + result region
    PredictOutcome, ResultState,
    // Interaction
    first_file, SubmitDecision,
    // Notifications
    Notification, NotificationKind, NotificationQueue,
    // Errors
    PredictError, PredictResult,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🐾 PetScan - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=ClassifierPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn ClassifierPage() -> impl IntoView {
    // Global state for one upload/predict interaction
    let (result, set_result) = create_signal(ResultState::default());
    let (bar_percent, set_bar_percent) = create_signal(0.0_f64);
    let (notifications, set_notifications) = create_signal(NotificationQueue::default());

    // Handle on the result section so the predict flow can scroll to it
    let result_ref = create_node_ref::<leptos::html::Div>();

    view! {
        <div class="container">
            <Hero/>

            <UploadSection
                result=result
                set_result=set_result
                set_bar_percent=set_bar_percent
                set_notifications=set_notifications
                result_ref=result_ref
            />

            <ResultSection
                result=result
                bar_percent=bar_percent
                section_ref=result_ref
            />
        </div>

        <NotificationHost notifications=notifications/>

        <Footer/>
    }
}
