//! UI Components for the PetScan application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - Image selection with drag & drop, preview, predict button
//! - [`ResultSection`] - Prediction verdict with animated confidence bar
//! - [`NotificationHost`] - Transient notification banners (see [`notify`])

mod hero;
mod upload;
mod result;
mod notifications;
mod footer;

pub use hero::*;
pub use upload::*;
pub use result::*;
pub use notifications::*;
pub use footer::*;
