//! Backend communication services.
//!
//! # Services
//!
//! - [`predict`] - Image submission to the prediction endpoint
//!
//! Inference itself runs server-side; the frontend only ships the image
//! and renders the verdict.

pub mod predict;

pub use predict::*;
