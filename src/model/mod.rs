//! API data transfer objects.
//!
//! These types define the JSON wire format consumed by the website frontend.
//! Field names are serialized in camelCase to match the shapes the frontend
//! expects. Domain models are converted to DTOs at the controller boundary.

pub mod api;
pub mod content;
pub mod news;
pub mod screenshot;
pub mod stats;
pub mod status;
