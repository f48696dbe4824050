//! Backend for the community Minecraft server website.
//!
//! Layered into controllers (HTTP handlers), services (business logic),
//! data (repositories over SeaORM entities) and models (domain types).
//! A background scheduler polls the Minecraft status API so player peaks
//! keep updating even when nobody is browsing the site.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
