pub mod content;
pub mod news;
pub mod screenshot;
pub mod stats;
pub mod status;
