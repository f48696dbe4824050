pub mod content;
pub mod news;
pub mod peak;
pub mod screenshot;
pub mod stats;
pub mod status;
