mod content;
mod news;
mod peak;
mod screenshot;
mod stats;
