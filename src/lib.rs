pub mod app;
pub mod config;
pub mod input;
pub mod logging;
pub mod pacing;
pub mod render;
pub mod terminal;
pub mod visual;
