pub mod app;
pub mod commands;
pub mod config;
pub mod desktop;
pub mod dialog;
pub mod docker;
pub mod error;

pub use desktop::run;
