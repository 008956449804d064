//! Configuration file and environment handling

pub mod settings;

pub use settings::Settings;
