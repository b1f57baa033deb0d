// Engine modules: input, configuration, settings, display control

pub mod config;
pub mod display;
pub mod input;
pub mod settings;
pub mod system;
