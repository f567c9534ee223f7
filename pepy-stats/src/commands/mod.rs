pub mod browse;
pub mod settings;
pub mod show;
