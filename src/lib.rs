pub const CONFY_APP_NAME: &str = "scenecam";

pub mod app;
pub mod camera;
pub mod error;
pub mod input;
pub mod settings;
