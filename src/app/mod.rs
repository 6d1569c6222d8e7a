mod app;
mod handler;

pub use app::{App, EventResponse};
pub use handler::AppHandler;
