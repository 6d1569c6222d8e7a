use thiserror::Error;

/// Errors from the viewer shell. The camera itself is total over its input;
/// the clamps are silent saturation, never errors.
#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("window creation failed: {0}")]
    Window(#[from] winit::error::OsError),
}
