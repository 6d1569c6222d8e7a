use winit::event_loop::{ControlFlow, EventLoop};

use scenecam::app::AppHandler;
use scenecam::error::ViewerError;

fn main() -> Result<(), ViewerError> {
    env_logger::init();

    log::info!("starting scenecam (Tab: free-look, WASD: move, Left/Right: cycle viewpoints)");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut handler = AppHandler::default();
    event_loop.run_app(&mut handler)?;

    Ok(())
}
