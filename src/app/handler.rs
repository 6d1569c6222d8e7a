use std::sync::Arc;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

use crate::app::{App, EventResponse};
use crate::settings::Settings;

/// Owns the `App` across the winit lifecycle callbacks.
#[derive(Default)]
pub struct AppHandler {
    pub app: Option<App>,
}

impl ApplicationHandler for AppHandler {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.app.is_none() {
            let settings = Settings::load();
            let window_attrs = Window::default_attributes()
                .with_title("scenecam")
                .with_inner_size(winit::dpi::LogicalSize::new(
                    settings.window.width,
                    settings.window.height,
                ));

            match event_loop.create_window(window_attrs) {
                Ok(window) => {
                    self.app = Some(App::new(Arc::new(window), settings));
                }
                Err(e) => {
                    log::error!("window creation failed: {e}");
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(app) = &mut self.app {
            let EventResponse { repaint, exit } = app.handle_event(&event);
            if repaint {
                app.window.request_redraw();
            }
            if exit {
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(app) = &mut self.app {
            app.frame();
            app.window.request_redraw();
        }
    }
}
