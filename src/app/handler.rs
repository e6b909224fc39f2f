use std::sync::Arc;

use tokio::runtime::Runtime;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

use crate::app::app::App;
use crate::error::CardError;
use crate::model::Student;
use crate::settings::Settings;

pub struct AppHandler {
    pub app: Option<App>,
    pub runtime: Runtime,
    pub student: Student,
    /// Taken by the app once the window exists.
    pub settings: Option<Settings>,
}

impl AppHandler {
    pub fn new(runtime: Runtime, student: Student, settings: Settings) -> Self {
        Self {
            app: None,
            runtime,
            student,
            settings: Some(settings),
        }
    }

    fn start(&self, event_loop: &ActiveEventLoop, settings: Settings) -> Result<App, CardError> {
        let window_attrs = Window::default_attributes()
            .with_title("CTU ID Card")
            .with_inner_size(LogicalSize::new(
                settings.display.window_width,
                settings.display.window_height,
            ));
        let window = Arc::new(event_loop.create_window(window_attrs)?);

        let runtime_handle = self.runtime.handle().clone();
        self.runtime
            .block_on(App::new(window, runtime_handle, settings, &self.student))
    }
}

impl ApplicationHandler for AppHandler {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.app.is_some() {
            return;
        }
        let Some(settings) = self.settings.take() else {
            return;
        };

        match self.start(event_loop, settings) {
            Ok(app) => {
                app.window.request_redraw();
                self.app = Some(app);
            }
            Err(e) => {
                log::error!("Failed to start: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(app) = &mut self.app else {
            return;
        };

        if let WindowEvent::RedrawRequested = event {
            if let Err(e) = app.render() {
                log::error!("Render error: {}", e);
            }
            return;
        }

        let response = app.handle_event(&event);
        if response.repaint {
            app.window.request_redraw();
        }
        if response.exit {
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(app) = &self.app {
            if app.needs_repaint() {
                app.window.request_redraw();
            }
        }
    }
}
