use std::path::Path;
use std::sync::Arc;

use egui_wgpu::ScreenDescriptor;
use egui_winit::State;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{Key, NamedKey};
use winit::window::Window;

use crate::error::CardError;
use crate::model::Student;
use crate::renderer::Renderer;
use crate::settings::Settings;
use crate::texture::AssetManager;
use crate::ui::Ui;

pub struct EventResponse {
    pub repaint: bool,
    pub exit: bool,
}

pub struct App {
    pub window: Arc<Window>,
    ui: Ui,
    renderer: Renderer,
    assets: AssetManager,
    egui_state: State,
    settings: Settings,
    needs_repaint: bool,
}

impl App {
    pub async fn new(
        window: Arc<Window>,
        runtime: tokio::runtime::Handle,
        settings: Settings,
        student: &Student,
    ) -> Result<Self, CardError> {
        let renderer = Renderer::new(&window).await?;

        let egui_ctx = renderer.egui_context();
        let egui_state = State::new(
            egui_ctx.clone(),
            egui::viewport::ViewportId::ROOT,
            &window,
            None,
            None,
            None,
        );

        let mut assets = AssetManager::new(Path::new(&settings.display.asset_dir));
        assets.start_loading(&runtime);

        Ok(Self {
            window,
            ui: Ui::new(student),
            renderer,
            assets,
            egui_state,
            settings,
            needs_repaint: true,
        })
    }

    /// True while the card is animating, images are arriving or egui asked
    /// for another frame.
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    pub fn handle_event(&mut self, event: &WindowEvent) -> EventResponse {
        // Let egui handle the event first
        let egui_response = self.egui_state.on_window_event(&self.window, event);
        let mut repaint = egui_response.repaint;

        match event {
            WindowEvent::CloseRequested => {
                return EventResponse {
                    repaint: false,
                    exit: true,
                };
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if egui_response.consumed || event.state != ElementState::Pressed || event.repeat {
                    return EventResponse {
                        repaint,
                        exit: false,
                    };
                }
                match event.logical_key {
                    Key::Named(NamedKey::Escape) => {
                        return EventResponse {
                            repaint: false,
                            exit: true,
                        };
                    }
                    Key::Named(NamedKey::F3) => {
                        let ui = &mut self.settings.ui;
                        ui.show_animation_info = !ui.show_animation_info;
                        ui.save();
                        repaint = true;
                    }
                    _ => {}
                }
            }
            WindowEvent::Resized(size) => {
                self.renderer.resize(*size);
                repaint = true;
            }
            _ => {}
        }

        EventResponse {
            repaint,
            exit: false,
        }
    }

    pub fn render(&mut self) -> Result<(), CardError> {
        let egui_ctx = self.renderer.egui_context();
        self.assets.poll(&egui_ctx);

        let raw_input = self.egui_state.take_egui_input(&self.window);

        let mut moving = false;
        let full_output = egui_ctx.run(raw_input, |ctx| {
            moving = self.ui.show(ctx, &self.assets, &mut self.settings);
        });

        let egui_wants_frame = full_output
            .viewport_output
            .get(&egui::viewport::ViewportId::ROOT)
            .is_some_and(|viewport| viewport.repaint_delay.is_zero());
        self.needs_repaint = moving || egui_wants_frame || self.assets.loading_count() > 0;

        self.egui_state
            .handle_platform_output(&self.window, full_output.platform_output);

        let paint_jobs = egui_ctx.tessellate(full_output.shapes, full_output.pixels_per_point);

        let size = self.window.inner_size();
        let screen_descriptor = ScreenDescriptor {
            size_in_pixels: [size.width, size.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        self.renderer.render(
            self.settings.display.clear_color(),
            paint_jobs,
            full_output.textures_delta,
            screen_descriptor,
        )
    }
}
