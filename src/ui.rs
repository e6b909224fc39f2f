use egui::{Event, PointerButton, Rect, Sense};

use crate::animation::{HoverAnimation, HoverTrigger};
use crate::card::{CardScene, Slot};
use crate::model::Student;
use crate::renderer::CardPainter;
use crate::settings::{Settings, UiSettings};
use crate::texture::AssetManager;

/// A primary button transition seen this frame, in arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEdge {
    PressOnCard,
    Release,
}

/// Pointer state over the card, carried between frames.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PointerState {
    pub hovered: bool,
    pub pressed: bool,
}

impl PointerState {
    /// Fold one frame into the state and return the edges it produced.
    ///
    /// Hover edges come first so that a press change in the same frame has
    /// the last word. Button edges replay in order, so a press and release
    /// that arrive together still yield both triggers.
    pub fn advance(&mut self, hovered: bool, buttons: &[ButtonEdge]) -> Vec<HoverTrigger> {
        let mut triggers = Vec::new();
        match (self.hovered, hovered) {
            (false, true) => triggers.push(HoverTrigger::PointerEnter),
            (true, false) => triggers.push(HoverTrigger::PointerLeave),
            _ => {}
        }
        self.hovered = hovered;

        for edge in buttons {
            match edge {
                ButtonEdge::PressOnCard => {
                    triggers.push(HoverTrigger::PressStart);
                    self.pressed = true;
                }
                ButtonEdge::Release if self.pressed => {
                    triggers.push(HoverTrigger::PressEnd);
                    self.pressed = false;
                }
                ButtonEdge::Release => {}
            }
        }
        triggers
    }
}

/// Primary button edges from this frame's raw events. Presses only count
/// when they land on the card.
fn button_edges(events: &[Event], hovered: bool, card_rect: Rect) -> Vec<ButtonEdge> {
    events
        .iter()
        .filter_map(|event| match event {
            Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed: true,
                ..
            } if hovered && card_rect.contains(*pos) => Some(ButtonEdge::PressOnCard),
            Event::PointerButton {
                button: PointerButton::Primary,
                pressed: false,
                ..
            } => Some(ButtonEdge::Release),
            _ => None,
        })
        .collect()
}

pub struct Ui {
    animation: HoverAnimation,
    scene: CardScene,
    pointer: PointerState,
}

impl Ui {
    pub fn new(student: &Student) -> Self {
        Self {
            animation: HoverAnimation::new(),
            scene: CardScene::build(student),
            pointer: PointerState::default(),
        }
    }

    #[cfg(test)]
    pub fn animation(&self) -> &HoverAnimation {
        &self.animation
    }

    /// Draw one frame. Returns true while the card is still moving.
    pub fn show(&mut self, ctx: &egui::Context, assets: &AssetManager, settings: &mut Settings) -> bool {
        let dt = ctx.input(|i| i.stable_dt);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(settings.display.background()))
            .show(ctx, |ui| {
                let card_rect = Rect::from_center_size(ui.max_rect().center(), self.scene.bounds().size());
                let response = ui.allocate_rect(card_rect, Sense::click());

                let hovered = response.hovered();
                let (mut buttons, primary_down) = ui.input(|i| {
                    (button_edges(&i.events, hovered, card_rect), i.pointer.primary_down())
                });
                // A lost release still ends the press once the button is up.
                if self.pointer.pressed && !primary_down && !buttons.contains(&ButtonEdge::Release) {
                    buttons.push(ButtonEdge::Release);
                }
                for trigger in self.pointer.advance(hovered, &buttons) {
                    self.animation.trigger(trigger);
                }

                self.animation.step(dt);

                CardPainter::new(ui.painter(), card_rect, &self.animation.transform())
                    .paint(&self.scene, assets);
            });

        if settings.ui.show_animation_info {
            self.show_animation_window(ctx, assets, &mut settings.ui);
        }

        !self.animation.is_settled()
    }

    fn show_animation_window(
        &mut self,
        ctx: &egui::Context,
        assets: &AssetManager,
        ui_settings: &mut UiSettings,
    ) {
        egui::Window::new("🎬 Animation")
            .default_width(260.0)
            .resizable(false)
            .open(&mut ui_settings.show_animation_info)
            .show(ctx, |ui| {
                let transform = self.animation.transform();
                ui.label(format!("Phase: {}", self.animation.phase().label()));
                ui.label(format!(
                    "Value: {:.4} -> {:.0}",
                    self.animation.value(),
                    self.animation.target()
                ));
                ui.label(format!("Velocity: {:.4}", self.animation.velocity()));
                ui.label(if self.animation.is_settled() { "Settled" } else { "Moving" });
                let spec = self.animation.spec();
                ui.label(format!(
                    "Spring: ζ {:.2}, ω {:.1} rad/s",
                    spec.damping_ratio(),
                    spec.natural_frequency()
                ));

                ui.separator();
                ui.label(format!("Rotate X: {:.2}°", transform.rotate_x_deg));
                ui.label(format!("Rotate Y: {:.2}°", transform.rotate_y_deg));
                ui.label(format!("Scale: {:.4}", transform.scale));
                ui.label(format!("Perspective: {:.0}px", transform.perspective));

                ui.separator();
                for slot in [Slot::StudentName, Slot::CourseCode, Slot::IdLine] {
                    if let Some(text) = self.scene.text(slot) {
                        ui.label(text);
                    }
                }

                ui.separator();
                ui.label(format!(
                    "Images: {} loaded, {} loading, {} failed",
                    assets.loaded_count(),
                    assets.loading_count(),
                    assets.error_count()
                ));
                for info in self.scene.assets().filter_map(|asset| assets.get(asset)) {
                    ui.horizontal(|ui| {
                        ui.label(info.asset.label());
                        ui.colored_label(info.status_color(), info.status_text());
                    });
                }
            });

        if !ui_settings.show_animation_info {
            ui_settings.save();
        }
    }
}
