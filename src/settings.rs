use crate::CONFY_APP_NAME;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub background_color: [f32; 3],
    pub window_width: f32,
    pub window_height: f32,
    pub asset_dir: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            // #333
            background_color: [0.2, 0.2, 0.2],
            window_width: 480.0,
            window_height: 760.0,
            asset_dir: "assets/ctu-images".to_string(),
        }
    }
}

impl DisplaySettings {
    pub fn load() -> Self {
        confy::load(CONFY_APP_NAME, "display").unwrap_or_else(|e| {
            log::warn!("Falling back to default display settings: {}", e);
            Self::default()
        })
    }

    /// Background as an egui color, for panels painted over the clear.
    pub fn background(&self) -> egui::Color32 {
        let [r, g, b] = self.background_color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
        egui::Color32::from_rgb(r, g, b)
    }

    pub fn clear_color(&self) -> wgpu::Color {
        wgpu::Color {
            r: self.background_color[0] as f64,
            g: self.background_color[1] as f64,
            b: self.background_color[2] as f64,
            a: 1.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    pub show_animation_info: bool,
}

impl UiSettings {
    pub fn load() -> Self {
        confy::load(CONFY_APP_NAME, "ui").unwrap_or_else(|e| {
            log::warn!("Falling back to default ui settings: {}", e);
            Self::default()
        })
    }

    pub fn save(&self) {
        if let Err(e) = confy::store(CONFY_APP_NAME, "ui", self) {
            log::warn!("Failed to save ui settings: {}", e);
        }
    }
}

// Aggregate struct for convenience
pub struct Settings {
    pub display: DisplaySettings,
    pub ui: UiSettings,
}

impl Settings {
    pub fn load() -> Self {
        Self {
            display: DisplaySettings::load(),
            ui: UiSettings::load(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_defaults_match_card_window() {
        let display = DisplaySettings::default();
        assert_eq!(display.background_color, [0.2, 0.2, 0.2]);
        assert_eq!(display.asset_dir, "assets/ctu-images");
        assert!(display.window_width >= crate::card::style::CARD_WIDTH);
        assert!(display.window_height >= crate::card::style::CARD_HEIGHT);
    }

    #[test]
    fn display_settings_survive_toml() {
        let display = DisplaySettings {
            background_color: [0.1, 0.5, 0.9],
            window_width: 600.0,
            window_height: 900.0,
            asset_dir: "/opt/ctu".to_string(),
        };
        let text = toml::to_string(&display).unwrap();
        let back: DisplaySettings = toml::from_str(&text).unwrap();
        assert_eq!(back, display);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let back: DisplaySettings = toml::from_str("window_width = 512.0").unwrap();
        assert_eq!(back.window_width, 512.0);
        assert_eq!(back.asset_dir, DisplaySettings::default().asset_dir);

        let ui: UiSettings = toml::from_str("").unwrap();
        assert!(!ui.show_animation_info);
    }

    #[test]
    fn clear_color_is_opaque() {
        let color = DisplaySettings::default().clear_color();
        assert_eq!(color.a, 1.0);
        assert!((color.r - 0.2).abs() < 1e-6);
    }

    #[test]
    fn background_is_the_dark_gray_page() {
        assert_eq!(
            DisplaySettings::default().background(),
            egui::Color32::from_rgb(0x33, 0x33, 0x33)
        );
    }
}
