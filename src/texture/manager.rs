use std::path::{Path, PathBuf};

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

use crate::card::CardAsset;
use crate::texture::loader::{TextureLoadResult, load_image};

#[derive(Debug, Clone, PartialEq)]
pub enum TextureStatus {
    NotLoaded,
    Loading,
    Loaded,
    Error(String),
}

#[derive(Clone)]
pub struct AssetInfo {
    pub asset: CardAsset,
    pub path: PathBuf,
    pub status: TextureStatus,
    pub width: u32,
    pub height: u32,
    texture: Option<egui::TextureHandle>,
}

impl AssetInfo {
    pub fn new(asset: CardAsset, path: PathBuf) -> Self {
        Self {
            asset,
            path,
            status: TextureStatus::NotLoaded,
            width: 0,
            height: 0,
            texture: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, TextureStatus::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.status, TextureStatus::Loaded)
    }

    pub fn has_error(&self) -> bool {
        matches!(self.status, TextureStatus::Error(_))
    }

    pub fn status_text(&self) -> String {
        match &self.status {
            TextureStatus::NotLoaded => "Not Loaded".to_string(),
            TextureStatus::Loading => "Loading from disk...".to_string(),
            TextureStatus::Loaded => format!("Loaded ({}x{})", self.width, self.height),
            TextureStatus::Error(err) => format!("Error: {}", err),
        }
    }

    pub fn status_color(&self) -> egui::Color32 {
        match &self.status {
            TextureStatus::NotLoaded => egui::Color32::GRAY,
            TextureStatus::Loading => egui::Color32::YELLOW,
            TextureStatus::Loaded => egui::Color32::GREEN,
            TextureStatus::Error(_) => egui::Color32::RED,
        }
    }
}

/// Tracks the card images: where they live, whether they loaded, and their
/// egui textures once they did.
pub struct AssetManager {
    pub assets: Vec<AssetInfo>,
    sender: UnboundedSender<TextureLoadResult>,
    receiver: UnboundedReceiver<TextureLoadResult>,
}

impl AssetManager {
    pub fn new(asset_dir: &Path) -> Self {
        let (sender, receiver) = unbounded_channel();
        let assets = CardAsset::ALL
            .iter()
            .map(|&asset| AssetInfo::new(asset, resolve_path(asset_dir, asset.file_name())))
            .collect();
        Self {
            assets,
            sender,
            receiver,
        }
    }

    pub fn get(&self, asset: CardAsset) -> Option<&AssetInfo> {
        self.assets.iter().find(|a| a.asset == asset)
    }

    fn get_mut(&mut self, asset: CardAsset) -> Option<&mut AssetInfo> {
        self.assets.iter_mut().find(|a| a.asset == asset)
    }

    /// Texture id and pixel size for a loaded asset.
    pub fn texture(&self, asset: CardAsset) -> Option<(egui::TextureId, egui::Vec2)> {
        let info = self.get(asset)?;
        let handle = info.texture.as_ref()?;
        Some((handle.id(), egui::vec2(info.width as f32, info.height as f32)))
    }

    /// Spawn one background load per asset that is not loaded or loading yet.
    pub fn start_loading(&mut self, runtime: &tokio::runtime::Handle) {
        for info in &mut self.assets {
            if info.is_loaded() || info.is_loading() {
                continue;
            }
            info.status = TextureStatus::Loading;

            let asset = info.asset;
            let path = info.path.clone();
            let sender = self.sender.clone();

            runtime.spawn(async move {
                log::debug!("Loading {:?} from {}", asset, path.display());
                let result = match load_image(&path).await {
                    Ok((rgba_data, width, height)) => TextureLoadResult::Success {
                        asset,
                        rgba_data,
                        width,
                        height,
                    },
                    Err(e) => TextureLoadResult::Error {
                        asset,
                        error: e.to_string(),
                    },
                };
                // Receiver is gone only when the app is shutting down.
                let _ = sender.send(result);
            });
        }
    }

    /// Apply every finished load. Returns true if anything changed.
    pub fn poll(&mut self, ctx: &egui::Context) -> bool {
        let mut changed = false;
        while let Ok(result) = self.receiver.try_recv() {
            self.apply(ctx, result);
            changed = true;
        }
        changed
    }

    pub fn apply(&mut self, ctx: &egui::Context, result: TextureLoadResult) {
        match result {
            TextureLoadResult::Success {
                asset,
                rgba_data,
                width,
                height,
            } => {
                let Some(info) = self.get_mut(asset) else {
                    return;
                };
                let image = egui::ColorImage::from_rgba_unmultiplied(
                    [width as usize, height as usize],
                    &rgba_data,
                );
                info.texture = Some(ctx.load_texture(
                    asset.file_name(),
                    image,
                    egui::TextureOptions::LINEAR,
                ));
                info.width = width;
                info.height = height;
                info.status = TextureStatus::Loaded;
                log::info!("Loaded {} ({}x{})", asset.label(), width, height);
            }
            TextureLoadResult::Error { asset, error } => {
                let Some(info) = self.get_mut(asset) else {
                    return;
                };
                // A late failure must not clobber an image that already made it.
                if info.is_loaded() {
                    return;
                }
                log::warn!("{} will render blank: {}", asset.label(), error);
                info.status = TextureStatus::Error(error);
            }
        }
    }

    pub fn loading_count(&self) -> usize {
        self.assets.iter().filter(|a| a.is_loading()).count()
    }

    pub fn loaded_count(&self) -> usize {
        self.assets.iter().filter(|a| a.is_loaded()).count()
    }

    pub fn error_count(&self) -> usize {
        self.assets.iter().filter(|a| a.has_error()).count()
    }
}

/// `dir/file_name`, preferring a case-insensitive match if the directory has one.
pub fn resolve_path(dir: &Path, file_name: &str) -> PathBuf {
    let direct = dir.join(file_name);
    if direct.exists() {
        return direct;
    }

    let wanted = file_name.to_lowercase();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            if let Ok(name) = entry.file_name().into_string() {
                if name.to_lowercase() == wanted {
                    return entry.path();
                }
            }
        }
    }

    direct
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) {
        image::RgbaImage::from_pixel(width, height, image::Rgba([255, 0, 0, 255]))
            .save(dir.join(name))
            .unwrap();
    }

    #[test]
    fn resolve_path_matches_case_insensitively() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "CTULogo.PNG", 1, 1);
        let resolved = resolve_path(dir.path(), "ctulogo.png");
        assert_eq!(resolved.file_name().unwrap(), "CTULogo.PNG");

        let missing = resolve_path(dir.path(), "tuv.png");
        assert_eq!(missing, dir.path().join("tuv.png"));
    }

    #[test]
    fn starts_with_every_asset_unloaded() {
        let manager = AssetManager::new(Path::new("does-not-exist"));
        assert_eq!(manager.assets.len(), CardAsset::ALL.len());
        assert!(manager.assets.iter().all(|a| a.status == TextureStatus::NotLoaded));
        assert!(manager.texture(CardAsset::IdPhoto).is_none());
    }

    #[test]
    fn applied_success_exposes_a_texture() {
        let ctx = egui::Context::default();
        let mut manager = AssetManager::new(Path::new("unused"));
        manager.apply(
            &ctx,
            TextureLoadResult::Success {
                asset: CardAsset::IsoBadge,
                rgba_data: vec![255; 3 * 2 * 4],
                width: 3,
                height: 2,
            },
        );
        let (_, size) = manager.texture(CardAsset::IsoBadge).unwrap();
        assert_eq!(size, egui::vec2(3.0, 2.0));
        assert_eq!(manager.loaded_count(), 1);
    }

    #[test]
    fn late_error_does_not_clobber_a_loaded_asset() {
        let ctx = egui::Context::default();
        let mut manager = AssetManager::new(Path::new("unused"));
        manager.apply(
            &ctx,
            TextureLoadResult::Success {
                asset: CardAsset::Signature,
                rgba_data: vec![0; 4],
                width: 1,
                height: 1,
            },
        );
        manager.apply(
            &ctx,
            TextureLoadResult::Error {
                asset: CardAsset::Signature,
                error: "boom".to_string(),
            },
        );
        assert!(manager.get(CardAsset::Signature).unwrap().is_loaded());
    }

    #[tokio::test]
    async fn background_loads_report_success_and_failure() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "tuv.png", 8, 4);

        let mut manager = AssetManager::new(dir.path());
        manager.start_loading(&tokio::runtime::Handle::current());
        assert_eq!(manager.loading_count(), CardAsset::ALL.len());

        let ctx = egui::Context::default();
        for _ in 0..CardAsset::ALL.len() {
            let result = manager.receiver.recv().await.unwrap();
            manager.apply(&ctx, result);
        }

        assert_eq!(manager.loaded_count(), 1);
        assert_eq!(manager.error_count(), CardAsset::ALL.len() - 1);
        let badge = manager.get(CardAsset::IsoBadge).unwrap();
        assert_eq!((badge.width, badge.height), (8, 4));
        assert!(badge.status_text().starts_with("Loaded"));
    }
}
