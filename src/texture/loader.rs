use std::path::Path;

use crate::card::CardAsset;
use crate::error::CardError;

/// Outcome of a background image load, sent back to the UI thread.
#[derive(Debug)]
pub enum TextureLoadResult {
    Success {
        asset: CardAsset,
        rgba_data: Vec<u8>,
        width: u32,
        height: u32,
    },
    Error {
        asset: CardAsset,
        error: String,
    },
}

/// Load image bytes from a local file
pub async fn load_from_file(path: &Path) -> Result<Vec<u8>, CardError> {
    let data = tokio::fs::read(path).await?;
    Ok(data)
}

/// Decode any format the image crate knows into tightly packed RGBA8
pub fn decode_image(data: &[u8]) -> Result<(Vec<u8>, u32, u32), CardError> {
    let img = image::load_from_memory(data)?;

    let rgba_img = img.to_rgba8();
    let (width, height) = rgba_img.dimensions();

    Ok((rgba_img.into_raw(), width, height))
}

/// Read and decode one image file
pub async fn load_image(path: &Path) -> Result<(Vec<u8>, u32, u32), CardError> {
    let data = load_from_file(path).await.map_err(|e| {
        CardError::new("asset-read")
            .with_arg("path", path.display())
            .push_card(e)
    })?;
    decode_image(&data).map_err(|e| {
        CardError::new("asset-decode")
            .with_arg("path", path.display())
            .push_card(e)
    })
}
