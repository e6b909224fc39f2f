pub mod loader;
pub mod manager;

pub use manager::AssetManager;
