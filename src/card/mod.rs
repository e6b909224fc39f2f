pub mod asset;
pub mod geometry;
pub mod scene;
pub mod style;

pub use asset::CardAsset;
pub use scene::{CardScene, NodeKind, Slot};
