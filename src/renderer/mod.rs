pub mod painter;
pub mod render;
pub mod renderer;

pub use painter::CardPainter;
pub use renderer::Renderer;
