// Animation module: spring physics, value mapping and the hover state machine

pub mod hover;
pub mod interpolation;
pub mod spring;
pub mod transform;

pub use hover::{HoverAnimation, HoverTrigger};
pub use transform::{CardTransform, Projection};
