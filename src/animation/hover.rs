// Hover/press state machine driving the card tilt

use super::spring::{Spring, SpringSpec};
use super::transform::CardTransform;

/// Pointer events the card reacts to. Each one is an edge, not a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverTrigger {
    PointerEnter,
    PointerLeave,
    PressStart,
    PressEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverPhase {
    Rest,
    Engaged,
}

impl HoverTrigger {
    pub fn phase(self) -> HoverPhase {
        match self {
            HoverTrigger::PointerEnter | HoverTrigger::PressStart => HoverPhase::Engaged,
            HoverTrigger::PointerLeave | HoverTrigger::PressEnd => HoverPhase::Rest,
        }
    }
}

impl HoverPhase {
    pub fn target(self) -> f32 {
        match self {
            HoverPhase::Rest => 0.0,
            HoverPhase::Engaged => 1.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HoverPhase::Rest => "rest",
            HoverPhase::Engaged => "engaged",
        }
    }
}

/// The card's single animated value and the phase it is heading for.
#[derive(Debug, Clone)]
pub struct HoverAnimation {
    spring: Spring,
    phase: HoverPhase,
}

impl HoverAnimation {
    pub fn new() -> Self {
        Self {
            spring: Spring::new(SpringSpec::CARD_HOVER, HoverPhase::Rest.target()),
            phase: HoverPhase::Rest,
        }
    }

    /// Re-aim the spring. The current value is left untouched.
    pub fn trigger(&mut self, trigger: HoverTrigger) {
        let phase = trigger.phase();
        if phase != self.phase {
            log::debug!(
                "{:?}: {} -> {} at {:.3}",
                trigger,
                self.phase.label(),
                phase.label(),
                self.spring.value()
            );
        }
        self.phase = phase;
        self.spring.retarget(phase.target());
    }

    /// Advance one frame. Returns true while the value is still moving.
    pub fn step(&mut self, dt: f32) -> bool {
        self.spring.step(dt)
    }

    pub fn phase(&self) -> HoverPhase {
        self.phase
    }

    pub fn spec(&self) -> &SpringSpec {
        self.spring.spec()
    }

    pub fn value(&self) -> f32 {
        self.spring.value()
    }

    pub fn velocity(&self) -> f32 {
        self.spring.velocity()
    }

    pub fn target(&self) -> f32 {
        self.spring.target()
    }

    pub fn is_settled(&self) -> bool {
        self.spring.is_at_rest()
    }

    pub fn transform(&self) -> CardTransform {
        CardTransform::at(self.value())
    }
}

impl Default for HoverAnimation {
    fn default() -> Self {
        Self::new()
    }
}
