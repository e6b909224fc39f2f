// Damped spring integrator

/// Frame deltas longer than this are clamped (window drag, breakpoint, etc.).
pub const MAX_FRAME_DT: f32 = 1.0 / 15.0;
/// Upper bound on a single RK4 substep.
pub const MAX_SUBSTEP: f32 = 1.0 / 240.0;

/// Physical constants of a spring plus its rest thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    pub rest_speed_threshold: f32,
    pub rest_displacement_threshold: f32,
}

impl SpringSpec {
    /// Spring used for the card tilt.
    pub const CARD_HOVER: SpringSpec = SpringSpec {
        stiffness: 180.0,
        damping: 18.0,
        mass: 0.8,
        rest_speed_threshold: 0.001,
        rest_displacement_threshold: 0.001,
    };

    /// 1.0 = critically damped, < 1.0 = under-damped (overshoots).
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Undamped angular frequency in rad/s.
    pub fn natural_frequency(&self) -> f32 {
        (self.stiffness / self.mass).sqrt()
    }

    fn acceleration(&self, displacement: f32, velocity: f32) -> f32 {
        (-self.stiffness * displacement - self.damping * velocity) / self.mass
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::CARD_HOVER
    }
}

/// A scalar pulled toward `target` by a damped spring.
///
/// Retargeting keeps position and velocity, so the value is continuous across
/// any sequence of targets.
#[derive(Debug, Clone)]
pub struct Spring {
    spec: SpringSpec,
    value: f32,
    velocity: f32,
    target: f32,
    at_rest: bool,
}

impl Spring {
    pub fn new(spec: SpringSpec, value: f32) -> Self {
        Self {
            spec,
            value,
            velocity: 0.0,
            target: value,
            at_rest: true,
        }
    }

    pub fn spec(&self) -> &SpringSpec {
        &self.spec
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_at_rest(&self) -> bool {
        self.at_rest
    }

    /// Aim at a new target from wherever the spring currently is.
    pub fn retarget(&mut self, target: f32) {
        self.target = target;
        self.at_rest = self.within_rest_thresholds();
    }

    /// Advance by `dt` seconds. Returns true while the spring is still moving.
    pub fn step(&mut self, dt: f32) -> bool {
        if self.at_rest {
            return false;
        }

        let dt = if dt.is_finite() { dt.clamp(0.0, MAX_FRAME_DT) } else { 0.0 };
        if dt > 0.0 {
            let substeps = (dt / MAX_SUBSTEP).ceil().max(1.0);
            let h = dt / substeps;
            for _ in 0..substeps as u32 {
                self.rk4(h);
            }
        }

        if self.within_rest_thresholds() {
            self.value = self.target;
            self.velocity = 0.0;
            self.at_rest = true;
        }

        !self.at_rest
    }

    fn within_rest_thresholds(&self) -> bool {
        (self.value - self.target).abs() <= self.spec.rest_displacement_threshold
            && self.velocity.abs() <= self.spec.rest_speed_threshold
    }

    fn rk4(&mut self, h: f32) {
        let spec = self.spec;
        let x = self.value - self.target;
        let v = self.velocity;

        let k1x = v;
        let k1v = spec.acceleration(x, v);

        let k2x = v + 0.5 * h * k1v;
        let k2v = spec.acceleration(x + 0.5 * h * k1x, v + 0.5 * h * k1v);

        let k3x = v + 0.5 * h * k2v;
        let k3v = spec.acceleration(x + 0.5 * h * k2x, v + 0.5 * h * k2v);

        let k4x = v + h * k3v;
        let k4v = spec.acceleration(x + h * k3x, v + h * k3v);

        self.value += h / 6.0 * (k1x + 2.0 * k2x + 2.0 * k3x + k4x);
        self.velocity += h / 6.0 * (k1v + 2.0 * k2v + 2.0 * k3v + k4v);
    }
}
