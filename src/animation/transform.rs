// Card transform: perspective, rotate-X, rotate-Y, scale

use nalgebra_glm as glm;

use super::interpolation::Interpolation;

/// Distance from the viewer to the card plane, in logical pixels.
pub const PERSPECTIVE: f32 = 900.0;

pub const ROTATE_X_DEG: Interpolation<2> = Interpolation::new([0.0, 1.0], [0.0, -6.0]);
pub const ROTATE_Y_DEG: Interpolation<2> = Interpolation::new([0.0, 1.0], [0.0, 6.0]);
pub const SCALE: Interpolation<2> = Interpolation::new([0.0, 1.0], [1.0, 1.03]);

/// Transform channels derived from the hover value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    pub perspective: f32,
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
    pub scale: f32,
}

impl CardTransform {
    /// Channels for a hover value; pure in `progress`.
    pub fn at(progress: f32) -> Self {
        Self {
            perspective: PERSPECTIVE,
            rotate_x_deg: ROTATE_X_DEG.map(progress),
            rotate_y_deg: ROTATE_Y_DEG.map(progress),
            scale: SCALE.map(progress),
        }
    }

    pub fn rest() -> Self {
        Self::at(0.0)
    }

    /// `perspective * rotate_x * rotate_y * scale`, applied to column vectors,
    /// so scale acts first. Coordinates are y-down with z toward the viewer.
    pub fn matrix(&self) -> glm::Mat4 {
        let mut perspective = glm::Mat4::identity();
        perspective[(3, 2)] = -1.0 / self.perspective;

        let rotate_x = glm::rotation(self.rotate_x_deg.to_radians(), &glm::vec3(1.0, 0.0, 0.0));
        let rotate_y = glm::rotation(self.rotate_y_deg.to_radians(), &glm::vec3(0.0, 1.0, 0.0));
        let scale = glm::scaling(&glm::vec3(self.scale, self.scale, 1.0));

        perspective * rotate_x * rotate_y * scale
    }
}

impl Default for CardTransform {
    fn default() -> Self {
        Self::rest()
    }
}

/// Projects points of the flat card through a [`CardTransform`] about `origin`.
#[derive(Debug, Clone)]
pub struct Projection {
    matrix: glm::Mat4,
    origin: glm::Vec2,
}

impl Projection {
    pub fn new(transform: &CardTransform, origin: glm::Vec2) -> Self {
        Self {
            matrix: transform.matrix(),
            origin,
        }
    }

    pub fn project(&self, point: glm::Vec2) -> glm::Vec2 {
        let local = point - self.origin;
        let clip = self.matrix * glm::vec4(local.x, local.y, 0.0, 1.0);
        // Never hit for a few degrees of tilt, but keeps the divide finite.
        let w = clip.w.max(1e-3);
        self.origin + glm::vec2(clip.x / w, clip.y / w)
    }

    /// Mean stretch of unit steps along x and y around `point`.
    pub fn local_scale(&self, point: glm::Vec2) -> f32 {
        let p = self.project(point);
        let dx = glm::length(&(self.project(point + glm::vec2(1.0, 0.0)) - p));
        let dy = glm::length(&(self.project(point + glm::vec2(0.0, 1.0)) - p));
        0.5 * (dx + dy)
    }
}
