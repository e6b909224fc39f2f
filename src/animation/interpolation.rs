// Piecewise-linear value mapping

/// Maps an input range onto an output range with linear segments.
///
/// Inputs outside the first/last breakpoint extend the end segments, so a
/// spring overshoot carries through to the mapped channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interpolation<const N: usize> {
    input: [f32; N],
    output: [f32; N],
}

impl<const N: usize> Interpolation<N> {
    /// `input` must be non-decreasing.
    pub const fn new(input: [f32; N], output: [f32; N]) -> Self {
        assert!(N >= 2, "interpolation needs at least two breakpoints");
        Self { input, output }
    }

    pub fn map(&self, x: f32) -> f32 {
        let mut i = 1;
        while i < N - 1 && x > self.input[i] {
            i += 1;
        }

        let (x0, x1) = (self.input[i - 1], self.input[i]);
        let (y0, y1) = (self.output[i - 1], self.output[i]);

        if x1 == x0 {
            return if x <= x0 { y0 } else { y1 };
        }

        lerp(y0, y1, (x - x0) / (x1 - x0))
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
