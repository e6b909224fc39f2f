// Flat card geometry: outlines, clipping, image fitting and gradients

use egui::{Color32, Pos2, Rect, Vec2, pos2, vec2};

/// How an image fills its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fit {
    /// Whole image visible, letterboxed, aspect kept.
    Contain,
    /// Slot fully covered, image cropped, aspect kept.
    Cover,
}

/// Returns the rect the image occupies and the UV range sampled from it.
pub fn fit_image(fit: Fit, slot: Rect, image_size: Vec2) -> (Rect, Rect) {
    let full_uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
    if image_size.x <= 0.0 || image_size.y <= 0.0 || slot.width() <= 0.0 || slot.height() <= 0.0
    {
        return (slot, full_uv);
    }

    let sx = slot.width() / image_size.x;
    let sy = slot.height() / image_size.y;

    match fit {
        Fit::Contain => {
            let scale = sx.min(sy);
            (Rect::from_center_size(slot.center(), image_size * scale), full_uv)
        }
        Fit::Cover => {
            let scale = sx.max(sy);
            let visible = slot.size() / (image_size * scale);
            let min = pos2((1.0 - visible.x) * 0.5, (1.0 - visible.y) * 0.5);
            (slot, Rect::from_min_size(min, visible))
        }
    }
}

/// UV for a point inside `drawn`, mapped into `uv`.
pub fn uv_at(point: Pos2, drawn: Rect, uv: Rect) -> Pos2 {
    let t = (point - drawn.min) / drawn.size();
    pos2(uv.min.x + t.x * uv.width(), uv.min.y + t.y * uv.height())
}

/// Convex outline of a rounded rectangle, clockwise on screen, starting at the
/// top edge.
pub fn rounded_rect_outline(rect: Rect, radius: f32, segments: usize) -> Vec<Pos2> {
    let radius = radius.clamp(0.0, 0.5 * rect.width().min(rect.height()));
    if radius <= 0.0 || segments == 0 {
        return vec![rect.left_top(), rect.right_top(), rect.right_bottom(), rect.left_bottom()];
    }

    use std::f32::consts::{FRAC_PI_2, PI};
    // Corner centers with the start angle of each quarter arc (y-down, clockwise).
    let corners = [
        (pos2(rect.right() - radius, rect.top() + radius), -FRAC_PI_2),
        (pos2(rect.right() - radius, rect.bottom() - radius), 0.0),
        (pos2(rect.left() + radius, rect.bottom() - radius), FRAC_PI_2),
        (pos2(rect.left() + radius, rect.top() + radius), PI),
    ];

    let mut points = Vec::with_capacity(4 * (segments + 1));
    for (center, start) in corners {
        for i in 0..=segments {
            let angle = start + FRAC_PI_2 * i as f32 / segments as f32;
            points.push(center + radius * vec2(angle.cos(), angle.sin()));
        }
    }
    points
}

/// Sutherland-Hodgman clip of a convex polygon against an axis-aligned rect.
pub fn clip_polygon_to_rect(polygon: &[Pos2], rect: Rect) -> Vec<Pos2> {
    let mut points = polygon.to_vec();
    points = clip_edge(&points, |p| p.x >= rect.left(), |a, b| at_x(a, b, rect.left()));
    points = clip_edge(&points, |p| p.x <= rect.right(), |a, b| at_x(a, b, rect.right()));
    points = clip_edge(&points, |p| p.y >= rect.top(), |a, b| at_y(a, b, rect.top()));
    points = clip_edge(&points, |p| p.y <= rect.bottom(), |a, b| at_y(a, b, rect.bottom()));
    points
}

fn clip_edge(
    points: &[Pos2],
    inside: impl Fn(Pos2) -> bool,
    intersect: impl Fn(Pos2, Pos2) -> Pos2,
) -> Vec<Pos2> {
    let mut out = Vec::with_capacity(points.len() + 4);
    let Some(&last) = points.last() else {
        return out;
    };

    let mut prev = last;
    for &current in points {
        match (inside(prev), inside(current)) {
            (true, true) => out.push(current),
            (true, false) => out.push(intersect(prev, current)),
            (false, true) => {
                out.push(intersect(prev, current));
                out.push(current);
            }
            (false, false) => {}
        }
        prev = current;
    }
    out
}

fn at_x(a: Pos2, b: Pos2, x: f32) -> Pos2 {
    let t = (x - a.x) / (b.x - a.x);
    pos2(x, a.y + t * (b.y - a.y))
}

fn at_y(a: Pos2, b: Pos2, y: f32) -> Pos2 {
    let t = (y - a.y) / (b.y - a.y);
    pos2(a.x + t * (b.x - a.x), y)
}

/// Linear gradient along the diagonal of a rect.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagonalGradient {
    pub rect: Rect,
    pub stops: Vec<(f32, Color32)>,
}

impl DiagonalGradient {
    pub fn new(rect: Rect, stops: &[(f32, Color32)]) -> Self {
        Self {
            rect,
            stops: stops.to_vec(),
        }
    }

    /// Position along the gradient, 0 at the top-left corner, 1 at the bottom-right.
    pub fn offset_of(&self, point: Pos2) -> f32 {
        let d = self.rect.max - self.rect.min;
        let len2 = d.length_sq();
        if len2 <= 0.0 {
            return 0.0;
        }
        ((point - self.rect.min).dot(d) / len2).clamp(0.0, 1.0)
    }

    pub fn color_at(&self, point: Pos2) -> Color32 {
        let t = self.offset_of(point);
        let Some(&(_, first)) = self.stops.first() else {
            return Color32::TRANSPARENT;
        };

        let mut prev = self.stops[0];
        if t <= prev.0 {
            return first;
        }
        for &stop in &self.stops[1..] {
            if t <= stop.0 {
                let span = stop.0 - prev.0;
                let f = if span > 0.0 { (t - prev.0) / span } else { 1.0 };
                return lerp_color(prev.1, stop.1, f);
            }
            prev = stop;
        }
        prev.1
    }
}

fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgba_premultiplied(mix(a.r(), b.r()), mix(a.g(), b.g()), mix(a.b(), b.b()), mix(a.a(), b.a()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card_rect() -> Rect {
        Rect::from_min_size(pos2(0.0, 0.0), vec2(350.0, 650.0))
    }

    #[test]
    fn contain_letterboxes_and_keeps_aspect() {
        let slot = Rect::from_min_size(pos2(10.0, 10.0), vec2(120.0, 60.0));
        let (drawn, uv) = fit_image(Fit::Contain, slot, vec2(400.0, 400.0));
        assert_eq!(drawn.size(), vec2(60.0, 60.0));
        assert_eq!(drawn.center(), slot.center());
        assert_eq!(uv, Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)));
    }

    #[test]
    fn cover_fills_slot_and_crops() {
        let slot = Rect::from_min_size(pos2(0.0, 0.0), vec2(190.0, 210.0));
        let (drawn, uv) = fit_image(Fit::Cover, slot, vec2(400.0, 300.0));
        assert_eq!(drawn, slot);
        // Image is wider than the slot: full height, cropped width.
        assert!((uv.height() - 1.0).abs() < 1e-6);
        assert!(uv.width() < 1.0);
        assert!((uv.center().x - 0.5).abs() < 1e-6);

        let aspect = (uv.width() * 400.0) / (uv.height() * 300.0);
        assert!((aspect - 190.0 / 210.0).abs() < 1e-4);
    }

    #[test]
    fn degenerate_image_uses_whole_slot() {
        let slot = Rect::from_min_size(pos2(0.0, 0.0), vec2(50.0, 50.0));
        let (drawn, _) = fit_image(Fit::Cover, slot, Vec2::ZERO);
        assert_eq!(drawn, slot);
    }

    #[test]
    fn uv_at_maps_corners() {
        let drawn = Rect::from_min_size(pos2(10.0, 20.0), vec2(100.0, 50.0));
        let uv = Rect::from_min_max(pos2(0.25, 0.0), pos2(0.75, 1.0));
        assert_eq!(uv_at(drawn.min, drawn, uv), uv.min);
        assert_eq!(uv_at(drawn.max, drawn, uv), uv.max);
    }

    #[test]
    fn outline_stays_inside_rect() {
        let rect = card_rect();
        let outline = rounded_rect_outline(rect, 25.0, 8);
        assert_eq!(outline.len(), 36);
        for p in &outline {
            assert!(rect.expand(1e-3).contains(*p), "{p:?}");
        }
        // Corners are cut off.
        assert!(!outline.contains(&rect.left_top()));
    }

    #[test]
    fn zero_radius_outline_is_the_rect() {
        let rect = card_rect();
        assert_eq!(rounded_rect_outline(rect, 0.0, 8).len(), 4);
    }

    #[test]
    fn clipping_stays_inside_both_shapes() {
        let card = card_rect();
        let outline = rounded_rect_outline(card, 25.0, 8);
        let building = Rect::from_min_size(pos2(0.0, 560.0), vec2(350.0, 100.0));
        let clipped = clip_polygon_to_rect(&outline, building);

        assert!(clipped.len() >= 3);
        for p in &clipped {
            assert!(building.expand(1e-3).contains(*p), "{p:?}");
            assert!(card.expand(1e-3).contains(*p), "{p:?}");
            assert!(p.y <= 650.0 + 1e-3);
        }
        // The bottom-left corner of the card is rounded away.
        assert!(!clipped.iter().any(|p| (*p - pos2(0.0, 650.0)).length() < 1.0));
    }

    #[test]
    fn clipping_disjoint_rect_is_empty() {
        let outline = rounded_rect_outline(card_rect(), 25.0, 8);
        let far = Rect::from_min_size(pos2(1000.0, 1000.0), vec2(10.0, 10.0));
        assert!(clip_polygon_to_rect(&outline, far).is_empty());
    }

    #[test]
    fn gradient_hits_stops() {
        let gradient = DiagonalGradient::new(card_rect(), &crate::card::style::GRADIENT);
        assert_eq!(gradient.color_at(pos2(0.0, 0.0)), Color32::from_rgb(0xff, 0xff, 0xff));
        assert_eq!(gradient.color_at(card_rect().center()), Color32::from_rgb(0xff, 0xed, 0x4f));
        assert_eq!(gradient.color_at(pos2(350.0, 650.0)), Color32::from_rgb(0x61, 0xd8, 0x65));
    }
}
