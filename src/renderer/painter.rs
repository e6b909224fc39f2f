// Paints a CardScene through the hover transform with egui shapes

use egui::epaint::{Mesh, TextShape, Vertex};
use egui::emath::TSTransform;
use egui::text::{LayoutJob, TextFormat};
use egui::{Color32, FontId, Painter, Pos2, Rect, Shape, Stroke, Vec2, pos2, vec2};
use nalgebra_glm as glm;

use crate::animation::{CardTransform, Projection};
use crate::card::geometry::{self, DiagonalGradient};
use crate::card::scene::{BoxNode, FontWeight, ImageNode, TextAlign, TextBlock};
use crate::card::{CardScene, NodeKind, style};
use crate::texture::AssetManager;

/// Draws the card into screen space.
///
/// Card-local points are offset to `card_rect` and then projected about the
/// card center. Flat shapes are projected per vertex. Text is laid out flat and
/// then scaled and moved so its center lands where the projection puts it.
pub struct CardPainter<'a> {
    painter: &'a Painter,
    projection: Projection,
    offset: Vec2,
    outline: Vec<Pos2>,
}

impl<'a> CardPainter<'a> {
    pub fn new(painter: &'a Painter, card_rect: Rect, transform: &CardTransform) -> Self {
        let center = card_rect.center();
        let local = Rect::from_min_size(Pos2::ZERO, card_rect.size());
        Self {
            painter,
            projection: Projection::new(transform, glm::vec2(center.x, center.y)),
            offset: card_rect.min.to_vec2(),
            outline: geometry::rounded_rect_outline(local, style::CARD_RADIUS, style::CORNER_SEGMENTS),
        }
    }

    /// Screen position of a card-local point.
    pub fn project(&self, local: Pos2) -> Pos2 {
        let p = self.projection.project(to_glm(local + self.offset));
        pos2(p.x, p.y)
    }

    fn scale_at(&self, local: Pos2) -> f32 {
        self.projection.local_scale(to_glm(local + self.offset))
    }

    pub fn paint(&self, scene: &CardScene, assets: &AssetManager) {
        self.paint_shadow();
        for node in &scene.nodes {
            match &node.kind {
                NodeKind::Body { rect, radius } => self.paint_body(*rect, *radius),
                NodeKind::Box(b) => self.paint_box(b),
                NodeKind::Image(image) => self.paint_image(image, assets),
                NodeKind::Text(text) => self.paint_text(text),
            }
        }
    }

    fn paint_shadow(&self) {
        let shifted: Vec<Pos2> = self
            .outline
            .iter()
            .map(|p| *p + vec2(0.0, style::SHADOW_OFFSET))
            .collect();
        let mesh = self.fan(&shifted, |_| style::SHADOW_COLOR);
        self.painter.add(Shape::mesh(mesh));
    }

    fn paint_body(&self, rect: Rect, radius: f32) {
        let outline = geometry::rounded_rect_outline(rect, radius, style::CORNER_SEGMENTS);
        let gradient = DiagonalGradient::new(rect, &style::GRADIENT);
        let mesh = self.fan(&outline, |p| gradient.color_at(p));
        self.painter.add(Shape::mesh(mesh));
    }

    fn paint_box(&self, node: &BoxNode) {
        let outline = geometry::rounded_rect_outline(node.rect, node.radius, style::CORNER_SEGMENTS);
        if let Some(fill) = node.fill {
            self.painter.add(Shape::mesh(self.fan(&outline, |_| fill)));
        }
        if let Some((width, color)) = node.stroke {
            let points = outline.iter().map(|p| self.project(*p)).collect();
            let width = width * self.scale_at(node.rect.center());
            self.painter.add(Shape::closed_line(points, Stroke::new(width, color)));
        }
    }

    fn paint_image(&self, node: &ImageNode, assets: &AssetManager) {
        // Missing images leave their slot blank.
        let Some((texture_id, size)) = assets.texture(node.asset) else {
            return;
        };
        let (drawn, uv) = geometry::fit_image(node.fit, node.rect, size);

        let polygon = if node.clip_to_card {
            geometry::clip_polygon_to_rect(&self.outline, drawn)
        } else {
            vec![drawn.left_top(), drawn.right_top(), drawn.right_bottom(), drawn.left_bottom()]
        };
        if polygon.len() < 3 {
            return;
        }

        let mut mesh = Mesh::with_texture(texture_id);
        self.push_fan(&mut mesh, &polygon, |p| {
            (geometry::uv_at(p, drawn, uv), Color32::WHITE)
        });
        self.painter.add(Shape::mesh(mesh));
    }

    fn paint_text(&self, block: &TextBlock) {
        let galley = self.painter.layout_job(layout_job(block, 0));
        let size = galley.size();
        let top_left = match block.align {
            TextAlign::Left => block.anchor,
            TextAlign::Center => block.anchor - vec2(0.5 * size.x, 0.0),
        };
        let local_center = top_left + 0.5 * size;

        let center = local_center + self.offset;
        let scale = self.scale_at(local_center);
        let translation = self.project(local_center).to_vec2() - scale * center.to_vec2();

        let transform = TSTransform::new(translation, scale);

        let mut shape = Shape::Text(TextShape::new(top_left + self.offset, galley, style::INK));
        shape.transform(transform);
        self.painter.add(shape);

        // Heavier spans are overdrawn with small horizontal shifts. The extra
        // layouts share text and fonts, so their glyphs line up with the first.
        for pass in 1..=block_passes(block) {
            let galley = self.painter.layout_job(layout_job(block, pass));
            let shift = vec2(pass as f32 * FAUX_BOLD_SHIFT, 0.0);
            let mut shape = Shape::Text(TextShape::new(top_left + self.offset + shift, galley, style::INK));
            shape.transform(transform);
            self.painter.add(shape);
        }
    }

    /// Untextured fan over a convex polygon.
    fn fan(&self, polygon: &[Pos2], color: impl Fn(Pos2) -> Color32) -> Mesh {
        let mut mesh = Mesh::default();
        self.push_fan(&mut mesh, polygon, |p| (egui::epaint::WHITE_UV, color(p)));
        mesh
    }

    /// Appends a triangle fan around the centroid so per-vertex colors
    /// interpolate evenly.
    fn push_fan(&self, mesh: &mut Mesh, polygon: &[Pos2], attrs: impl Fn(Pos2) -> (Pos2, Color32)) {
        if polygon.len() < 3 {
            return;
        }
        let centroid = centroid(polygon);
        let base = mesh.vertices.len() as u32;

        for p in std::iter::once(centroid).chain(polygon.iter().copied()) {
            let (uv, color) = attrs(p);
            mesh.vertices.push(Vertex {
                pos: self.project(p),
                uv,
                color,
            });
        }

        let n = polygon.len() as u32;
        for i in 0..n {
            mesh.add_triangle(base, base + 1 + i, base + 1 + (i + 1) % n);
        }
    }
}

fn to_glm(p: Pos2) -> glm::Vec2 {
    glm::vec2(p.x, p.y)
}

fn centroid(polygon: &[Pos2]) -> Pos2 {
    let sum = polygon.iter().fold(Vec2::ZERO, |acc, p| acc + p.to_vec2());
    (sum / polygon.len() as f32).to_pos2()
}

/// Horizontal shift between faux-bold overdraw passes, in card pixels.
pub const FAUX_BOLD_SHIFT: f32 = 0.5;

/// Extra overdraw passes for a weight. egui ships a single regular
/// proportional face, so weight is synthesized.
pub fn weight_passes(weight: FontWeight) -> usize {
    match weight {
        FontWeight::Regular => 0,
        FontWeight::Bold => 1,
        FontWeight::Black => 2,
    }
}

fn block_passes(block: &TextBlock) -> usize {
    block
        .spans
        .iter()
        .map(|span| weight_passes(span.style.weight))
        .max()
        .unwrap_or(0)
}

/// Layout for one overdraw pass. Pass 0 draws every span; pass `n` keeps
/// only spans heavy enough to need it and makes the rest transparent.
pub fn layout_job(block: &TextBlock, pass: usize) -> LayoutJob {
    let mut job = LayoutJob::default();
    for span in &block.spans {
        let color = if weight_passes(span.style.weight) >= pass {
            span.style.color
        } else {
            Color32::TRANSPARENT
        };
        job.append(
            &span.text,
            0.0,
            TextFormat {
                font_id: FontId::proportional(span.style.size),
                color,
                extra_letter_spacing: span.style.letter_spacing,
                line_height: span.style.line_height,
                ..Default::default()
            },
        );
    }
    if let Some(width) = block.wrap_width {
        job.wrap.max_width = width;
    }
    job
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::scene::Slot;
    use crate::card::style::{CARD_HEIGHT, CARD_WIDTH};
    use crate::model::Student;

    fn card_rect() -> Rect {
        Rect::from_min_size(pos2(65.0, 55.0), vec2(CARD_WIDTH, CARD_HEIGHT))
    }

    fn painter(ctx: &egui::Context) -> Painter {
        Painter::new(
            ctx.clone(),
            egui::LayerId::background(),
            Rect::from_min_size(Pos2::ZERO, vec2(480.0, 760.0)),
        )
    }

    #[test]
    fn rest_projection_only_offsets() {
        let ctx = egui::Context::default();
        let painter = painter(&ctx);
        let card = CardPainter::new(&painter, card_rect(), &CardTransform::rest());
        for local in [pos2(0.0, 0.0), pos2(350.0, 650.0), pos2(12.5, 300.0)] {
            let screen = card.project(local);
            let expected = local + card_rect().min.to_vec2();
            assert!((screen - expected).length() < 1e-3, "{screen:?} vs {expected:?}");
        }
    }

    #[test]
    fn engaged_projection_keeps_center_and_grows() {
        let ctx = egui::Context::default();
        let painter = painter(&ctx);
        let card = CardPainter::new(&painter, card_rect(), &CardTransform::at(1.0));
        let center = card.project(pos2(175.0, 325.0));
        assert!((center - card_rect().center()).length() < 1e-3);
        assert!(card.scale_at(pos2(175.0, 325.0)) > 1.0);
    }

    #[test]
    fn fan_is_a_valid_mesh() {
        let ctx = egui::Context::default();
        let painter = painter(&ctx);
        let card = CardPainter::new(&painter, card_rect(), &CardTransform::at(0.5));
        let mesh = card.fan(&card.outline, |_| Color32::RED);
        assert!(mesh.is_valid());
        assert_eq!(mesh.vertices.len(), card.outline.len() + 1);
        assert_eq!(mesh.indices.len(), 3 * card.outline.len());
    }

    #[test]
    fn layout_job_keeps_spans_and_wrap() {
        let scene = CardScene::build(&Student::sample());
        let Some(crate::card::scene::Node {
            kind: NodeKind::Text(block),
            ..
        }) = scene.node(Slot::CampusAddress)
        else {
            panic!("address is a text node");
        };
        let job = layout_job(block, 0);
        assert_eq!(job.sections.len(), 2);
        assert_eq!(job.text, block.text());
        assert_eq!(job.wrap.max_width, block.wrap_width.unwrap());
    }

    #[test]
    fn heavier_weights_get_overdraw_passes() {
        let scene = CardScene::build(&Student::sample());
        let passes = |slot| match scene.node(slot).map(|n| &n.kind) {
            Some(NodeKind::Text(block)) => block_passes(block),
            _ => panic!("{slot:?} is a text node"),
        };
        assert_eq!(passes(Slot::RepublicLine), 0);
        assert_eq!(passes(Slot::UniversityName), 1);
        assert_eq!(passes(Slot::StudentName), 2);
        assert_eq!(passes(Slot::IdLine), 1);
    }

    #[test]
    fn overdraw_pass_hides_lighter_spans() {
        let scene = CardScene::build(&Student::sample());
        let Some(NodeKind::Text(block)) = scene.node(Slot::IdLine).map(|n| &n.kind) else {
            panic!("id line is a text node");
        };

        let bold = layout_job(block, 1);
        // "ID No.: " is regular, the number is bold.
        assert_eq!(bold.sections[0].format.color, Color32::TRANSPARENT);
        assert_eq!(bold.sections[1].format.color, style::INK);
        assert_eq!(bold.text, layout_job(block, 0).text);

        let regular = layout_job(block, 0);
        assert!(regular.sections.iter().all(|s| s.format.color == style::INK));
    }

    #[test]
    fn paints_a_whole_card_without_images() {
        let ctx = egui::Context::default();
        let assets = AssetManager::new(std::path::Path::new("does-not-exist"));
        let scene = CardScene::build(&Student::sample());

        let output = ctx.run(egui::RawInput::default(), |ctx| {
            let painter = painter(ctx);
            CardPainter::new(&painter, card_rect(), &CardTransform::at(1.0)).paint(&scene, &assets);
        });

        // Shadow, body, every box, and each text node once per pass; images
        // are skipped.
        let images = scene
            .nodes
            .iter()
            .filter(|n| matches!(n.kind, NodeKind::Image(_)))
            .count();
        let strokes = scene
            .nodes
            .iter()
            .filter(|n| matches!(&n.kind, NodeKind::Box(b) if b.fill.is_some() && b.stroke.is_some()))
            .count();
        let overdraw: usize = scene
            .nodes
            .iter()
            .map(|n| match &n.kind {
                NodeKind::Text(block) => block_passes(block),
                _ => 0,
            })
            .sum();
        assert_eq!(
            output.shapes.len(),
            1 + scene.nodes.len() - images + strokes + overdraw
        );
    }
}
