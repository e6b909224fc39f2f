// Card display list, laid out in card-local logical pixels

use egui::{Color32, Pos2, Rect, Vec2, pos2, vec2};

use super::asset::CardAsset;
use super::geometry::Fit;
use super::style::{self, footer, header, info, photo, signature};
use crate::model::Student;

/// Role of a node on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Body,
    CtuLogo,
    AseanLogo,
    RepublicLine,
    UniversityName,
    CampusAddress,
    PhotoFrame,
    Photo,
    Signature,
    StudentName,
    CourseCode,
    CourseRule,
    CourseLabel,
    IdLine,
    Building,
    BadgeFrame,
    Badge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Regular,
    Bold,
    Black,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub weight: FontWeight,
    pub color: Color32,
    pub letter_spacing: f32,
    pub line_height: Option<f32>,
}

impl TextStyle {
    pub fn new(size: f32) -> Self {
        Self {
            size,
            weight: FontWeight::Regular,
            color: style::INK,
            letter_spacing: 0.0,
            line_height: None,
        }
    }

    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn color(mut self, color: Color32) -> Self {
        self.color = color;
        self
    }

    pub fn letter_spacing(mut self, spacing: f32) -> Self {
        self.letter_spacing = spacing;
        self
    }

    pub fn line_height(mut self, line_height: f32) -> Self {
        self.line_height = Some(line_height);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextSpan {
    pub text: String,
    pub style: TextStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    /// `anchor` is the top-left corner.
    Left,
    /// `anchor` is the top-center point.
    Center,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub spans: Vec<TextSpan>,
    pub anchor: Pos2,
    pub align: TextAlign,
    pub wrap_width: Option<f32>,
}

impl TextBlock {
    fn single(text: impl Into<String>, style: TextStyle, anchor: Pos2, align: TextAlign) -> Self {
        Self {
            spans: vec![TextSpan {
                text: text.into(),
                style,
            }],
            anchor,
            align,
            wrap_width: None,
        }
    }

    /// All spans joined, as the reader sees them.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoxNode {
    pub rect: Rect,
    pub radius: f32,
    pub fill: Option<Color32>,
    pub stroke: Option<(f32, Color32)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageNode {
    pub asset: CardAsset,
    pub rect: Rect,
    pub fit: Fit,
    /// Clip against the rounded card outline instead of drawing past it.
    pub clip_to_card: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Rounded card body filled with the diagonal gradient.
    Body { rect: Rect, radius: f32 },
    Box(BoxNode),
    Image(ImageNode),
    Text(TextBlock),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub slot: Slot,
    pub kind: NodeKind,
}

/// Everything drawn on the card, back to front.
#[derive(Debug, Clone, PartialEq)]
pub struct CardScene {
    pub size: Vec2,
    pub nodes: Vec<Node>,
}

impl CardScene {
    pub fn build(student: &Student) -> Self {
        let size = vec2(style::CARD_WIDTH, style::CARD_HEIGHT);
        let card = Rect::from_min_size(Pos2::ZERO, size);
        let content = card.shrink(style::CARD_PADDING);
        let center_x = content.center().x;
        let mut nodes = Vec::new();
        let mut push = |slot: Slot, kind: NodeKind| nodes.push(Node { slot, kind });

        push(
            Slot::Body,
            NodeKind::Body {
                rect: card,
                radius: style::CARD_RADIUS,
            },
        );

        // Header: stacked logos on the left, institution text on the right.
        let logo_x = content.left() + header::LOGO_MARGIN_LEFT;
        let logo_size = Vec2::splat(header::LOGO_SIZE);
        let first_logo = Rect::from_min_size(pos2(logo_x, content.top()), logo_size);
        let second_logo = first_logo.translate(vec2(
            0.0,
            header::LOGO_SIZE + header::LOGO_MARGIN_BOTTOM + header::LOGO_GAP,
        ));
        push(Slot::CtuLogo, image(CardAsset::CtuLogo, first_logo, Fit::Contain));
        push(Slot::AseanLogo, image(CardAsset::AseanLogo, second_logo, Fit::Contain));

        let text_x = first_logo.right() + header::TEXT_PADDING_LEFT;
        let text_width = content.right() - header::MARGIN_RIGHT - text_x;
        let mut y = content.top();

        push(
            Slot::RepublicLine,
            NodeKind::Text(TextBlock::single(
                "Republic of the Philippines",
                TextStyle::new(header::REPUBLIC_SIZE).line_height(header::REPUBLIC_LINE),
                pos2(text_x, y),
                TextAlign::Left,
            )),
        );
        y += header::REPUBLIC_LINE;

        push(
            Slot::UniversityName,
            NodeKind::Text(TextBlock::single(
                "CEBU TECHNOLOGICAL UNIVERSITY",
                TextStyle::new(header::UNIVERSITY_SIZE)
                    .weight(FontWeight::Bold)
                    .letter_spacing(header::UNIVERSITY_LETTER_SPACING)
                    .line_height(header::UNIVERSITY_LINE),
                pos2(text_x, y),
                TextAlign::Left,
            )),
        );
        y += header::UNIVERSITY_LINE + header::ADDRESS_MARGIN_TOP;

        push(
            Slot::CampusAddress,
            NodeKind::Text(TextBlock {
                spans: vec![
                    TextSpan {
                        text: "Main Campus: ".to_string(),
                        style: TextStyle::new(header::ADDRESS_BOLD_SIZE).weight(FontWeight::Bold),
                    },
                    TextSpan {
                        text: "M.J. Cuenco Avenue corner R. Palma St. Cebu City,".to_string(),
                        style: TextStyle::new(header::ADDRESS_SIZE),
                    },
                ],
                anchor: pos2(text_x, y),
                align: TextAlign::Left,
                wrap_width: Some(text_width),
            }),
        );

        let logo_column = 2.0 * (header::LOGO_SIZE + header::LOGO_MARGIN_BOTTOM) + header::LOGO_GAP;
        let mut y = content.top() + logo_column + header::MARGIN_BOTTOM;

        // Framed photo.
        y += photo::MARGIN_TOP;
        let frame = Rect::from_min_size(
            pos2(
                center_x - 0.5 * photo::WIDTH - photo::BORDER,
                y,
            ),
            vec2(photo::WIDTH + 2.0 * photo::BORDER, photo::HEIGHT + 2.0 * photo::BORDER),
        );
        push(Slot::Photo, image(CardAsset::IdPhoto, frame.shrink(photo::BORDER), Fit::Cover));
        push(
            Slot::PhotoFrame,
            NodeKind::Box(BoxNode {
                rect: frame.shrink(0.5 * photo::BORDER),
                radius: 0.0,
                fill: None,
                stroke: Some((photo::BORDER, style::INK)),
            }),
        );
        y = frame.bottom();

        // Signature.
        y += signature::MARGIN_TOP;
        let signature_rect = Rect::from_min_size(
            pos2(center_x - 0.5 * signature::WIDTH, y),
            vec2(signature::WIDTH, signature::HEIGHT),
        );
        push(Slot::Signature, image(CardAsset::Signature, signature_rect, Fit::Contain));
        y = signature_rect.bottom();

        // Name, course, rule and label, centered.
        y += info::MARGIN_TOP;
        push(
            Slot::StudentName,
            NodeKind::Text(TextBlock::single(
                student.display_name(),
                TextStyle::new(info::NAME_SIZE)
                    .weight(FontWeight::Black)
                    .letter_spacing(info::NAME_LETTER_SPACING)
                    .line_height(info::NAME_LINE),
                pos2(center_x, y),
                TextAlign::Center,
            )),
        );
        y += info::NAME_LINE;

        push(
            Slot::CourseCode,
            NodeKind::Text(TextBlock::single(
                student.course.clone(),
                TextStyle::new(info::COURSE_SIZE)
                    .weight(FontWeight::Bold)
                    .line_height(info::COURSE_LINE),
                pos2(center_x, y),
                TextAlign::Center,
            )),
        );
        y += info::COURSE_LINE + info::RULE_MARGIN;

        let rule_width = info::RULE_WIDTH * content.width();
        let rule = Rect::from_min_size(
            pos2(center_x - 0.5 * rule_width, y),
            vec2(rule_width, info::RULE_HEIGHT),
        );
        push(
            Slot::CourseRule,
            NodeKind::Box(BoxNode {
                rect: rule,
                radius: 0.0,
                fill: Some(style::INK),
                stroke: None,
            }),
        );
        y = rule.bottom() + info::RULE_MARGIN;

        push(
            Slot::CourseLabel,
            NodeKind::Text(TextBlock::single(
                "COURSE",
                TextStyle::new(info::LABEL_SIZE)
                    .color(style::LABEL_INK)
                    .line_height(info::LABEL_LINE),
                pos2(center_x, y),
                TextAlign::Center,
            )),
        );
        y += info::LABEL_LINE;

        // Identifier line.
        y += info::ID_MARGIN_TOP;
        push(
            Slot::IdLine,
            NodeKind::Text(TextBlock {
                spans: vec![
                    TextSpan {
                        text: "ID No.: ".to_string(),
                        style: TextStyle::new(info::ID_SIZE).line_height(info::ID_LINE),
                    },
                    TextSpan {
                        text: student.id_number.clone(),
                        style: TextStyle::new(info::ID_SIZE)
                            .weight(FontWeight::Bold)
                            .line_height(info::ID_LINE),
                    },
                ],
                anchor: pos2(content.left() + info::ID_MARGIN_LEFT, y),
                align: TextAlign::Left,
                wrap_width: None,
            }),
        );

        // Footer: building bleeding past the card edge, badge on top of it.
        let building = Rect::from_min_size(
            pos2(
                content.left() + footer::BUILDING_LEFT,
                content.bottom() - footer::BUILDING_BOTTOM - footer::BUILDING_HEIGHT,
            ),
            vec2(footer::BUILDING_WIDTH, footer::BUILDING_HEIGHT),
        );
        push(
            Slot::Building,
            NodeKind::Image(ImageNode {
                asset: CardAsset::Building,
                rect: building,
                fit: Fit::Cover,
                clip_to_card: true,
            }),
        );

        let badge_frame = Rect::from_min_max(
            pos2(
                content.right()
                    - footer::BADGE_MARGIN
                    - footer::BADGE_WIDTH
                    - 2.0 * footer::BADGE_BORDER,
                content.bottom()
                    - footer::BADGE_MARGIN
                    - footer::BADGE_HEIGHT
                    - 2.0 * footer::BADGE_BORDER,
            ),
            pos2(
                content.right() - footer::BADGE_MARGIN,
                content.bottom() - footer::BADGE_MARGIN,
            ),
        );
        push(
            Slot::BadgeFrame,
            NodeKind::Box(BoxNode {
                rect: badge_frame,
                radius: footer::BADGE_RADIUS,
                fill: Some(Color32::WHITE),
                stroke: Some((footer::BADGE_BORDER, footer::BADGE_BORDER_COLOR)),
            }),
        );
        push(
            Slot::Badge,
            image(CardAsset::IsoBadge, badge_frame.shrink(footer::BADGE_BORDER), Fit::Contain),
        );

        Self { size, nodes }
    }

    /// Card outline rect in local coordinates.
    pub fn bounds(&self) -> Rect {
        Rect::from_min_size(Pos2::ZERO, self.size)
    }

    pub fn node(&self, slot: Slot) -> Option<&Node> {
        self.nodes.iter().find(|n| n.slot == slot)
    }

    /// Text shown in `slot`, if it is a text node.
    pub fn text(&self, slot: Slot) -> Option<String> {
        match &self.node(slot)?.kind {
            NodeKind::Text(block) => Some(block.text()),
            _ => None,
        }
    }

    pub fn assets(&self) -> impl Iterator<Item = CardAsset> + '_ {
        self.nodes.iter().filter_map(|n| match &n.kind {
            NodeKind::Image(image) => Some(image.asset),
            _ => None,
        })
    }
}

fn image(asset: CardAsset, rect: Rect, fit: Fit) -> NodeKind {
    NodeKind::Image(ImageNode {
        asset,
        rect,
        fit,
        clip_to_card: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect_of(scene: &CardScene, slot: Slot) -> Rect {
        match &scene.node(slot).expect("slot").kind {
            NodeKind::Body { rect, .. } => *rect,
            NodeKind::Box(b) => b.rect,
            NodeKind::Image(i) => i.rect,
            NodeKind::Text(t) => Rect::from_min_size(t.anchor, Vec2::ZERO),
        }
    }

    #[test]
    fn renders_the_sample_student() {
        let scene = CardScene::build(&Student::sample());
        assert_eq!(scene.text(Slot::StudentName).as_deref(), Some("JOHN MARK P. MAGDASAL"));
        assert_eq!(scene.text(Slot::CourseCode).as_deref(), Some("BSIT"));
        let id_line = scene.text(Slot::IdLine).unwrap();
        assert!(id_line.contains("1351124"), "{id_line}");
        assert_eq!(id_line, "ID No.: 1351124");
    }

    #[test]
    fn fixed_text_is_present() {
        let scene = CardScene::build(&Student::sample());
        assert_eq!(
            scene.text(Slot::UniversityName).as_deref(),
            Some("CEBU TECHNOLOGICAL UNIVERSITY")
        );
        assert_eq!(
            scene.text(Slot::RepublicLine).as_deref(),
            Some("Republic of the Philippines")
        );
        assert_eq!(scene.text(Slot::CourseLabel).as_deref(), Some("COURSE"));
        assert!(scene.text(Slot::CampusAddress).unwrap().starts_with("Main Campus: "));
        assert_eq!(scene.text(Slot::Photo), None);
    }

    #[test]
    fn empty_record_renders_blank_labels() {
        let scene = CardScene::build(&Student::default());
        assert_eq!(scene.text(Slot::StudentName).as_deref(), Some(""));
        assert_eq!(scene.text(Slot::CourseCode).as_deref(), Some(""));
        assert_eq!(scene.text(Slot::IdLine).as_deref(), Some("ID No.: "));
        assert_eq!(scene.nodes.len(), CardScene::build(&Student::sample()).nodes.len());
    }

    #[test]
    fn body_is_painted_first() {
        let scene = CardScene::build(&Student::sample());
        assert_eq!(scene.nodes[0].slot, Slot::Body);
        assert_eq!(scene.bounds().size(), vec2(350.0, 650.0));
    }

    #[test]
    fn every_asset_is_used_once() {
        let scene = CardScene::build(&Student::sample());
        let mut assets: Vec<_> = scene.assets().collect();
        assets.sort();
        let mut all = CardAsset::ALL.to_vec();
        all.sort();
        assert_eq!(assets, all);
    }

    #[test]
    fn sections_stack_top_to_bottom() {
        let scene = CardScene::build(&Student::sample());
        let order = [
            Slot::CtuLogo,
            Slot::PhotoFrame,
            Slot::Signature,
            Slot::StudentName,
            Slot::CourseCode,
            Slot::CourseRule,
            Slot::CourseLabel,
            Slot::IdLine,
        ];
        for pair in order.windows(2) {
            let (a, b) = (rect_of(&scene, pair[0]), rect_of(&scene, pair[1]));
            assert!(a.top() < b.top(), "{:?} should be above {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn photo_is_centered_inside_its_frame() {
        let scene = CardScene::build(&Student::sample());
        let photo = rect_of(&scene, Slot::Photo);
        let frame = rect_of(&scene, Slot::PhotoFrame);
        assert_eq!(photo.size(), vec2(190.0, 210.0));
        assert!((photo.center().x - 175.0).abs() < 1e-4);
        assert!(frame.expand(1.0).contains_rect(photo));
    }

    #[test]
    fn building_bleeds_past_the_card_and_is_clipped() {
        let scene = CardScene::build(&Student::sample());
        let bounds = scene.bounds();
        match &scene.node(Slot::Building).unwrap().kind {
            NodeKind::Image(image) => {
                assert!(image.clip_to_card);
                assert!(image.rect.bottom() > bounds.bottom());
                assert_eq!(image.rect.left(), bounds.left());
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn badge_sits_inside_the_content_box() {
        let scene = CardScene::build(&Student::sample());
        let content = scene.bounds().shrink(style::CARD_PADDING);
        let badge = rect_of(&scene, Slot::BadgeFrame);
        assert!(content.contains_rect(badge));
        assert_eq!(badge.size(), vec2(122.0, 62.0));
        assert_eq!(rect_of(&scene, Slot::Badge).size(), vec2(120.0, 60.0));
    }
}
