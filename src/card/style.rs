// Fixed card styling, in logical pixels.

use egui::Color32;

pub const CARD_WIDTH: f32 = 350.0;
pub const CARD_HEIGHT: f32 = 650.0;
pub const CARD_RADIUS: f32 = 25.0;
pub const CARD_PADDING: f32 = 15.0;

/// Segments used to approximate each rounded corner.
pub const CORNER_SEGMENTS: usize = 8;

/// Diagonal body gradient, top-left to bottom-right.
pub const GRADIENT: [(f32, Color32); 3] = [
    (0.0, Color32::from_rgb(0xff, 0xff, 0xff)),
    (0.5, Color32::from_rgb(0xff, 0xed, 0x4f)),
    (1.0, Color32::from_rgb(0x61, 0xd8, 0x65)),
];

pub const SHADOW_OFFSET: f32 = 8.0;
pub const SHADOW_COLOR: Color32 = Color32::from_black_alpha(110);

pub const INK: Color32 = Color32::BLACK;
pub const LABEL_INK: Color32 = Color32::from_rgb(0x33, 0x33, 0x33);

pub mod header {
    pub const MARGIN_BOTTOM: f32 = 5.0;
    pub const MARGIN_RIGHT: f32 = 10.0;
    pub const LOGO_MARGIN_LEFT: f32 = 10.0;
    pub const LOGO_SIZE: f32 = 45.0;
    pub const LOGO_MARGIN_BOTTOM: f32 = 5.0;
    pub const LOGO_GAP: f32 = 10.0;
    pub const TEXT_PADDING_LEFT: f32 = 10.0;
    pub const REPUBLIC_SIZE: f32 = 13.0;
    pub const REPUBLIC_LINE: f32 = 16.0;
    pub const UNIVERSITY_SIZE: f32 = 13.0;
    pub const UNIVERSITY_LINE: f32 = 22.0;
    pub const UNIVERSITY_LETTER_SPACING: f32 = 0.5;
    pub const ADDRESS_SIZE: f32 = 11.0;
    pub const ADDRESS_BOLD_SIZE: f32 = 13.0;
    pub const ADDRESS_MARGIN_TOP: f32 = 2.0;
}

pub mod photo {
    pub const MARGIN_TOP: f32 = 5.0;
    pub const BORDER: f32 = 1.5;
    pub const WIDTH: f32 = 190.0;
    pub const HEIGHT: f32 = 210.0;
}

pub mod signature {
    pub const MARGIN_TOP: f32 = 5.0;
    pub const WIDTH: f32 = 160.0;
    pub const HEIGHT: f32 = 50.0;
}

pub mod info {
    pub const MARGIN_TOP: f32 = 5.0;
    pub const NAME_SIZE: f32 = 16.0;
    pub const NAME_LINE: f32 = 19.0;
    pub const NAME_LETTER_SPACING: f32 = 0.2;
    pub const COURSE_SIZE: f32 = 16.0;
    pub const COURSE_LINE: f32 = 19.0;
    pub const RULE_HEIGHT: f32 = 2.5;
    /// Fraction of the content width.
    pub const RULE_WIDTH: f32 = 0.6;
    pub const RULE_MARGIN: f32 = 4.0;
    pub const LABEL_SIZE: f32 = 11.0;
    pub const LABEL_LINE: f32 = 14.0;
    pub const ID_SIZE: f32 = 14.0;
    pub const ID_LINE: f32 = 17.0;
    pub const ID_MARGIN_TOP: f32 = 5.0;
    pub const ID_MARGIN_LEFT: f32 = 100.0;
}

pub mod footer {
    use egui::Color32;

    /// Building overlay offsets relative to the content box; it bleeds past the card.
    pub const BUILDING_LEFT: f32 = -15.0;
    pub const BUILDING_BOTTOM: f32 = -25.0;
    pub const BUILDING_WIDTH: f32 = 350.0;
    pub const BUILDING_HEIGHT: f32 = 100.0;
    pub const BADGE_WIDTH: f32 = 120.0;
    pub const BADGE_HEIGHT: f32 = 60.0;
    pub const BADGE_MARGIN: f32 = 5.0;
    pub const BADGE_BORDER: f32 = 1.0;
    pub const BADGE_RADIUS: f32 = 3.0;
    pub const BADGE_BORDER_COLOR: Color32 = Color32::from_rgb(0x99, 0x99, 0x99);
}
