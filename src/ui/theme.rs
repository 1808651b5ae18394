use ratatui::style::Color;

use crate::person::GenderCategory;

pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const FIELD_FOCUS: Color = Color::Rgb(0x4a, 0x90, 0xe2);
pub const HINT_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);

pub const BADGE_MALE: Color = Color::Rgb(0x18, 0x90, 0xff);
pub const BADGE_FEMALE: Color = Color::Rgb(0xeb, 0x2f, 0x96);
pub const BADGE_OTHER: Color = Color::Rgb(0x52, 0xc4, 0x1a);

/// Badge color for a gender value, via classification.
pub fn gender_color(gender: &str) -> Color {
    match GenderCategory::classify(gender) {
        GenderCategory::Male => BADGE_MALE,
        GenderCategory::Female => BADGE_FEMALE,
        GenderCategory::Other => BADGE_OTHER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_gender_string_gets_a_color() {
        assert_eq!(gender_color("MALE"), BADGE_MALE);
        assert_eq!(gender_color("Female"), BADGE_FEMALE);
        assert_eq!(gender_color(""), BADGE_OTHER);
        assert_eq!(gender_color("nonbinary"), BADGE_OTHER);
    }
}
