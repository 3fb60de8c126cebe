//! Color palette.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const CARD_BG: Color = Color::Rgb(18, 21, 28); // Panel/card backgrounds

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan; // Title and active tab
pub const CONTRAST_FG: Color = Color::Black; // Text drawn on accent backgrounds

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green; // Positive change
pub const STATUS_RED: Color = Color::Red; // Negative change, errors
pub const STATUS_YELLOW: Color = Color::Yellow; // Key hints, spinner

// --- Chart ---
pub const CHART_LINE: Color = Color::Cyan;
pub const CHART_AXIS: Color = Color::DarkGray;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_differs_from_text() {
        assert_ne!(ACCENT, TEXT_PRIMARY);
        assert_ne!(STATUS_GREEN, STATUS_RED);
    }

    #[test]
    fn test_card_background_is_rgb() {
        match CARD_BG {
            Color::Rgb(_, _, _) => {}
            _ => panic!("CARD_BG should be RGB"),
        }
    }
}
