//! Color Constants for the Query Chat Theme
//!
//! Neutral grays for the conversation, red for failed turns, and a few
//! accent colors for the action row hover states.

use eframe::egui::Color32;

/// Main conversation background
pub const MAIN_BG: Color32 = Color32::from_rgb(0x11, 0x18, 0x27);

/// Top bar background
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x1F, 0x29, 0x37);

/// User bubble fill
pub const BUBBLE_USER: Color32 = Color32::from_rgb(0x37, 0x41, 0x51);

/// Assistant bubble fill
pub const BUBBLE_ASSISTANT: Color32 = Color32::from_rgb(0x1F, 0x29, 0x37);

/// Assistant bubble border
pub const BUBBLE_BORDER: Color32 = Color32::from_rgb(0x37, 0x41, 0x51);

/// Failed turn fill
pub const BUBBLE_ERROR: Color32 = Color32::from_rgb(0x45, 0x1A, 0x1A);

/// Failed turn border
pub const BUBBLE_ERROR_BORDER: Color32 = Color32::from_rgb(0x99, 0x1B, 0x1B);

/// Failed turn text
pub const ERROR_TEXT: Color32 = Color32::from_rgb(0xFC, 0xA5, 0xA5);

/// Body text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::WHITE;

/// Secondary text (captions, button labels)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x9C, 0xA3, 0xAF);

/// Timestamp text color
pub const TIMESTAMP: Color32 = Color32::from_rgb(0x9C, 0xA3, 0xAF);

/// Panel header strip (query and results captions)
pub const PANEL_HEADER_BG: Color32 = Color32::from_rgb(0x37, 0x41, 0x51);

/// Panel body
pub const PANEL_BG: Color32 = Color32::from_rgb(0x1F, 0x29, 0x37);

/// SQL text
pub const SQL_TEXT: Color32 = Color32::from_rgb(0x4A, 0xDE, 0x80);

/// Table cell text
pub const CELL_TEXT: Color32 = Color32::from_rgb(0xD1, 0xD5, 0xDB);

/// Action button fill
pub const BUTTON_BG: Color32 = Color32::from_rgb(0x1F, 0x29, 0x37);

/// Action button border
pub const BUTTON_BORDER: Color32 = Color32::from_rgb(0x4B, 0x55, 0x63);

/// Pressed like button fill
pub const LIKE_ACTIVE_BG: Color32 = Color32::from_rgb(0x37, 0x41, 0x51);

/// Pressed like button border
pub const LIKE_ACTIVE_BORDER: Color32 = Color32::from_rgb(0x6B, 0x72, 0x80);

/// Pressed dislike button fill
pub const DISLIKE_ACTIVE_BG: Color32 = Color32::from_rgb(0x45, 0x1A, 0x1A);

/// Pressed dislike button border
pub const DISLIKE_ACTIVE_BORDER: Color32 = Color32::from_rgb(0xB9, 0x1C, 0x1C);

/// Dislike accent
pub const DISLIKE_ACCENT: Color32 = Color32::from_rgb(0xDC, 0x26, 0x26);

/// Banner for host-side failures (export, load)
pub const BANNER_BG: Color32 = Color32::from_rgb(0x45, 0x1A, 0x1A);
