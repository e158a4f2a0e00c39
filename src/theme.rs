//! Centralized theme constants for the kanban board
//! All colors, sizes, and styling should reference these constants

use crate::types::TaskStatus;
use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x09, 0x09, 0x0b); // zinc-950
pub const BG_ELEVATED: Color32 = Color32::from_rgb(0x18, 0x18, 0x1b); // zinc-900
pub const BG_INPUT: Color32 = Color32::from_rgb(0x14, 0x14, 0x18); // input field background
pub const BG_SURFACE: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800
pub const BG_COLUMN: Color32 = Color32::from_rgb(0x11, 0x11, 0x14);
pub const BG_CARD: Color32 = Color32::from_rgb(0x1c, 0x1c, 0x20);

// =============================================================================
// COLORS - Accent (Blue)
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0x3b, 0x82, 0xf6); // blue-500
pub const ACCENT_DARK: Color32 = Color32::from_rgb(0x1e, 0x3a, 0x8a); // blue-900

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xe4, 0xe4, 0xe7); // zinc-200
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0xa1, 0xa1, 0xaa); // zinc-400
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x71, 0x71, 0x7a); // zinc-500

// =============================================================================
// COLORS - Borders
// =============================================================================
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800
pub const BORDER_DEFAULT: Color32 = Color32::from_rgb(0x3f, 0x3f, 0x46); // zinc-700

// =============================================================================
// COLORS - Status
// =============================================================================
pub const STATUS_ERROR: Color32 = Color32::from_rgb(0xf8, 0x71, 0x71); // red-400

// =============================================================================
// COLORS - Buttons
// =============================================================================
pub const BTN_DEFAULT: Color32 = Color32::from_rgb(0x3f, 0x3f, 0x46); // zinc-700
pub const BTN_ACCENT: Color32 = Color32::from_rgb(0x25, 0x63, 0xeb); // blue-600
pub const BTN_SAVE: Color32 = Color32::from_rgb(0x16, 0xa3, 0x4a); // green-600

// =============================================================================
// COLORS - Columns
// =============================================================================
pub fn status_colors(status: TaskStatus) -> (Color32, Color32) {
    // Returns (badge bg ~6% alpha, text_color)
    match status {
        TaskStatus::Todo => (
            Color32::from_rgba_unmultiplied(0xa1, 0xa1, 0xaa, 16),
            Color32::from_rgb(0xa1, 0xa1, 0xaa),
        ),
        TaskStatus::InProgress => (
            Color32::from_rgba_unmultiplied(0xfb, 0xbf, 0x24, 16),
            Color32::from_rgb(0xfb, 0xbf, 0x24),
        ),
        TaskStatus::Done => (
            Color32::from_rgba_unmultiplied(0x34, 0xd3, 0x99, 16),
            Color32::from_rgb(0x34, 0xd3, 0x99),
        ),
    }
}

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_TITLE: f32 = 22.0;
pub const FONT_HEADING: f32 = 16.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_SMALL: f32 = 12.0;

// =============================================================================
// DIMENSIONS
// =============================================================================
pub const HEADER_HEIGHT: f32 = 64.0;
pub const LOGO_SIZE: f32 = 28.0;
pub const MODAL_WIDTH: f32 = 380.0;
pub const COLUMN_MIN_HEIGHT: f32 = 300.0;

// =============================================================================
// CORNER RADIUS
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_MEDIUM: f32 = 6.0;
pub const RADIUS_LARGE: f32 = 8.0;

// =============================================================================
// STROKE WIDTHS
// =============================================================================
pub const STROKE_DEFAULT: f32 = 1.0;
pub const STROKE_MEDIUM: f32 = 1.5;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;
pub const SPACING_XXL: f32 = 24.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    let widget = |bg_fill: Color32, weak_bg_fill: Color32, bg_stroke: egui::Stroke, fg: Color32| {
        egui::style::WidgetVisuals {
            bg_fill,
            weak_bg_fill,
            bg_stroke,
            fg_stroke: egui::Stroke::new(STROKE_DEFAULT, fg),
            corner_radius: RADIUS_DEFAULT.into(),
            expansion: 0.0,
        }
    };

    ctx.set_visuals(egui::Visuals {
        dark_mode: true,
        panel_fill: BG_BASE,
        window_fill: BG_ELEVATED,
        extreme_bg_color: BG_INPUT,
        faint_bg_color: BG_ELEVATED,
        hyperlink_color: ACCENT,
        selection: egui::style::Selection {
            bg_fill: ACCENT_DARK,
            stroke: egui::Stroke::new(STROKE_DEFAULT, ACCENT),
        },
        widgets: egui::style::Widgets {
            noninteractive: widget(
                BG_ELEVATED,
                BG_SURFACE,
                egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
                TEXT_PRIMARY,
            ),
            inactive: widget(
                Color32::TRANSPARENT,
                BG_ELEVATED,
                egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
                TEXT_SECONDARY,
            ),
            hovered: egui::style::WidgetVisuals {
                fg_stroke: egui::Stroke::new(STROKE_MEDIUM, TEXT_PRIMARY),
                ..widget(
                    BG_SURFACE,
                    Color32::from_rgb(0x30, 0x30, 0x35),
                    egui::Stroke::new(STROKE_DEFAULT, ACCENT),
                    TEXT_PRIMARY,
                )
            },
            active: egui::style::WidgetVisuals {
                expansion: -1.0,
                ..widget(
                    Color32::from_rgb(0x2e, 0x2e, 0x33),
                    Color32::from_rgb(0x2e, 0x2e, 0x33),
                    egui::Stroke::new(STROKE_DEFAULT, ACCENT),
                    TEXT_PRIMARY,
                )
            },
            open: widget(
                BG_SURFACE,
                BG_ELEVATED,
                egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
                TEXT_PRIMARY,
            ),
        },
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        window_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
        window_corner_radius: egui::CornerRadius::same(8),
        menu_corner_radius: egui::CornerRadius::same(6),
        ..egui::Visuals::dark()
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.spacing.scroll.bar_width = 6.0;
        style.spacing.scroll.floating = false;
    });
}

// =============================================================================
// HELPER - Frames
// =============================================================================

/// Drop zone frame for one status column
pub fn column_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_COLUMN)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::same(SPACING_LG as i8))
}

pub fn card_frame(dimmed: bool) -> egui::Frame {
    let fill = if dimmed { BG_ELEVATED } else { BG_CARD };
    egui::Frame::new()
        .fill(fill)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_DEFAULT))
        .corner_radius(RADIUS_MEDIUM)
        .inner_margin(egui::Margin::same(SPACING_LG as i8))
}

pub fn modal_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(Color32::from_rgb(0x12, 0x12, 0x14))
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(SPACING_XL)
}

pub fn input_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_INPUT)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
        .corner_radius(RADIUS_DEFAULT)
        .inner_margin(egui::Margin::symmetric(8, 6))
}

// =============================================================================
// HELPER - Button styles
// =============================================================================

/// Default gray button
pub fn button(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(text.into())
        .fill(BTN_DEFAULT)
        .corner_radius(RADIUS_DEFAULT)
}

/// Blue button for the header's primary action
pub fn button_accent(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(TEXT_PRIMARY))
        .fill(BTN_ACCENT)
        .corner_radius(RADIUS_DEFAULT)
}

/// Green confirm button
pub fn button_save(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(TEXT_PRIMARY))
        .fill(BTN_SAVE)
        .corner_radius(RADIUS_DEFAULT)
}
