//! UI Theme - style registry and design constants
//!
//! One place for every visual decision: the closed set of style tags the
//! renderers accept, the color and weight each tag maps to, status icons,
//! and layout constants. Rendering functions take a [`Theme`] explicitly;
//! there is no global styled-printer state.

use crossterm::style::{Color, Stylize};

use crate::width::display_width;

/// Semantic style applied to a piece of text at emission time.
///
/// A closed enumeration so the tag -> escape mapping stays exhaustive; a
/// renderer can never be handed an unknown "color object".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleTag {
    /// Primary chrome: borders, headers (bold cyan).
    Primary,
    /// Secondary chrome: bars, links (blue).
    Secondary,
    /// Success states (bold green).
    Success,
    /// Warning states (yellow).
    Warning,
    /// Error states (bold red).
    Error,
    /// De-emphasized detail text (dark grey).
    Muted,
    /// First accent (magenta).
    Accent1,
    /// Second accent (cyan).
    Accent2,
    /// Third accent (white).
    Accent3,
}

/// A semantic pair of plain content and its style tag.
///
/// The content is never mutated; styling wraps it with escape sequences
/// only when [`StyledText::render`] is called, so width math always sees
/// the plain form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledText {
    /// Plain, escape-free content.
    pub content: String,
    /// Style applied at emission time.
    pub tag: StyleTag,
}

impl StyledText {
    /// Pair `content` with a style tag.
    pub fn new(content: impl Into<String>, tag: StyleTag) -> Self {
        Self {
            content: content.into(),
            tag,
        }
    }

    /// Display columns of the plain content.
    pub fn width(&self) -> usize {
        display_width(&self.content)
    }

    /// Emit the content wrapped in the theme's escape sequences.
    pub fn render(&self, theme: &Theme) -> String {
        theme.paint(self.tag, &self.content)
    }
}

/// Visual configuration for the whole presentation layer.
#[derive(Debug, Clone, Default)]
pub struct Theme {
    /// Colors for each style tag.
    pub colors: ColorScheme,
    /// Status icons.
    pub icons: Icons,
    /// Layout constants.
    pub layout: Layout,
}

impl Theme {
    /// Terminal color for a style tag.
    pub fn color(&self, tag: StyleTag) -> Color {
        match tag {
            StyleTag::Primary => self.colors.primary,
            StyleTag::Secondary => self.colors.secondary,
            StyleTag::Success => self.colors.success,
            StyleTag::Warning => self.colors.warning,
            StyleTag::Error => self.colors.error,
            StyleTag::Muted => self.colors.muted,
            StyleTag::Accent1 => self.colors.accent1,
            StyleTag::Accent2 => self.colors.accent2,
            StyleTag::Accent3 => self.colors.accent3,
        }
    }

    /// Whether a style tag renders bold.
    pub fn is_bold(&self, tag: StyleTag) -> bool {
        matches!(tag, StyleTag::Primary | StyleTag::Success | StyleTag::Error)
    }

    /// Wrap `text` in the escape sequences for `tag`.
    ///
    /// The content itself is untouched; only SGR codes are added around it.
    pub fn paint(&self, tag: StyleTag, text: &str) -> String {
        let styled = text.with(self.color(tag));
        if self.is_bold(tag) {
            styled.bold().to_string()
        } else {
            styled.to_string()
        }
    }
}

/// Color assignment for each style tag.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    /// Primary chrome.
    pub primary: Color,
    /// Secondary chrome.
    pub secondary: Color,
    /// Success states.
    pub success: Color,
    /// Warning states.
    pub warning: Color,
    /// Error states.
    pub error: Color,
    /// De-emphasized text.
    pub muted: Color,
    /// First accent.
    pub accent1: Color,
    /// Second accent.
    pub accent2: Color,
    /// Third accent.
    pub accent3: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            secondary: Color::Blue,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            muted: Color::DarkGrey,
            accent1: Color::Magenta,
            accent2: Color::Cyan,
            accent3: Color::White,
        }
    }
}

/// Status icons for different states.
#[derive(Debug, Clone)]
pub struct Icons {
    /// Pending/queued state (○)
    pub pending: &'static str,
    /// Active/in-progress state (●)
    pub active: &'static str,
    /// Success/completed state (✓)
    pub success: &'static str,
    /// Error/failed state (✗)
    pub error: &'static str,
    /// Warning state (⚠)
    pub warning: &'static str,
    /// Info/tip state (ℹ)
    pub info: &'static str,
    /// Menu cursor (▶)
    pub cursor: &'static str,
    /// List bullet (•)
    pub bullet: &'static str,
}

impl Default for Icons {
    fn default() -> Self {
        Self {
            pending: "○",
            active: "●",
            success: "✓",
            error: "✗",
            warning: "⚠",
            info: "ℹ",
            cursor: "▶",
            bullet: "•",
        }
    }
}

/// Layout constants.
///
/// One width-derivation rule everywhere: boxes take an explicit width
/// (defaulting to `box_width`), and a table's total width always comes
/// from the sum of its declared column widths plus separator overhead.
#[derive(Debug, Clone)]
pub struct Layout {
    /// Default width for header/info boxes.
    pub box_width: usize,
    /// Total width of the interactive menu frame.
    pub menu_width: usize,
    /// Label column width in the two-column menu variant.
    pub menu_label_width: usize,
    /// Width of separator rules.
    pub separator_width: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            box_width: 60,
            menu_width: 40,
            menu_label_width: 16,
            separator_width: 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::width::strip_escapes;

    #[test]
    fn test_theme_defaults() {
        let theme = Theme::default();
        assert_eq!(theme.icons.success, "✓");
        assert_eq!(theme.icons.error, "✗");
        assert_eq!(theme.layout.box_width, 60);
    }

    #[test]
    fn test_paint_wraps_without_mutating() {
        let theme = Theme::default();
        let out = theme.paint(StyleTag::Success, "switched");
        assert!(out.contains('\x1b'));
        assert_eq!(strip_escapes(&out), "switched");
    }

    #[test]
    fn test_bold_tags() {
        let theme = Theme::default();
        assert!(theme.is_bold(StyleTag::Primary));
        assert!(theme.is_bold(StyleTag::Error));
        assert!(!theme.is_bold(StyleTag::Muted));
    }

    #[test]
    fn test_styled_text_width_ignores_styling() {
        let text = StyledText::new("claude-4", StyleTag::Accent1);
        assert_eq!(text.width(), 8);
        let rendered = text.render(&Theme::default());
        assert_eq!(display_width(&rendered), 8);
    }

    #[test]
    fn test_color_lookup_is_exhaustive() {
        let theme = Theme::default();
        assert_eq!(theme.color(StyleTag::Muted), Color::DarkGrey);
        assert_eq!(theme.color(StyleTag::Accent3), Color::White);
    }
}
