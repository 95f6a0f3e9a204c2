//! Bordered boxes and status one-liners
//!
//! Rounded-corner boxes with display-width-centered titles, plus the small
//! `✓ message` status lines commands print around them. Every border line
//! is exactly as wide as requested; centering floors the left padding and
//! pushes any odd remainder to the right.

use std::io::Write;

use crate::buffer::OutputBuffer;
use crate::error::UiError;
use crate::theme::{StyleTag, Theme};
use crate::width::{display_width, pad_or_truncate};

/// Smallest box that can hold borders, padding, and the title markers.
pub const MIN_BOX_WIDTH: usize = 10;

const TOP_LEFT: &str = "╭";
const TOP_RIGHT: &str = "╮";
const BOTTOM_LEFT: &str = "╰";
const BOTTOM_RIGHT: &str = "╯";
const HORIZONTAL: &str = "─";
const VERTICAL: &str = "│";

/// Draw a bordered box with a centered title, optional centered subtitle,
/// and pass-through content lines.
///
/// `width` is the total width of every emitted line, borders included.
/// Content lines are padded to the interior but never wrapped or
/// truncated; wrapping is the caller's responsibility. A `width` below
/// [`MIN_BOX_WIDTH`], or a title/subtitle wider than the interior, is a
/// caller contract violation and fails fast.
pub fn render_box<W: Write>(
    buf: &mut OutputBuffer<W>,
    theme: &Theme,
    title: &str,
    subtitle: Option<&str>,
    content: &[&str],
    width: usize,
) -> Result<(), UiError> {
    if width < MIN_BOX_WIDTH {
        return Err(UiError::BadWidth(width));
    }
    let interior = width - 2;
    // "▪▪ title ▪▪" is what actually occupies columns on the title line
    let title_cols = display_width(title) + 6;
    if title_cols > interior {
        return Err(UiError::BadWidth(width));
    }

    let rule = HORIZONTAL.repeat(interior);
    buf.write_line(&theme.paint(StyleTag::Primary, &format!("{TOP_LEFT}{rule}{TOP_RIGHT}")))?;

    let left = (interior - title_cols) / 2;
    let right = interior - title_cols - left;
    let marks = theme.paint(StyleTag::Accent3, "▪▪");
    let line = format!(
        "{border}{pad_l}{marks} {title} {marks}{pad_r}{border}",
        border = theme.paint(StyleTag::Primary, VERTICAL),
        pad_l = " ".repeat(left),
        title = theme.paint(StyleTag::Primary, title),
        pad_r = " ".repeat(right),
    );
    buf.write_line(&line)?;

    if let Some(subtitle) = subtitle {
        let sub_cols = display_width(subtitle);
        if sub_cols > interior {
            return Err(UiError::BadWidth(width));
        }
        let left = (interior - sub_cols) / 2;
        let right = interior - sub_cols - left;
        let line = format!(
            "{border}{pad_l}{subtitle}{pad_r}{border}",
            border = theme.paint(StyleTag::Primary, VERTICAL),
            pad_l = " ".repeat(left),
            subtitle = theme.paint(StyleTag::Muted, subtitle),
            pad_r = " ".repeat(right),
        );
        buf.write_line(&line)?;
    }

    for row in content {
        let cols = display_width(row);
        let border = theme.paint(StyleTag::Primary, VERTICAL);
        if cols + 2 > interior {
            // Too wide: passed through unmodified, borders appended
            buf.write_line(&format!("{border} {row} {border}"))?;
        } else {
            let padded = pad_or_truncate(row, interior - 2);
            buf.write_line(&format!("{border} {padded} {border}"))?;
        }
    }

    buf.write_line(&theme.paint(
        StyleTag::Primary,
        &format!("{BOTTOM_LEFT}{rule}{BOTTOM_RIGHT}"),
    ))?;
    buf.flush()?;
    Ok(())
}

/// Print a status line: colored icon and status, muted detail.
pub fn status_line<W: Write>(
    buf: &mut OutputBuffer<W>,
    theme: &Theme,
    tag: StyleTag,
    icon: &str,
    status: &str,
    detail: Option<&str>,
) -> Result<(), UiError> {
    let mut line = format!("{} {}", theme.paint(tag, icon), theme.paint(tag, status));
    if let Some(detail) = detail {
        line.push(' ');
        line.push_str(&theme.paint(StyleTag::Muted, detail));
    }
    buf.write_line(&line)?;
    buf.flush()?;
    Ok(())
}

/// Print a `✓ message` success line.
pub fn success<W: Write>(
    buf: &mut OutputBuffer<W>,
    theme: &Theme,
    message: &str,
) -> Result<(), UiError> {
    status_line(buf, theme, StyleTag::Success, theme.icons.success, message, None)
}

/// Print a `✗ message` error line.
pub fn error<W: Write>(
    buf: &mut OutputBuffer<W>,
    theme: &Theme,
    message: &str,
) -> Result<(), UiError> {
    status_line(buf, theme, StyleTag::Error, theme.icons.error, message, None)
}

/// Print a `⚠ message` warning line.
pub fn warning<W: Write>(
    buf: &mut OutputBuffer<W>,
    theme: &Theme,
    message: &str,
) -> Result<(), UiError> {
    status_line(buf, theme, StyleTag::Warning, theme.icons.warning, message, None)
}

/// Print an `ℹ message` info line.
pub fn info<W: Write>(
    buf: &mut OutputBuffer<W>,
    theme: &Theme,
    message: &str,
) -> Result<(), UiError> {
    status_line(buf, theme, StyleTag::Secondary, theme.icons.info, message, None)
}

/// Print a muted horizontal rule.
pub fn separator<W: Write>(
    buf: &mut OutputBuffer<W>,
    theme: &Theme,
    width: usize,
) -> Result<(), UiError> {
    if width == 0 {
        return Err(UiError::BadWidth(width));
    }
    buf.write_line(&theme.paint(StyleTag::Muted, &HORIZONTAL.repeat(width)))?;
    buf.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::width::strip_escapes;

    fn rendered_lines(buf: OutputBuffer<Vec<u8>>) -> Vec<String> {
        let out = String::from_utf8(buf.into_inner()).unwrap();
        out.lines().map(strip_escapes).collect()
    }

    #[test]
    fn test_box_lines_are_exact_width() {
        let mut buf = OutputBuffer::new(Vec::new());
        render_box(
            &mut buf,
            &Theme::default(),
            "Model Matrix",
            Some("profiles"),
            &["claude: active", "glm: standby"],
            40,
        )
        .unwrap();
        let lines = rendered_lines(buf);
        assert_eq!(lines.len(), 6);
        for line in &lines {
            assert_eq!(display_width(line), 40, "line {line:?}");
        }
    }

    #[test]
    fn test_box_centering_remainder_goes_right() {
        let mut buf = OutputBuffer::new(Vec::new());
        // interior 18, title occupies 2+6: left pad 5, right pad 5
        // odd remainder case: title "abc" occupies 9, left 4, right 5
        render_box(&mut buf, &Theme::default(), "abc", None, &[], 20).unwrap();
        let lines = rendered_lines(buf);
        let title = &lines[1];
        assert_eq!(display_width(title), 20);
        let inner = title.trim_start_matches('│').trim_end_matches('│');
        let left = inner.len() - inner.trim_start().len();
        let right = inner.len() - inner.trim_end().len();
        assert!(right >= left);
    }

    #[test]
    fn test_box_rejects_narrow_width() {
        let mut buf = OutputBuffer::new(Vec::new());
        let err = render_box(&mut buf, &Theme::default(), "t", None, &[], 4).unwrap_err();
        assert!(matches!(err, UiError::BadWidth(4)));
    }

    #[test]
    fn test_box_rejects_oversized_title() {
        let mut buf = OutputBuffer::new(Vec::new());
        let err =
            render_box(&mut buf, &Theme::default(), "a much too long title", None, &[], 12)
                .unwrap_err();
        assert!(matches!(err, UiError::BadWidth(12)));
    }

    #[test]
    fn test_overlong_content_passes_through() {
        let mut buf = OutputBuffer::new(Vec::new());
        let long = "this content line is far wider than the box interior allows";
        render_box(&mut buf, &Theme::default(), "t", None, &[long], 12).unwrap();
        let lines = rendered_lines(buf);
        assert!(lines[2].contains(long));
    }

    #[test]
    fn test_status_lines() {
        let mut buf = OutputBuffer::new(Vec::new());
        let theme = Theme::default();
        success(&mut buf, &theme, "switched to claude").unwrap();
        error(&mut buf, &theme, "profile missing").unwrap();
        warning(&mut buf, &theme, "checksum differs").unwrap();
        let lines = rendered_lines(buf);
        assert_eq!(lines[0], "✓ switched to claude");
        assert_eq!(lines[1], "✗ profile missing");
        assert_eq!(lines[2], "⚠ checksum differs");
    }

    #[test]
    fn test_separator_width() {
        let mut buf = OutputBuffer::new(Vec::new());
        separator(&mut buf, &Theme::default(), 24).unwrap();
        let lines = rendered_lines(buf);
        assert_eq!(display_width(&lines[0]), 24);
    }
}
