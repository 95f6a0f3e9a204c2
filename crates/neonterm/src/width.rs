//! Display-width measurement, padding, and truncation
//!
//! Terminal columns are counted per code point: 1 for ordinary characters,
//! 2 for wide/CJK characters, 0 for combining marks. Escape sequences (ESC
//! through the first ASCII letter) are emitted but occupy no columns, so
//! they are skipped entirely here. Every box, table, and menu alignment in
//! this crate rests on the exact-width guarantee of [`pad_or_truncate`].

use unicode_width::UnicodeWidthChar;

/// Single-column marker appended to truncated text.
pub const ELLIPSIS: char = '…';

const ESC: char = '\x1b';
const SGR_RESET: &str = "\x1b[0m";

/// Number of terminal columns `s` occupies when rendered.
///
/// Embedded escape sequences contribute nothing; their bytes are skipped
/// from the ESC up to and including the first ASCII letter that closes
/// the sequence.
pub fn display_width(s: &str) -> usize {
    let mut cols = 0;
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == ESC {
            for t in chars.by_ref() {
                if t.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            cols += c.width().unwrap_or(0);
        }
    }
    cols
}

/// Remove every escape sequence from `s`, keeping visible content only.
pub fn strip_escapes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == ESC {
            for t in chars.by_ref() {
                if t.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Fit `s` to exactly `width` display columns.
///
/// Narrower input is right-padded with spaces; wider input is truncated at
/// the last code point whose cumulative width fits and finished with
/// [`ELLIPSIS`]. The result always measures exactly `width` columns, and
/// truncation never splits a code point or an escape sequence.
pub fn pad_or_truncate(s: &str, width: usize) -> String {
    let w = display_width(s);
    if w == width {
        s.to_string()
    } else if w < width {
        let mut out = String::with_capacity(s.len() + (width - w));
        out.push_str(s);
        out.extend(std::iter::repeat_n(' ', width - w));
        out
    } else {
        truncate_with_ellipsis(s, width)
    }
}

/// Truncate to `width` columns, reserving the last column for [`ELLIPSIS`].
///
/// Escape sequences encountered before the cut point are copied through
/// whole; if any were, an SGR reset is emitted at the cut, since the
/// input's own closing sequence may fall past it and styling must not
/// bleed into whatever follows the cell. If a wide character straddles
/// the boundary, the gap is filled with spaces so the ellipsis still
/// lands in the final column.
fn truncate_with_ellipsis(s: &str, width: usize) -> String {
    let budget = width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    let mut saw_escape = false;
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == ESC {
            saw_escape = true;
            out.push(c);
            for t in chars.by_ref() {
                out.push(t);
                if t.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        let cw = c.width().unwrap_or(0);
        if used + cw > budget {
            break;
        }
        used += cw;
        out.push(c);
    }
    if saw_escape {
        out.push_str(SGR_RESET);
    }
    // A trailing wide char can leave a one-column gap before the marker.
    out.extend(std::iter::repeat_n(' ', budget - used));
    if width > 0 {
        out.push(ELLIPSIS);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_width() {
        assert_eq!(display_width(""), 0);
        assert_eq!(display_width("model"), 5);
    }

    #[test]
    fn test_wide_and_combining_width() {
        // CJK characters take two columns each
        assert_eq!(display_width("模型"), 4);
        assert_eq!(display_width("jq 模型"), 7);
        // Combining acute mark takes none
        assert_eq!(display_width("e\u{301}"), 1);
    }

    #[test]
    fn test_escape_sequences_are_widthless() {
        let plain = "active";
        let colored = "\x1b[32mactive\x1b[0m";
        assert_eq!(display_width(colored), display_width(plain));
        assert_eq!(strip_escapes(colored), plain);
        // Cursor controls too, not just SGR
        assert_eq!(display_width("\x1b[2J\x1b[1;1Hok"), 2);
    }

    #[test]
    fn test_pad_short_input() {
        let out = pad_or_truncate("jq", 6);
        assert_eq!(out, "jq    ");
        assert_eq!(display_width(&out), 6);
    }

    #[test]
    fn test_exact_input_unchanged() {
        assert_eq!(pad_or_truncate("ripgrep", 7), "ripgrep");
    }

    #[test]
    fn test_truncate_ends_with_ellipsis() {
        let out = pad_or_truncate("configuration", 8);
        assert_eq!(display_width(&out), 8);
        assert!(out.ends_with(ELLIPSIS));
        assert!(out.starts_with("configu"));
    }

    #[test]
    fn test_truncate_never_splits_wide_char() {
        // Each glyph is two columns; budget of 5 leaves a gap column
        let out = pad_or_truncate("模型切换器", 6);
        assert_eq!(display_width(&out), 6);
        assert!(out.ends_with(ELLIPSIS));
        assert!(!out.contains('换'));
    }

    #[test]
    fn test_truncate_keeps_escapes_whole() {
        let out = pad_or_truncate("\x1b[31mlong-model-name\x1b[0m", 6);
        assert_eq!(display_width(&out), 6);
        // The opening sequence survives intact
        assert!(out.starts_with("\x1b[31m"));
    }

    #[test]
    fn test_truncate_resets_styling_at_cut() {
        // The closing sequence of a painted cell falls past the cut; a
        // reset must take its place or the color bleeds into the next cell
        let out = pad_or_truncate("\x1b[31mlong-model-name\x1b[0m", 6);
        assert_eq!(display_width(&out), 6);
        assert!(out.ends_with(ELLIPSIS));
        let reset = out.find("\x1b[0m").expect("reset emitted at the cut");
        assert!(reset < out.find(ELLIPSIS).unwrap());
    }

    #[test]
    fn test_exact_width_property() {
        let samples = ["", "a", "switcher", "模型 matrix", "\x1b[1mbold\x1b[0m tail"];
        for s in samples {
            for width in 1..20 {
                let out = pad_or_truncate(s, width);
                assert_eq!(display_width(&out), width, "input {s:?} width {width}");
            }
        }
    }

    #[test]
    fn test_pad_preserves_prefix() {
        let s = "claude";
        let out = pad_or_truncate(s, 12);
        assert!(out.starts_with(s));
        assert!(out[s.len()..].chars().all(|c| c == ' '));
    }
}
