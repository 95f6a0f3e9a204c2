//! Interactive menu - blocking selection loop over line-buffered input
//!
//! No raw mode: the unit of input is one newline-terminated line, so the
//! loop works over a pipe as well as a terminal. Each iteration clears the
//! screen, redraws the option frame with the cursor row highlighted, and
//! maps the next input line to a navigation or terminal action. The loop
//! only returns on confirm, cancel, numeric jump, or EOF.

use std::io::{BufRead, Write};

use crate::buffer::OutputBuffer;
use crate::error::UiError;
use crate::theme::{StyleTag, Theme};
use crate::width::pad_or_truncate;

const TOP_LEFT: &str = "╔";
const TOP_RIGHT: &str = "╗";
const BOTTOM_LEFT: &str = "╚";
const BOTTOM_RIGHT: &str = "╝";
const TEE_LEFT: &str = "╠";
const TEE_RIGHT: &str = "╣";
const HORIZONTAL: &str = "═";
const VERTICAL: &str = "║";

/// Result of an interactive menu session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// The confirmed option index.
    Selected(usize),
    /// The user quit (or input hit EOF).
    Cancelled,
}

/// Cursor state mutated only by the input loop.
struct MenuState {
    selected: usize,
    len: usize,
}

impl MenuState {
    fn new(len: usize) -> Self {
        Self { selected: 0, len }
    }

    /// Floor at 0, no wraparound.
    fn up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Ceiling at `len - 1`, no wraparound.
    fn down(&mut self) {
        if self.selected + 1 < self.len {
            self.selected += 1;
        }
    }

    /// Map one input line to a cursor move or a terminal action.
    ///
    /// `None` means the loop redraws and reads again; unrecognized input
    /// lands there too.
    fn apply(&mut self, line: &str) -> Option<MenuChoice> {
        match line.trim() {
            "w" | "k" => {
                self.up();
                None
            }
            "s" | "j" => {
                self.down();
                None
            }
            "" => Some(MenuChoice::Selected(self.selected)),
            "q" => Some(MenuChoice::Cancelled),
            other => {
                if let Ok(n) = other.parse::<usize>() {
                    if (1..=self.len).contains(&n) {
                        return Some(MenuChoice::Selected(n - 1));
                    }
                }
                None
            }
        }
    }
}

/// Render the option list and block until the user picks or quits.
///
/// Key map: `w`/`k` move up, `s`/`j` move down, bare Enter confirms the
/// cursor row, `q` cancels, a number in `[1, len]` selects that option
/// immediately, anything else redraws unchanged. Never times out.
pub fn interactive_menu<R: BufRead, W: Write>(
    input: &mut R,
    buf: &mut OutputBuffer<W>,
    theme: &Theme,
    title: &str,
    options: &[&str],
) -> Result<MenuChoice, UiError> {
    if options.is_empty() {
        return Err(UiError::EmptyMenu);
    }
    let mut state = MenuState::new(options.len());

    loop {
        render_frame(buf, theme, title, options, state.selected)?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // EOF: a piped caller ran out of input
            tracing::debug!("menu input closed, cancelling");
            return Ok(MenuChoice::Cancelled);
        }
        if let Some(choice) = state.apply(&line) {
            tracing::debug!(?choice, "menu resolved");
            return Ok(choice);
        }
    }
}

/// Two-column variant of [`interactive_menu`]: each option is a
/// `(label, description)` pair rendered as a fixed label column and a
/// muted description column. Same key map, same return contract.
pub fn interactive_menu_with_desc<R: BufRead, W: Write>(
    input: &mut R,
    buf: &mut OutputBuffer<W>,
    theme: &Theme,
    title: &str,
    options: &[(&str, &str)],
) -> Result<MenuChoice, UiError> {
    if options.is_empty() {
        return Err(UiError::EmptyMenu);
    }
    let mut state = MenuState::new(options.len());

    loop {
        render_frame_with_desc(buf, theme, title, options, state.selected)?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            tracing::debug!("menu input closed, cancelling");
            return Ok(MenuChoice::Cancelled);
        }
        if let Some(choice) = state.apply(&line) {
            tracing::debug!(?choice, "menu resolved");
            return Ok(choice);
        }
    }
}

/// Draw one menu frame. Every line of the frame is exactly
/// `theme.layout.menu_width` columns.
fn render_frame<W: Write>(
    buf: &mut OutputBuffer<W>,
    theme: &Theme,
    title: &str,
    options: &[&str],
    selected: usize,
) -> Result<(), UiError> {
    let width = theme.layout.menu_width;
    if width < 8 {
        return Err(UiError::BadWidth(width));
    }
    let interior = width - 2;

    frame_header(buf, theme, title, interior)?;

    for (i, option) in options.iter().enumerate() {
        let cell = pad_or_truncate(option, interior - 4);
        let (marker, row) = if i == selected {
            (
                theme.paint(StyleTag::Accent1, theme.icons.cursor),
                theme.paint(StyleTag::Accent3, &cell),
            )
        } else {
            (" ".to_string(), theme.paint(StyleTag::Muted, &cell))
        };
        buf.write_line(&format!(
            "{v} {marker} {row} {v}",
            v = theme.paint(StyleTag::Primary, VERTICAL),
        ))?;
    }

    frame_footer(buf, theme, interior)
}

/// Draw one two-column menu frame. The label column is
/// `theme.layout.menu_label_width` wide and the description column takes
/// the remainder; every line is exactly `theme.layout.menu_width` columns.
fn render_frame_with_desc<W: Write>(
    buf: &mut OutputBuffer<W>,
    theme: &Theme,
    title: &str,
    options: &[(&str, &str)],
    selected: usize,
) -> Result<(), UiError> {
    let width = theme.layout.menu_width;
    let label_w = theme.layout.menu_label_width;
    // Chrome claims 7 columns: borders, gutters, and the cursor cell.
    if width < label_w + 8 {
        return Err(UiError::BadWidth(width));
    }
    let desc_w = width - label_w - 7;
    let interior = width - 2;

    frame_header(buf, theme, title, interior)?;

    for (i, (label, desc)) in options.iter().enumerate() {
        let label_cell = pad_or_truncate(label, label_w);
        let desc_cell = pad_or_truncate(desc, desc_w);
        let (marker, label_cell, desc_cell) = if i == selected {
            (
                theme.paint(StyleTag::Accent1, theme.icons.cursor),
                theme.paint(StyleTag::Accent3, &label_cell),
                theme.paint(StyleTag::Secondary, &desc_cell),
            )
        } else {
            (
                " ".to_string(),
                theme.paint(StyleTag::Muted, &label_cell),
                theme.paint(StyleTag::Muted, &desc_cell),
            )
        };
        buf.write_line(&format!(
            "{v} {marker} {label_cell} {desc_cell} {v}",
            v = theme.paint(StyleTag::Primary, VERTICAL),
        ))?;
    }

    frame_footer(buf, theme, interior)
}

fn frame_header<W: Write>(
    buf: &mut OutputBuffer<W>,
    theme: &Theme,
    title: &str,
    interior: usize,
) -> Result<(), UiError> {
    let rule = HORIZONTAL.repeat(interior);

    buf.clear_screen()?;
    buf.write_line(&theme.paint(StyleTag::Primary, &format!("{TOP_LEFT}{rule}{TOP_RIGHT}")))?;

    let title_cell = pad_or_truncate(title, interior - 2);
    buf.write_line(&format!(
        "{v} {t} {v}",
        v = theme.paint(StyleTag::Primary, VERTICAL),
        t = theme.paint(StyleTag::Primary, &title_cell),
    ))?;
    buf.write_line(&theme.paint(StyleTag::Primary, &format!("{TEE_LEFT}{rule}{TEE_RIGHT}")))?;
    Ok(())
}

fn frame_footer<W: Write>(
    buf: &mut OutputBuffer<W>,
    theme: &Theme,
    interior: usize,
) -> Result<(), UiError> {
    let rule = HORIZONTAL.repeat(interior);

    buf.write_line(&theme.paint(
        StyleTag::Primary,
        &format!("{BOTTOM_LEFT}{rule}{BOTTOM_RIGHT}"),
    ))?;
    buf.blank_line()?;
    buf.write_line(&theme.paint(
        StyleTag::Muted,
        "w/s or k/j to move, number to jump, Enter to select, q to quit",
    ))?;
    buf.flush()?;
    Ok(())
}
