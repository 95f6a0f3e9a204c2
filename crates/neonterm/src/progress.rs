//! Synchronous progress bar
//!
//! Unlike the spinner there is no background thread: every `update`
//! redraws the line on the calling thread, so the caller's loop is the
//! only writer. A zero total renders nothing rather than dividing.

use std::io::{Stdout, Write};

use crate::buffer::OutputBuffer;
use crate::error::UiError;
use crate::theme::{StyleTag, Theme};

const FULL: &str = "█";
const EMPTY: &str = "░";

/// A fixed-width progress bar with prefix/suffix labels.
pub struct ProgressBar<W: Write = Stdout> {
    width: usize,
    current: u64,
    total: u64,
    prefix: String,
    suffix: String,
    theme: Theme,
    buf: OutputBuffer<W>,
}

impl ProgressBar<Stdout> {
    /// Create a bar of `width` columns over stdout.
    pub fn new(width: usize) -> Result<Self, UiError> {
        Self::with_writer(width, std::io::stdout())
    }
}

impl<W: Write> ProgressBar<W> {
    /// Create a bar of `width` columns over an arbitrary sink.
    pub fn with_writer(width: usize, writer: W) -> Result<Self, UiError> {
        if width == 0 {
            return Err(UiError::BadWidth(width));
        }
        Ok(Self {
            width,
            current: 0,
            total: 0,
            prefix: "Progress".to_string(),
            suffix: String::new(),
            theme: Theme::default(),
            buf: OutputBuffer::new(writer),
        })
    }

    /// Set the total. Fails fast if it drops below the current value.
    pub fn set_total(&mut self, total: u64) -> Result<(), UiError> {
        if total < self.current {
            return Err(UiError::BadProgress {
                current: self.current,
                total,
            });
        }
        self.total = total;
        Ok(())
    }

    /// Set the prefix label.
    pub fn set_prefix(&mut self, prefix: &str) {
        self.prefix = prefix.to_string();
    }

    /// Set the suffix label.
    pub fn set_suffix(&mut self, suffix: &str) {
        self.suffix = suffix.to_string();
    }

    /// Advance to `current` and redraw the line in place.
    pub fn update(&mut self, current: u64) -> Result<(), UiError> {
        if current > self.total {
            return Err(UiError::BadProgress {
                current,
                total: self.total,
            });
        }
        self.current = current;
        self.render()
    }

    /// Force completion, render the full bar, then print `✓ message` on
    /// its own line.
    pub fn complete(&mut self, message: &str) -> Result<(), UiError> {
        self.current = self.total;
        self.render()?;
        self.buf.blank_line()?;
        self.buf.write_line(&format!(
            "{} {}",
            self.theme.paint(StyleTag::Success, self.theme.icons.success),
            self.theme.paint(StyleTag::Success, message)
        ))?;
        self.buf.flush()?;
        Ok(())
    }

    /// Reclaim the sink.
    pub fn into_writer(self) -> W {
        self.buf.into_inner()
    }

    fn render(&mut self) -> Result<(), UiError> {
        if self.total == 0 {
            return Ok(());
        }
        let bar = format_bar(self.current, self.total, self.width);
        let pct = (self.current as f64 / self.total as f64) * 100.0;
        self.buf.carriage_return()?;
        self.buf.write_str(&format!(
            "{} [{}] {:.1}% {} ({}/{})",
            self.prefix,
            self.theme.paint(StyleTag::Secondary, &bar),
            pct,
            self.suffix,
            self.current,
            self.total,
        ))?;
        self.buf.clear_to_end()?;
        self.buf.flush()?;
        Ok(())
    }
}

impl<W: Write> std::fmt::Debug for ProgressBar<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressBar")
            .field("width", &self.width)
            .field("current", &self.current)
            .field("total", &self.total)
            .finish_non_exhaustive()
    }
}

/// Build the bar glyphs: `filled = width * current / total` (floor), the
/// rest empty. A zero total yields an all-empty bar. The intermediate
/// product is widened so counters near `u64::MAX` cannot overflow.
pub fn format_bar(current: u64, total: u64, width: usize) -> String {
    let filled = if total > 0 {
        (width as u128 * u128::from(current) / u128::from(total)) as usize
    } else {
        0
    };
    let filled = filled.min(width);
    format!("{}{}", FULL.repeat(filled), EMPTY.repeat(width - filled))
}
