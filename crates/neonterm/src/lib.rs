//! neonterm - terminal presentation layer
//!
//! Styled boxes, tables, progress indicators, interactive menus, and
//! in-place line animations for plain-stdout CLIs. The crate solves one
//! problem well: redrawing variable-width, multi-byte, color-escaped text
//! on a terminal line without corrupting surrounding output.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │    Caller    │  (command / config layer, plain strings in)
//! └──────┬───────┘
//!        │ uses
//!        ▼
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │  boxes/table │   │ spinner/      │   │    menu      │
//! │   renderers  │   │ progress/     │   │ (input loop) │
//! └──────┬───────┘   │ effects       │   └──────┬───────┘
//!        │           └──────┬────────┘          │
//!        └──────────────────┼───────────────────┘
//!                           ▼
//!                    ┌──────────────┐
//!                    │ OutputBuffer │  queued crossterm commands
//!                    └──────┬───────┘
//!                           ▼
//!                    ┌──────────────┐
//!                    │ width + theme│  display columns, SGR styling
//!                    └──────────────┘
//! ```
//!
//! Every renderer measures text in *display columns* ([`width`]), never in
//! bytes or code points, and every color escape is excluded from that
//! measurement while still being emitted. All output goes through an
//! [`OutputBuffer`] over any `Write` sink, so the whole crate renders into
//! a byte buffer under test and into `Stdout` in production.
//!
//! # Modules
//!
//! - [`theme`] - style registry, icons, and layout constants
//! - [`width`] - display-width measurement, padding, truncation
//! - [`buffer`] - queued terminal commands over any sink
//! - [`boxes`] - bordered boxes and status one-liners
//! - [`table`] - fixed-width column tables
//! - [`spinner`] - background-thread spinner with a stop protocol
//! - [`progress`] - synchronous progress bar
//! - [`effects`] - scripted effects (typewriter, matrix, glitch, ...)
//! - [`menu`] - blocking interactive selection loop
//!
//! # Example
//!
//! ```no_run
//! use neonterm::{OutputBuffer, Spinner, SpinnerStyle, Theme};
//!
//! fn main() -> Result<(), neonterm::UiError> {
//!     let theme = Theme::default();
//!     let mut buf = OutputBuffer::default();
//!     neonterm::boxes::render_box(
//!         &mut buf,
//!         &theme,
//!         "neonterm",
//!         Some("presentation layer online"),
//!         &[],
//!         46,
//!     )?;
//!
//!     let mut spinner = Spinner::new(SpinnerStyle::Dots);
//!     spinner.start("calibrating")?;
//!     std::thread::sleep(std::time::Duration::from_millis(500));
//!     spinner.success("calibrated")?;
//!     Ok(())
//! }
//! ```

pub mod boxes;
pub mod buffer;
pub mod effects;
pub mod error;
pub mod menu;
pub mod progress;
pub mod spinner;
pub mod table;
pub mod theme;
pub mod width;

pub use buffer::OutputBuffer;
pub use error::UiError;
pub use menu::{MenuChoice, interactive_menu, interactive_menu_with_desc};
pub use progress::ProgressBar;
pub use spinner::{Spinner, SpinnerState, SpinnerStyle};
pub use table::Column;
pub use theme::{StyleTag, StyledText, Theme};
pub use width::{display_width, pad_or_truncate};
