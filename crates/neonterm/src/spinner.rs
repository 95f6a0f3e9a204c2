//! Spinner - background-thread line animation with a stop protocol
//!
//! One ticking thread per running spinner, driven by `recv_timeout` on an
//! mpsc channel: a timeout is a tick (redraw the line in place), a message
//! is either a label change or the terminal transition. Every finisher
//! sends exactly one terminal event and then joins the thread before
//! returning, so no tick can interleave with the final-state print. The
//! thread owns the output sink for its whole life and hands it back
//! through `join`, keeping the single-writer discipline structural.

use std::io::{Stdout, Write};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::buffer::OutputBuffer;
use crate::error::UiError;
use crate::theme::{StyleTag, Theme};

/// Frame sequences for the spinner animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerStyle {
    /// Braille dots (default).
    Dots,
    /// Quarter circles.
    Circle,
    /// Rotating arrows.
    Arrows,
    /// Bouncing dot.
    Bounce,
    /// Rising pulse bars.
    Pulse,
    /// Quadrant blocks.
    Blocks,
    /// Rolling wave bars.
    Waves,
}

impl SpinnerStyle {
    /// The glyph sequence this style cycles through.
    pub fn frames(self) -> &'static [&'static str] {
        match self {
            Self::Dots => &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"],
            Self::Circle => &["◐", "◓", "◑", "◒"],
            Self::Arrows => &["←", "↖", "↑", "↗", "→", "↘", "↓", "↙"],
            Self::Bounce => &["⠁", "⠂", "⠄", "⠂"],
            Self::Pulse => &["▁", "▃", "▄", "▅", "▆", "▇", "█", "▇", "▆", "▅", "▄", "▃"],
            Self::Blocks => &["▖", "▘", "▝", "▗"],
            Self::Waves => &["▂", "▄", "▅", "▆", "▇", "▆", "▅", "▄"],
        }
    }
}

/// Lifecycle state of a spinner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerState {
    /// Created, never started.
    Idle,
    /// Ticking thread is live.
    Running,
    /// Terminated by a finisher.
    Stopped,
}

enum SpinnerEvent {
    SetText(String),
    Finish(Outcome),
}

enum Outcome {
    Cleared,
    Success(String),
    Error(String),
    Warning(String),
}

struct Worker<W> {
    tx: Sender<SpinnerEvent>,
    handle: JoinHandle<W>,
}

/// An animated single-line spinner.
///
/// At most one spinner should be running against a given terminal line;
/// that is a caller contract, not something this type enforces across
/// instances. Starting an already-running spinner fails fast; finishing
/// an already-finished one is a defined no-op.
pub struct Spinner<W: Write + Send + 'static = Stdout> {
    style: SpinnerStyle,
    interval: Duration,
    theme: Theme,
    state: SpinnerState,
    writer: Option<W>,
    worker: Option<Worker<W>>,
}

impl Spinner<Stdout> {
    /// Create a spinner over stdout with the default 100ms tick.
    pub fn new(style: SpinnerStyle) -> Self {
        Self::with_writer(style, std::io::stdout())
    }
}

impl<W: Write + Send + 'static> Spinner<W> {
    /// Create a spinner over an arbitrary sink.
    pub fn with_writer(style: SpinnerStyle, writer: W) -> Self {
        Self {
            style,
            interval: Duration::from_millis(100),
            theme: Theme::default(),
            state: SpinnerState::Idle,
            writer: Some(writer),
            worker: None,
        }
    }

    /// Override the tick interval.
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Override the theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SpinnerState {
        self.state
    }

    /// Launch the ticking thread and draw the first frame.
    pub fn start(&mut self, text: &str) -> Result<(), UiError> {
        if self.state == SpinnerState::Running {
            return Err(UiError::AlreadyRunning);
        }
        if self.interval.is_zero() {
            return Err(UiError::BadInterval);
        }
        let writer = self.writer.take().ok_or(UiError::AlreadyRunning)?;

        let (tx, rx) = mpsc::channel();
        let frames = self.style.frames();
        let interval = self.interval;
        let theme = self.theme.clone();
        let text = text.to_string();
        tracing::debug!(style = ?self.style, "spinner started");
        let handle = thread::spawn(move || run_ticker(writer, frames, interval, &theme, text, &rx));

        self.worker = Some(Worker { tx, handle });
        self.state = SpinnerState::Running;
        Ok(())
    }

    /// Replace the label on the in-progress line. No-op unless running.
    pub fn set_text(&mut self, text: &str) {
        if let Some(worker) = &self.worker {
            let _ = worker.tx.send(SpinnerEvent::SetText(text.to_string()));
        }
    }

    /// Stop ticking and clear the line.
    pub fn stop(&mut self) -> Result<(), UiError> {
        self.finish(Outcome::Cleared)
    }

    /// Stop ticking and replace the line with `✓ message`.
    pub fn success(&mut self, message: &str) -> Result<(), UiError> {
        self.finish(Outcome::Success(message.to_string()))
    }

    /// Stop ticking and replace the line with `✗ message`.
    pub fn error(&mut self, message: &str) -> Result<(), UiError> {
        self.finish(Outcome::Error(message.to_string()))
    }

    /// Stop ticking and replace the line with `⚠ message`.
    pub fn warning(&mut self, message: &str) -> Result<(), UiError> {
        self.finish(Outcome::Warning(message.to_string()))
    }

    /// Reclaim the sink after the spinner has stopped (or before it ever
    /// started). `None` while the ticking thread holds it.
    pub fn into_writer(mut self) -> Option<W> {
        self.writer.take()
    }

    /// Send the single terminal event and wait for the thread to stop
    /// writing. Returns immediately on double-stop.
    fn finish(&mut self, outcome: Outcome) -> Result<(), UiError> {
        let Some(worker) = self.worker.take() else {
            return Ok(());
        };
        // Send failure means the thread already exited; still join it.
        let _ = worker.tx.send(SpinnerEvent::Finish(outcome));
        let writer = worker.handle.join().map_err(|_| UiError::Ticker)?;
        self.writer = Some(writer);
        self.state = SpinnerState::Stopped;
        tracing::debug!("spinner stopped");
        Ok(())
    }
}

impl<W: Write + Send + 'static> Drop for Spinner<W> {
    fn drop(&mut self) {
        // A dropped running spinner must not leave a detached writer loop
        let _ = self.finish(Outcome::Cleared);
    }
}

impl<W: Write + Send + 'static> std::fmt::Debug for Spinner<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Spinner")
            .field("style", &self.style)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

/// Ticking loop. Runs on the spawned thread, owns the sink, returns it.
fn run_ticker<W: Write>(
    writer: W,
    frames: &'static [&'static str],
    interval: Duration,
    theme: &Theme,
    text: String,
    rx: &Receiver<SpinnerEvent>,
) -> W {
    let mut buf = OutputBuffer::new(writer);
    let mut text = text;
    let mut idx = 0usize;
    let _ = draw_frame(&mut buf, theme, frames[0], &text);
    loop {
        match rx.recv_timeout(interval) {
            Ok(SpinnerEvent::SetText(new_text)) => {
                text = new_text;
                let _ = draw_frame(&mut buf, theme, frames[idx % frames.len()], &text);
            }
            Ok(SpinnerEvent::Finish(outcome)) => {
                let _ = draw_final(&mut buf, theme, &outcome);
                break;
            }
            Err(RecvTimeoutError::Timeout) => {
                idx = idx.wrapping_add(1);
                let _ = draw_frame(&mut buf, theme, frames[idx % frames.len()], &text);
            }
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }
    buf.into_inner()
}

fn draw_frame<W: Write>(
    buf: &mut OutputBuffer<W>,
    theme: &Theme,
    frame: &str,
    text: &str,
) -> std::io::Result<()> {
    buf.carriage_return()?;
    buf.write_str(&theme.paint(StyleTag::Primary, frame))?;
    buf.write_str(" ")?;
    buf.write_str(text)?;
    buf.clear_to_end()?;
    buf.flush()
}

fn draw_final<W: Write>(
    buf: &mut OutputBuffer<W>,
    theme: &Theme,
    outcome: &Outcome,
) -> std::io::Result<()> {
    buf.clear_line()?;
    let (tag, icon, message) = match outcome {
        Outcome::Cleared => {
            return buf.flush();
        }
        Outcome::Success(m) => (StyleTag::Success, theme.icons.success, m),
        Outcome::Error(m) => (StyleTag::Error, theme.icons.error, m),
        Outcome::Warning(m) => (StyleTag::Warning, theme.icons.warning, m),
    };
    buf.write_line(&format!(
        "{} {}",
        theme.paint(tag, icon),
        theme.paint(tag, message)
    ))?;
    buf.flush()
}
