//! Scripted terminal effects
//!
//! The showy part of the presentation layer: typewriter reveals, matrix
//! noise, glitch flicker, rainbow text, and the neural-network loader.
//! Every effect runs on the calling thread, is bounded by its arguments
//! (pass/tick counts, not wall-clock deadlines), and leaves the cursor on
//! a fresh line. Delays are caller-supplied; tests pass `Duration::ZERO`.

use rand::Rng;
use std::io::Write;
use std::thread;
use std::time::Duration;

use crate::buffer::OutputBuffer;
use crate::theme::{StyleTag, Theme};

const NOISE: &[char] = &[
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I',
    'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];
const GLITCH: &[char] = &['▓', '▒', '░', '█', '▄', '▀', '▌', '▐', '▖', '▗', '▘', '▝'];

/// Print text one character at a time, then a newline.
pub fn typewriter<W: Write>(
    buf: &mut OutputBuffer<W>,
    text: &str,
    delay: Duration,
) -> std::io::Result<()> {
    for c in text.chars() {
        buf.write_str(&c.to_string())?;
        buf.flush()?;
        pause(delay);
    }
    buf.blank_line()?;
    buf.flush()
}

/// Reveal `text` left to right over random hex-noise, one more character
/// per pass, rewriting the line in place. Ends with the clean text and a
/// newline.
pub fn matrix_reveal<W: Write>(
    buf: &mut OutputBuffer<W>,
    theme: &Theme,
    text: &str,
    delay: Duration,
) -> std::io::Result<()> {
    let chars: Vec<char> = text.chars().collect();
    let mut rng = rand::rng();
    for revealed in 0..=chars.len() {
        buf.carriage_return()?;
        for (i, c) in chars.iter().enumerate() {
            if i < revealed {
                buf.write_str(&theme.paint(StyleTag::Success, &c.to_string()))?;
            } else {
                let noise = NOISE[rng.random_range(0..NOISE.len())];
                buf.write_str(&noise.to_string())?;
            }
        }
        buf.flush()?;
        pause(delay);
    }
    buf.blank_line()?;
    buf.flush()
}

/// Flicker `text` with random block-glyph substitutions for `passes`
/// frames, then settle on the clean text.
pub fn glitch<W: Write>(
    buf: &mut OutputBuffer<W>,
    theme: &Theme,
    text: &str,
    passes: usize,
    delay: Duration,
) -> std::io::Result<()> {
    let mut rng = rand::rng();
    for _ in 0..passes {
        buf.carriage_return()?;
        for c in text.chars() {
            if rng.random_range(0..3) == 0 {
                let g = GLITCH[rng.random_range(0..GLITCH.len())];
                buf.write_str(&theme.paint(StyleTag::Error, &g.to_string()))?;
            } else {
                buf.write_str(&c.to_string())?;
            }
        }
        buf.clear_to_end()?;
        buf.flush()?;
        pause(delay);
    }
    buf.clear_line()?;
    buf.write_line(text)?;
    buf.flush()
}

/// Print `text` with each visible character cycling through six colors.
pub fn rainbow<W: Write>(
    buf: &mut OutputBuffer<W>,
    theme: &Theme,
    text: &str,
) -> std::io::Result<()> {
    const CYCLE: [StyleTag; 6] = [
        StyleTag::Error,
        StyleTag::Warning,
        StyleTag::Success,
        StyleTag::Accent2,
        StyleTag::Secondary,
        StyleTag::Accent1,
    ];
    let mut i = 0;
    for c in text.chars() {
        if c == ' ' {
            buf.write_str(" ")?;
        } else {
            buf.write_str(&theme.paint(CYCLE[i % CYCLE.len()], &c.to_string()))?;
            i += 1;
        }
    }
    buf.blank_line()?;
    buf.flush()
}

/// Simulate a neural network activating: one row per layer, each neuron
/// randomly firing (`●`), half-lit (`◐`), or dark (`○`), redrawn for
/// `ticks` frames with a clear-screen between them.
pub fn neural_loader<W: Write>(
    buf: &mut OutputBuffer<W>,
    theme: &Theme,
    layers: &[usize],
    ticks: usize,
    delay: Duration,
) -> std::io::Result<()> {
    let mut rng = rand::rng();
    for _ in 0..ticks {
        buf.clear_screen()?;
        buf.write_line(&theme.paint(StyleTag::Primary, "NEURAL NETWORK ACTIVATION"))?;
        buf.blank_line()?;
        for (i, neurons) in layers.iter().enumerate() {
            buf.write_str(&format!("{:<10}", format!("Layer {}", i + 1)))?;
            for _ in 0..*neurons {
                let cell = match rng.random_range(0..3) {
                    0 => theme.paint(StyleTag::Success, theme.icons.active),
                    1 => theme.paint(StyleTag::Warning, "◐"),
                    _ => theme.paint(StyleTag::Muted, theme.icons.pending),
                };
                buf.write_str(&cell)?;
                buf.write_str(" ")?;
            }
            buf.blank_line()?;
        }
        buf.flush()?;
        pause(delay);
    }
    buf.clear_screen()?;
    buf.write_line(&theme.paint(StyleTag::Success, "Neural network ready"))?;
    buf.flush()
}

/// Full-screen digital rain: one drop per column falling at a random
/// speed of 1-3 rows per tick, a noise trail below each head, the whole
/// frame cleared and repainted every tick. A drop that falls off the
/// bottom respawns at the top in a random column.
///
/// Glyphs are half-width katakana so every row is exactly `width`
/// columns.
pub fn matrix_rain<W: Write>(
    buf: &mut OutputBuffer<W>,
    theme: &Theme,
    width: usize,
    height: usize,
    ticks: usize,
    delay: Duration,
) -> std::io::Result<()> {
    const RAIN: &[char] = &[
        'ｱ', 'ｲ', 'ｳ', 'ｴ', 'ｵ', 'ｶ', 'ｷ', 'ｸ', 'ｹ', 'ｺ', 'ｻ', 'ｼ', 'ｽ', 'ｾ', 'ｿ', 'ﾀ', 'ﾁ',
        'ﾂ', 'ﾃ', 'ﾄ', 'ﾅ', 'ﾆ', 'ﾇ', 'ﾈ', 'ﾉ', 'ﾊ', 'ﾋ', 'ﾌ', 'ﾍ', 'ﾎ', 'ﾏ', 'ﾐ', 'ﾑ', 'ﾒ',
        'ﾓ', 'ﾔ', 'ﾕ', 'ﾖ', 'ﾗ', 'ﾘ', 'ﾙ', 'ﾚ', 'ﾛ', 'ﾜ', 'ｦ', 'ﾝ',
    ];

    struct Droplet {
        col: usize,
        head: usize,
        speed: usize,
    }

    let mut rng = rand::rng();
    let mut drops: Vec<Droplet> = (0..width)
        .map(|col| Droplet {
            col,
            head: rng.random_range(0..height.max(1)),
            speed: rng.random_range(1..=3),
        })
        .collect();

    for _ in 0..ticks {
        let mut frame = vec![vec![' '; width]; height];
        for drop in &mut drops {
            drop.head += drop.speed;
            if drop.head >= height {
                drop.head = 0;
                drop.col = rng.random_range(0..width);
            }
            for row in &mut frame[drop.head..] {
                row[drop.col] = RAIN[rng.random_range(0..RAIN.len())];
            }
        }

        buf.clear_screen()?;
        for row in &frame {
            let line: String = row.iter().collect();
            buf.write_line(&theme.paint(StyleTag::Success, &line))?;
        }
        buf.flush()?;
        pause(delay);
    }
    buf.clear_screen()?;
    buf.flush()
}

/// Print a multi-line banner, cycling each line through the accent
/// palette.
pub fn banner<W: Write>(
    buf: &mut OutputBuffer<W>,
    theme: &Theme,
    lines: &[&str],
    delay: Duration,
) -> std::io::Result<()> {
    const PALETTE: [StyleTag; 4] = [
        StyleTag::Primary,
        StyleTag::Accent1,
        StyleTag::Secondary,
        StyleTag::Success,
    ];
    for (i, line) in lines.iter().enumerate() {
        buf.write_line(&theme.paint(PALETTE[i % PALETTE.len()], line))?;
        buf.flush()?;
        pause(delay);
    }
    Ok(())
}

fn pause(delay: Duration) {
    if !delay.is_zero() {
        thread::sleep(delay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::width::strip_escapes;

    fn capture(f: impl FnOnce(&mut OutputBuffer<Vec<u8>>)) -> String {
        let mut buf = OutputBuffer::new(Vec::new());
        f(&mut buf);
        strip_escapes(&String::from_utf8(buf.into_inner()).unwrap())
    }

    #[test]
    fn test_typewriter_emits_full_text() {
        let out = capture(|buf| typewriter(buf, "model online", Duration::ZERO).unwrap());
        assert_eq!(out, "model online\n");
    }

    #[test]
    fn test_matrix_reveal_ends_fully_revealed() {
        let theme = Theme::default();
        let out = capture(|buf| matrix_reveal(buf, &theme, "CCMX", Duration::ZERO).unwrap());
        // The final pass reveals every character in order
        assert!(out.contains("CCMX"));
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn test_glitch_settles_on_clean_text() {
        let theme = Theme::default();
        let out = capture(|buf| glitch(buf, &theme, "stable", 4, Duration::ZERO).unwrap());
        assert!(out.ends_with("stable\n"));
    }

    #[test]
    fn test_rainbow_preserves_content() {
        let theme = Theme::default();
        let out = capture(|buf| rainbow(buf, &theme, "neon matrix").unwrap());
        assert_eq!(out, "neon matrix\n");
    }

    #[test]
    fn test_neural_loader_draws_layers_and_ready_line() {
        let theme = Theme::default();
        let out =
            capture(|buf| neural_loader(buf, &theme, &[4, 8, 4], 2, Duration::ZERO).unwrap());
        assert!(out.contains("Layer 1"));
        assert!(out.contains("Layer 3"));
        assert!(out.contains("Neural network ready"));
    }

    #[test]
    fn test_matrix_rain_rows_are_exact_width() {
        let theme = Theme::default();
        let out = capture(|buf| matrix_rain(buf, &theme, 20, 6, 3, Duration::ZERO).unwrap());
        // clear_screen resets the cursor, so rows stay newline-delimited
        for row in out.lines().filter(|l| !l.is_empty()) {
            assert_eq!(crate::width::display_width(row), 20, "row {row:?}");
        }
    }

    #[test]
    fn test_matrix_rain_clears_between_frames() {
        let theme = Theme::default();
        let mut buf = OutputBuffer::new(Vec::new());
        matrix_rain(&mut buf, &theme, 10, 4, 2, Duration::ZERO).unwrap();
        let raw = String::from_utf8(buf.into_inner()).unwrap();
        // One clear per tick plus the final wipe
        assert_eq!(raw.matches("\x1b[2J").count(), 3);
    }

    #[test]
    fn test_banner_emits_every_line() {
        let theme = Theme::default();
        let out = capture(|buf| {
            banner(buf, &theme, &["top", "middle", "bottom"], Duration::ZERO).unwrap();
        });
        assert_eq!(out, "top\nmiddle\nbottom\n");
    }
}
