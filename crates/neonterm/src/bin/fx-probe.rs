//! Probe binary for eyeballing the presentation layer on a real terminal.
#![allow(missing_docs)]

use anyhow::Result;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use neonterm::{
    Column, MenuChoice, OutputBuffer, ProgressBar, Spinner, SpinnerStyle, Theme, boxes, effects,
    interactive_menu_with_desc, table,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let theme = Theme::default();
    let mut buf = OutputBuffer::default();

    effects::banner(
        &mut buf,
        &theme,
        &[
            "╔═══════════════════════════════════╗",
            "║        NEONTERM  FX  PROBE        ║",
            "╚═══════════════════════════════════╝",
        ],
        Duration::from_millis(50),
    )?;
    buf.blank_line()?;

    boxes::render_box(
        &mut buf,
        &theme,
        "Profile Matrix",
        Some("terminal presentation layer"),
        &["boxes, tables, spinners, menus", "with display-width alignment"],
        theme.layout.box_width,
    )?;
    buf.blank_line()?;

    let columns = vec![
        Column::new("profile", 16),
        Column::new("status", 8),
        Column::new("modified", 12),
    ];
    let rows = vec![
        vec!["claude".to_string(), "ACTIVE".to_string(), "Jan 02 15:04".to_string()],
        vec!["glm".to_string(), "standby".to_string(), "Dec 28 09:12".to_string()],
        vec![
            "an-overly-long-profile-name".to_string(),
            "standby".to_string(),
            "Nov 07 21:40".to_string(),
        ],
    ];
    table::render_table(&mut buf, &theme, &columns, &rows)?;
    buf.blank_line()?;

    let mut bar = ProgressBar::new(24)?;
    bar.set_total(40)?;
    bar.set_prefix("Copying");
    for i in 0..=40 {
        bar.update(i)?;
        std::thread::sleep(Duration::from_millis(20));
    }
    bar.complete("settings copied")?;

    let mut spinner = Spinner::new(SpinnerStyle::Dots);
    spinner.start("verifying checksum")?;
    std::thread::sleep(Duration::from_millis(1200));
    spinner.set_text("activating profile");
    std::thread::sleep(Duration::from_millis(1200));
    spinner.success("profile activated")?;

    effects::typewriter(&mut buf, "Engaging scripted effects...", Duration::from_millis(25))?;
    effects::matrix_reveal(&mut buf, &theme, "NEONTERM ONLINE", Duration::from_millis(60))?;
    effects::glitch(&mut buf, &theme, "signal stabilized", 6, Duration::from_millis(60))?;
    effects::rainbow(&mut buf, &theme, "all channels nominal")?;
    std::thread::sleep(Duration::from_millis(400));
    effects::neural_loader(&mut buf, &theme, &[8, 16, 8, 4], 20, Duration::from_millis(100))?;
    effects::matrix_rain(&mut buf, &theme, 72, 16, 40, Duration::from_millis(50))?;

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let choice = interactive_menu_with_desc(
        &mut input,
        &mut buf,
        &theme,
        "PROBE MENU",
        &[
            ("again", "run it again (not really)"),
            ("goodbye", "print a goodbye"),
            ("exit", "leave the probe"),
        ],
    )?;
    buf.clear_screen()?;
    match choice {
        MenuChoice::Selected(1) => boxes::success(&mut buf, &theme, "goodbye")?,
        MenuChoice::Selected(_) => boxes::info(&mut buf, &theme, "probe complete")?,
        MenuChoice::Cancelled => boxes::warning(&mut buf, &theme, "probe cancelled")?,
    }
    buf.flush()?;
    Ok(())
}
