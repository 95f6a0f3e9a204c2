//! End-to-end rendering checks over a captured sink.
//!
//! These exercise the public API the way a command layer would: compose a
//! header box, a profile table, a progress bar, a spinner lifecycle, and a
//! menu session, then verify the alignment invariant holds across
//! everything that hit the stream.

use std::io::Cursor;
use std::time::Duration;

use neonterm::width::strip_escapes;
use neonterm::{
    Column, MenuChoice, OutputBuffer, ProgressBar, Spinner, SpinnerStyle, Theme, boxes,
    display_width, interactive_menu, pad_or_truncate, table,
};

#[test]
fn box_and_table_share_the_alignment_invariant() {
    let theme = Theme::default();
    let mut buf = OutputBuffer::new(Vec::new());

    let columns = vec![Column::new("profile", 14), Column::new("status", 8)];
    let width = table::table_width(&columns);

    boxes::render_box(&mut buf, &theme, "Profiles", None, &[], width).unwrap();
    table::render_table(
        &mut buf,
        &theme,
        &columns,
        &[
            vec!["claude".into(), "ACTIVE".into()],
            vec!["配置档案名字很长".into(), "standby".into()],
        ],
    )
    .unwrap();

    let out = String::from_utf8(buf.into_inner()).unwrap();
    for line in out.lines().map(strip_escapes) {
        if line.is_empty() {
            continue;
        }
        assert_eq!(display_width(&line), width, "line {line:?}");
    }
}

#[test]
fn escaped_and_plain_text_measure_identically() {
    let theme = Theme::default();
    let plain = "claude 模型";
    let painted = theme.paint(neonterm::StyleTag::Accent1, plain);
    assert_eq!(display_width(&painted), display_width(plain));
    assert_eq!(
        display_width(&strip_escapes(&painted)),
        display_width(&painted)
    );
}

#[test]
fn pad_or_truncate_is_exact_for_painted_cells() {
    let theme = Theme::default();
    let painted = theme.paint(neonterm::StyleTag::Error, "a long failing profile name");
    for width in 4..30 {
        assert_eq!(display_width(&pad_or_truncate(&painted, width)), width);
    }
}

#[test]
fn progress_then_spinner_on_one_stream() {
    let mut bar = ProgressBar::with_writer(12, Vec::new()).unwrap();
    bar.set_total(2).unwrap();
    bar.update(1).unwrap();
    bar.update(2).unwrap();
    bar.complete("copied").unwrap();
    let sink = bar.into_writer();

    let mut spinner =
        Spinner::with_writer(SpinnerStyle::Dots, sink).interval(Duration::from_millis(5));
    spinner.start("activating").unwrap();
    std::thread::sleep(Duration::from_millis(25));
    spinner.success("activated").unwrap();

    let out = strip_escapes(&String::from_utf8(spinner.into_writer().unwrap()).unwrap());
    assert!(out.contains("100.0%"));
    assert!(out.contains("✓ copied"));
    assert!(out.contains("activating"));
    assert!(out.ends_with("✓ activated\n"));
}

#[test]
fn menu_session_end_to_end() {
    let theme = Theme::default();
    let mut buf = OutputBuffer::new(Vec::new());
    let mut input = Cursor::new(b"s\nj\nk\n\n".to_vec());
    let choice = interactive_menu(
        &mut input,
        &mut buf,
        &theme,
        "SWITCH PROFILE",
        &["claude", "glm", "kimi"],
    )
    .unwrap();
    // down, down, up, confirm
    assert_eq!(choice, MenuChoice::Selected(1));

    let out = strip_escapes(&String::from_utf8(buf.into_inner()).unwrap());
    assert!(out.contains("SWITCH PROFILE"));
    assert!(out.contains('▶'));
}
