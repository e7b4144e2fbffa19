//! Integration tests for the console compositor, checked through a VT parser

use glyphline::{Cell, Console, FieldSpec, HeaderSettings, StyleVariant};
use glyphline::{Alignment, CursorState};

use super::helpers::{csi, parse_output, text, TermEvent};

fn events(console: Console<Vec<u8>>) -> Vec<TermEvent> {
    parse_output(&console.into_inner())
}

#[test]
fn styled_print_emits_mathematical_sans_serif_bold() {
    let mut console = Console::with_style(Vec::new(), StyleVariant::SansSerifBold);
    console.print_styled("AB3").unwrap();

    let expected: String = [0x1D5D4, 0x1D5D5, 0x1D7EF]
        .iter()
        .map(|&cp| char::from_u32(cp).unwrap())
        .collect();
    assert_eq!(events(console), vec![text(&expected)]);
}

#[test]
fn up_move_precedes_right_move_and_text() {
    let mut console = Console::new(Vec::new());
    console.move_up(2);
    console.move_right(6);
    console.print_plain("cell").unwrap();

    assert_eq!(
        events(console),
        vec![csi('A', &[2]), csi('C', &[6]), text("cell")]
    );
}

#[test]
fn color_is_set_after_cursor_moves() {
    let mut console = Console::new(Vec::new());
    console.set_color(Some(crossterm::style::Color::Green));
    console.move_right(3);
    console.print_styled_with("ok", StyleVariant::Serif).unwrap();

    let events = events(console);
    assert_eq!(events[0], csi('C', &[3]));
    assert!(matches!(&events[1], TermEvent::Csi { action: 'm', .. }));
    assert_eq!(events[2], text("ok"));
    assert_eq!(events[3], csi('m', &[0]));
}

#[test]
fn plain_prints_consume_pending_offsets_once() {
    let mut console = Console::new(Vec::new());

    console.move_right(3);
    console.print_plain("ab").unwrap();
    console.print_plain("cd").unwrap();
    console.move_right(5);
    console.print_plain("efg").unwrap();

    assert_eq!(console.tracker().column(), 5 + 3);
    assert_eq!(
        events(console),
        vec![
            csi('C', &[3]),
            text("abcd"),
            csi('C', &[5]),
            text("efg"),
        ]
    );
}

#[test]
fn styled_print_clears_all_pending_motion() {
    let mut console = Console::new(Vec::new());
    console.move_up(1);
    console.move_right(4);
    console.print_styled("x").unwrap();

    assert_eq!(
        console.tracker().state(),
        CursorState {
            vertical_pending: 0,
            horizontal_pending: 0,
            horizontal_global: 5,
        }
    );

    console.print_styled("y").unwrap();
    let events = events(console);
    let moves = events
        .iter()
        .filter(|e| matches!(e, TermEvent::Csi { .. }))
        .count();
    assert_eq!(moves, 2);
}

#[test]
fn column_counts_input_characters_not_output_bytes() {
    let mut console = Console::with_style(Vec::new(), StyleVariant::FrakturBold);
    console.print_styled("Hello").unwrap();
    assert_eq!(console.tracker().column(), 5);
}

#[test]
fn header_rows_line_up_under_each_other() {
    let specs = [FieldSpec::new(6, 0), FieldSpec::new(8, 2), FieldSpec::new(5, 0)];
    let mut console = Console::new(Vec::new());
    console.set_header(HeaderSettings {
        show: true,
        alignment: Alignment::Center,
        separator: "|".to_string(),
    });

    console
        .print_header(&[
            Cell::new("id", specs[0]),
            Cell::new("price", specs[1]),
            Cell::new("qty", specs[2]),
        ])
        .unwrap();
    console.newline().unwrap();
    console
        .print_header(&[
            Cell::new(17, specs[0]),
            Cell::new(3.5, specs[1]),
            Cell::new(120u32, specs[2]),
        ])
        .unwrap();

    let out = String::from_utf8(console.into_inner()).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "  id  | price  | qty ");
    assert_eq!(lines[1], "  17  |  3.50  | 120 ");
}
