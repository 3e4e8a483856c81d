use ratatui::backend::TestBackend;
use ratatui::style::{Color, Modifier};
use ratatui::Terminal;

use weatherbar::segments::{palette, Rgb, TextSegment};
use weatherbar::ui::render::draw;

fn terminal(width: u16) -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(width, 1)).unwrap()
}

fn row_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn segments_start_at_the_inset_with_one_cell_padding() {
    let mut terminal = terminal(12);
    let segments = vec![
        TextSegment::new("ab", 31, palette::INK),
        TextSegment::new("c", 31, palette::INK),
    ];

    terminal.draw(|frame| draw(frame, &segments)).unwrap();

    assert_eq!(row_text(&terminal), "  ab c      ");
}

#[test]
fn repaint_leaves_no_stale_cells() {
    let mut terminal = terminal(12);
    let long = vec![TextSegment::new("abcdefgh", 31, palette::INK)];
    let short = vec![TextSegment::new("z", 31, palette::INK)];

    terminal.draw(|frame| draw(frame, &long)).unwrap();
    terminal.draw(|frame| draw(frame, &short)).unwrap();

    assert_eq!(row_text(&terminal), "  z         ");
}

#[test]
fn segment_color_and_weight_reach_the_cells() {
    let mut terminal = terminal(12);
    let segments = vec![TextSegment::bold("8", 24, Rgb(130, 0, 0))];

    terminal.draw(|frame| draw(frame, &segments)).unwrap();

    let cell = &terminal.backend().buffer().content()[2];
    assert_eq!(cell.symbol(), "8");
    assert_eq!(cell.style().fg, Some(Color::Rgb(130, 0, 0)));
    assert!(cell.style().add_modifier.contains(Modifier::BOLD));
}

#[test]
fn small_point_sizes_draw_dim() {
    let mut terminal = terminal(12);
    let segments = vec![
        TextSegment::new("c ", 13, palette::UNIT),
        TextSegment::new("30", 24, palette::PRECIP),
    ];

    terminal.draw(|frame| draw(frame, &segments)).unwrap();

    let buffer = terminal.backend().buffer();
    let unit = &buffer.content()[2];
    assert!(unit.style().add_modifier.contains(Modifier::DIM));

    // "c " is two cells wide, plus one cell padding: the value lands at x=5.
    let value = &buffer.content()[5];
    assert_eq!(value.symbol(), "3");
    assert!(!value.style().add_modifier.contains(Modifier::DIM));
}

#[test]
fn overflow_is_cut_at_the_edge_without_panicking() {
    let mut terminal = terminal(6);
    let segments = vec![
        TextSegment::new("abcdefghij", 31, palette::INK),
        TextSegment::new("never drawn", 31, palette::INK),
    ];

    terminal.draw(|frame| draw(frame, &segments)).unwrap();

    assert_eq!(row_text(&terminal), "  abcd");
}

#[test]
fn an_empty_sequence_clears_the_strip() {
    let mut terminal = terminal(8);
    let segments = vec![TextSegment::new("abc", 31, palette::INK)];

    terminal.draw(|frame| draw(frame, &segments)).unwrap();
    terminal.draw(|frame| draw(frame, &[])).unwrap();

    assert_eq!(row_text(&terminal), "        ");
}
