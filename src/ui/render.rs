//! Draws the segment line into the terminal strip.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::Clear;
use ratatui::Frame;

use crate::segments::{Rgb, TextSegment};

/// Columns left blank before the first segment.
const LEFT_INSET: u16 = 2;

/// Point sizes at or below this draw dim; the character grid's
/// stand-in for small glyphs.
const DIM_POINT_SIZE: u16 = 20;

/// Repaints the whole strip, then lays the segments out left to right
/// from the inset, each advancing the cursor by its measured width plus
/// one cell of padding. No wrapping; what does not fit is cut off at
/// the edge on whole-cell boundaries.
pub fn draw(frame: &mut Frame<'_>, segments: &[TextSegment]) {
    let area = frame.area();
    frame.render_widget(Clear, area);
    if area.width == 0 || area.height == 0 {
        return;
    }

    let buf = frame.buffer_mut();
    let y = area.y;
    let mut x = area.x.saturating_add(LEFT_INSET);
    for segment in segments {
        if x >= area.right() {
            break;
        }
        let span = Span::styled(segment.text.as_str(), segment_style(segment));
        let width = span.width() as u16;
        buf.set_span(x, y, &span, area.right() - x);
        x = x.saturating_add(width).saturating_add(1);
    }
}

fn segment_style(segment: &TextSegment) -> Style {
    let Rgb(r, g, b) = segment.color;
    let mut style = Style::default().fg(Color::Rgb(r, g, b));
    if segment.bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    if segment.point_size <= DIM_POINT_SIZE {
        style = style.add_modifier(Modifier::DIM);
    }
    style
}
