use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Clear, Paragraph},
};

/// Area of a caption anchored one cell inside the top-left corner of `area`
///
/// The box is exactly as wide as the widest line, so whatever is drawn
/// beneath stays visible around the text.
pub fn caption_area(area: Rect, lines: &[Line]) -> Rect {
    let width = lines.iter().map(|line| line.width()).max().unwrap_or(0) as u16;
    let height = lines.len() as u16;
    let anchor = Rect::new(
        area.x.saturating_add(1),
        area.y.saturating_add(1),
        width,
        height,
    );
    anchor.intersection(area)
}

/// Draw text over an opaque black box sized to the text
pub fn render_caption(frame: &mut Frame, area: Rect, lines: Vec<Line<'static>>) {
    let rect = caption_area(area, &lines);
    if rect.is_empty() {
        return;
    }

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(Color::Black)),
        rect,
    );
}
