use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::caption::render_caption;
use crate::life::{Life, LifeGrid};
use crate::metrics::SessionMetrics;

const LIVE_COLOR: Color = Color::Rgb(200, 255, 255);
const TITLE: &str = "Conway's Game of Life";

pub struct LifeRenderer;

impl LifeRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, life: &Life, metrics: &SessionMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Board
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_grid(life.grid()), chunks[0]);

        let caption = vec![
            Line::from(Span::styled(
                TITLE,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!(
                    "generation {}  population {}  {}",
                    life.generation(),
                    life.population(),
                    metrics.format_time()
                ),
                Style::default().fg(Color::Gray),
            )),
        ];
        render_caption(frame, chunks[0], caption);

        frame.render_widget(self.render_controls(), chunks[1]);
    }

    fn render_grid(&self, grid: &LifeGrid) -> Paragraph<'static> {
        let live = Style::default().bg(LIVE_COLOR);
        let dead = Style::default().bg(Color::Black);

        let lines: Vec<Line> = grid
            .rows()
            .map(|row| {
                let spans: Vec<Span> = row
                    .iter()
                    .map(|&alive| Span::styled("  ", if alive { live } else { dead }))
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
    }

    fn render_controls(&self) -> Paragraph<'static> {
        let text = Line::from(vec![
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to reseed | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ]);

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for LifeRenderer {
    fn default() -> Self {
        Self::new()
    }
}
