use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::caption::render_caption;
use crate::metrics::SessionMetrics;
use crate::snakebird::{Position, World};

/// What occupies a cell, in drawing priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Empty,
    Platform,
    Fruit,
    Body,
    Head,
}

/// Flatten the world into one tile per cell, row-major
pub fn tile_map(world: &World) -> Vec<Tile> {
    let width = world.grid_width;
    let mut tiles = vec![Tile::Empty; world.cell_count()];
    let mut put = |pos: Position, tile: Tile| {
        if world.is_in_bounds(pos) {
            tiles[pos.y as usize * width + pos.x as usize] = tile;
        }
    };

    for platform in &world.platforms {
        for cell in platform.cells() {
            put(cell, Tile::Platform);
        }
    }
    for &fruit in &world.fruits {
        put(fruit, Tile::Fruit);
    }
    for &segment in world.snake.body() {
        put(segment, Tile::Body);
    }
    put(world.snake.head(), Tile::Head);

    tiles
}

pub struct SnakebirdRenderer;

impl SnakebirdRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, world: &World, metrics: &SessionMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Game area
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_grid(world), chunks[0]);

        let caption = vec![
            Line::from(Span::styled(
                "Snakebird",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!(
                    "length {}  time {}  {:.0} fps",
                    world.snake.len(),
                    metrics.format_time(),
                    metrics.frame_rate()
                ),
                Style::default().fg(Color::Gray),
            )),
        ];
        render_caption(frame, chunks[0], caption);

        frame.render_widget(self.render_controls(), chunks[1]);
    }

    fn render_grid(&self, world: &World) -> Paragraph<'static> {
        let tiles = tile_map(world);

        let lines: Vec<Line> = tiles
            .chunks(world.grid_width.max(1))
            .map(|row| Line::from(row.iter().map(|&tile| tile_span(tile)).collect::<Vec<_>>()))
            .collect();

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::White)),
        )
    }

    fn render_controls(&self) -> Paragraph<'static> {
        let text = Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ]);

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

fn tile_span(tile: Tile) -> Span<'static> {
    match tile {
        Tile::Empty => Span::styled(". ", Style::default().fg(Color::DarkGray)),
        Tile::Platform => Span::styled("▓▓", Style::default().fg(Color::Rgb(139, 94, 60))),
        Tile::Fruit => Span::styled(
            "● ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Tile::Body => Span::styled("□ ", Style::default().fg(Color::Green)),
        Tile::Head => Span::styled(
            "■ ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    }
}

impl Default for SnakebirdRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snakebird::{Platform, Snake};
    use ratatui::{Terminal, backend::TestBackend};

    fn small_world() -> World {
        let snake = Snake::new(vec![Position::new(1, 0), Position::new(0, 0)], 12);
        World::new(
            snake,
            vec![Platform::new(0, 2, 4, 1)],
            vec![Position::new(3, 1)],
            4,
            3,
        )
    }

    #[test]
    fn test_tile_map_layers() {
        use Tile::*;
        assert_eq!(
            tile_map(&small_world()),
            vec![
                Body, Head, Empty, Empty, //
                Empty, Empty, Empty, Fruit, //
                Platform, Platform, Platform, Platform,
            ]
        );
    }

    #[test]
    fn test_render_shows_length_and_controls() {
        let mut terminal = Terminal::new(TestBackend::new(70, 8)).unwrap();
        let world = small_world();

        terminal
            .draw(|frame| SnakebirdRenderer::new().render(frame, &world, &SessionMetrics::new()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let rows: Vec<String> = buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect();

        assert!(rows[1].contains("Snakebird"));
        assert!(rows[2].contains("length 2"));
        assert!(rows[7].contains("to restart"));
    }
}
