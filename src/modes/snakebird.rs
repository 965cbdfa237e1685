use anyhow::{Context, Result};
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use std::time::{Duration, Instant};
use tokio::time::{MissedTickBehavior, interval};
use tracing::info;

use super::terminal::{Tui, restore_terminal, setup_terminal};
use crate::input::{InputHandler, KeyAction, PendingMove};
use crate::metrics::SessionMetrics;
use crate::render::SnakebirdRenderer;
use crate::snakebird::{FrameResult, GravityTimer, SnakebirdConfig, SnakebirdEngine, World};

/// Interactive puzzle loop: input and drawing at the frame rate, gravity on
/// its own accumulated timer
pub struct SnakebirdMode {
    engine: SnakebirdEngine,
    world: World,
    gravity: GravityTimer,
    pending: PendingMove,
    metrics: SessionMetrics,
    renderer: SnakebirdRenderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl SnakebirdMode {
    pub fn new(config: SnakebirdConfig) -> Self {
        info!(
            width = config.grid_width,
            height = config.grid_height,
            platforms = config.platforms.len(),
            "starting snakebird"
        );
        let gravity = GravityTimer::new(config.gravity_interval());
        let mut engine = SnakebirdEngine::new(config);
        let world = engine.reset();

        Self {
            engine,
            world,
            gravity,
            pending: PendingMove::default(),
            metrics: SessionMetrics::new(),
            renderer: SnakebirdRenderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = setup_terminal()?;

        // Run game loop with cleanup
        let result = self.run_loop(&mut terminal).await;

        restore_terminal(&mut terminal)?;
        info!(length = self.world.snake.len(), "snakebird stopped");

        result
    }

    async fn run_loop(&mut self, terminal: &mut Tui) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut frame_timer = interval(self.engine.config().frame_interval());
        frame_timer.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut last_frame = Instant::now();

        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                _ = frame_timer.tick() => {
                    let now = Instant::now();
                    self.update(now - last_frame);
                    last_frame = now;

                    self.metrics.on_frame();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.world, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            match self.input_handler.handle_key_event(key) {
                KeyAction::Move(direction) => self.pending.press(direction),
                KeyAction::Restart => self.restart(),
                KeyAction::Quit => self.should_quit = true,
                KeyAction::None => {}
            }
        }
    }

    /// One frame of game logic
    fn update(&mut self, elapsed: Duration) -> FrameResult {
        let direction = self.pending.take();
        self.engine
            .frame(&mut self.world, &mut self.gravity, direction, elapsed)
    }

    fn restart(&mut self) {
        self.world = self.engine.reset();
        self.gravity.reset();
        self.pending.clear();
        self.metrics.on_restart();
        info!("level restarted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snakebird::{GravityOutcome, MoveOutcome, Position};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mode() -> SnakebirdMode {
        SnakebirdMode::new(SnakebirdConfig {
            seed: Some(8),
            fruit_count: 0,
            ..Default::default()
        })
    }

    #[test]
    fn test_one_step_per_frame() {
        let mut mode = mode();
        mode.handle_event(press(KeyCode::Up));
        mode.handle_event(press(KeyCode::Up));

        let result = mode.update(Duration::from_millis(16));
        assert_eq!(result.movement, Some(MoveOutcome::Moved));
        assert_eq!(mode.world.snake.head(), Position::new(5, 4));

        // The second press in the same frame was dropped
        let result = mode.update(Duration::from_millis(16));
        assert_eq!(result.movement, None);
        assert_eq!(mode.world.snake.head(), Position::new(5, 4));
    }

    #[test]
    fn test_snake_starts_resting_on_ledge() {
        let mut mode = mode();
        let result = mode.update(Duration::from_millis(250));
        assert_eq!(result.gravity, Some(GravityOutcome::Supported));
    }

    #[test]
    fn test_restart_restores_level() {
        let mut mode = mode();
        mode.handle_event(press(KeyCode::Up));
        mode.update(Duration::from_millis(16));
        mode.handle_event(press(KeyCode::Char('r')));

        assert_eq!(mode.world.snake.head(), Position::new(5, 5));
        assert_eq!(mode.gravity.accumulated(), Duration::ZERO);
        assert_eq!(mode.metrics.restarts, 1);
    }

    #[test]
    fn test_quit_key() {
        let mut mode = mode();
        mode.handle_event(press(KeyCode::Char('q')));
        assert!(mode.should_quit);
    }
}
