use anyhow::{Context, Result};
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use rand::rngs::StdRng;
use tokio::time::{MissedTickBehavior, interval};
use tracing::info;

use super::terminal::{Tui, restore_terminal, setup_terminal};
use crate::input::{InputHandler, KeyAction};
use crate::life::{Life, LifeConfig};
use crate::metrics::SessionMetrics;
use crate::render::LifeRenderer;
use crate::rng::{seed_or_clock, seeded};

/// Runs the automaton at a fixed generation rate until the user quits
pub struct LifeMode {
    config: LifeConfig,
    life: Life,
    rng: StdRng,
    metrics: SessionMetrics,
    renderer: LifeRenderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl LifeMode {
    pub fn new(config: LifeConfig) -> Self {
        let seed = seed_or_clock(config.seed);
        info!(seed, width = config.width, height = config.height, "starting life");
        let mut rng = seeded(seed);
        let life = Life::new(&config, &mut rng);

        Self {
            config,
            life,
            rng,
            metrics: SessionMetrics::new(),
            renderer: LifeRenderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = setup_terminal()?;

        // Run game loop with cleanup
        let result = self.run_loop(&mut terminal).await;

        restore_terminal(&mut terminal)?;
        info!(generations = self.life.generation(), "life stopped");

        result
    }

    async fn run_loop(&mut self, terminal: &mut Tui) -> Result<()> {
        let mut event_stream = EventStream::new();

        // One tick both advances a generation and redraws
        let mut tick_timer = interval(self.config.tick_interval());
        tick_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                _ = tick_timer.tick() => {
                    self.life.step();
                    self.metrics.on_frame();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.life, &self.metrics);
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
                KeyAction::Quit => self.should_quit = true,
                KeyAction::Restart => self.reseed(),
                KeyAction::Move(_) | KeyAction::None => {}
            }
        }
    }

    fn reseed(&mut self) {
        self.life.reseed(&mut self.rng);
        self.metrics.on_restart();
        info!(population = self.life.population(), "board reseeded");
    }
}
