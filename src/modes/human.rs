use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::info;
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Instant;
use tokio::time::interval;

use crate::audio::SoundPlayer;
use crate::game::{Phase, Session};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

pub struct HumanMode<R: Rng> {
    session: Session<R>,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    sound: Box<dyn SoundPlayer>,
    should_quit: bool,
    game_over_at: Option<Instant>,
}

impl<R: Rng> HumanMode<R> {
    pub fn new(session: Session<R>, sound: Box<dyn SoundPlayer>) -> Self {
        Self {
            session,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            sound,
            should_quit: false,
            game_over_at: None,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut tick_timer = interval(self.session.config().tick_interval());

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event)?,
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    self.update_game(Instant::now())?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                info!("Quit requested");
                break;
            }

            self.metrics.update();
            terminal
                .draw(|frame| {
                    self.renderer.render(frame, &self.session, &self.metrics);
                })
                .context("Failed to draw frame")?;
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }

            self.apply_action(self.input_handler.handle_key_event(key))?;
        }

        Ok(())
    }

    fn apply_action(&mut self, action: KeyAction) -> Result<()> {
        match action {
            KeyAction::Turn(direction) => {
                self.session.set_direction(direction);
            }
            KeyAction::TogglePause => {
                self.session.toggle_pause();
            }
            KeyAction::Restart => {
                self.reset_game()?;
            }
            KeyAction::Quit => {
                self.should_quit = true;
            }
            KeyAction::None => {}
        }

        Ok(())
    }

    /// One simulation tick, or the automatic restart once the game-over delay has run out
    fn update_game(&mut self, now: Instant) -> Result<()> {
        if self.session.phase() == Phase::GameOver {
            let shown_since = *self.game_over_at.get_or_insert(now);
            if now.duration_since(shown_since) >= self.session.config().game_over_delay() {
                self.reset_game()?;
            }
            return Ok(());
        }

        let info = self.session.tick().context("Game cannot continue")?;
        self.metrics.on_tick(&info);
        for effect in &info.effects {
            self.sound.play(*effect);
        }

        if info.collision_type.is_some() {
            self.game_over_at = Some(now);
        }

        Ok(())
    }

    fn reset_game(&mut self) -> Result<()> {
        self.session.restart().context("Failed to restart game")?;
        self.metrics.on_game_start();
        self.game_over_at = None;
        Ok(())
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
