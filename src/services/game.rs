//! Main loop
//!
//! Runs the simulation on a fixed clock: a torpedo step every tick and a
//! full turn every second step. Input arrives on a channel from the poller
//! thread and is handled between steps. The screen is redrawn after
//! anything changes.

use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

use crate::game_engine::{GameEngine, GameState};
use crate::io::{InputEvent, Key, Screen};
use crate::models::errors::{GameError, GameResult};
use crate::ui;

/// How long to wait for input before checking the clock again.
const INPUT_WAIT: Duration = Duration::from_millis(10);

/// Torpedo steps per full turn.
const STEPS_PER_TURN: u64 = 2;

pub struct Game<S: Screen> {
    engine: GameEngine,
    screen: S,
    input: Receiver<InputEvent>,
    tick: Duration,
    steps: u64,
    paused: bool,
}

impl<S: Screen> Game<S> {
    pub fn new(engine: GameEngine, screen: S, input: Receiver<InputEvent>, tick: Duration) -> Self {
        Game {
            engine,
            screen,
            input,
            tick,
            steps: 0,
            paused: false,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Play until the game ends. Victory and defeat screens stay up until
    /// Esc is pressed.
    pub fn run(&mut self) -> GameResult<GameState> {
        self.redraw()?;
        let mut last_step = Instant::now();

        loop {
            let mut dirty = false;

            match self.input.recv_timeout(INPUT_WAIT) {
                Ok(event) => {
                    self.handle_event(event)?;
                    dirty = true;
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => return Err(GameError::InputDisconnected),
            }

            if !self.paused && last_step.elapsed() >= self.tick {
                last_step = Instant::now();
                self.step()?;
                dirty = true;
            }

            if let Some(end) = self.engine.check_game_over() {
                if end != GameState::Quit {
                    ui::draw_end(&end, &mut self.screen)?;
                    self.wait_for_escape()?;
                }
                return Ok(end);
            }

            if dirty {
                self.redraw()?;
            }
        }
    }

    /// One torpedo step, plus a full turn on every second call.
    pub fn step(&mut self) -> GameResult<()> {
        self.engine.update_torpedoes()?;
        self.steps += 1;
        if self.steps % STEPS_PER_TURN == 0 {
            self.engine.update()?;
        }
        Ok(())
    }

    /// Space pauses and resumes the clock; everything else goes to the
    /// engine, paused or not.
    ///
    /// Space toggles the pause even while a number is being typed, since
    /// the numeric buffer only takes digits.
    pub fn handle_event(&mut self, event: InputEvent) -> GameResult<()> {
        match event {
            InputEvent::Key(Key::Char(' ')) => {
                self.paused = !self.paused;
                log::debug!("paused: {}", self.paused);
                Ok(())
            }
            InputEvent::Resize { width, height } => {
                self.screen.resized(width, height);
                Ok(())
            }
            InputEvent::Key(_) => self.engine.handle_event(event),
        }
    }

    fn redraw(&mut self) -> GameResult<()> {
        ui::draw(self.engine.galaxy(), self.paused, &mut self.screen)
    }

    fn wait_for_escape(&mut self) -> GameResult<()> {
        loop {
            match self.input.recv() {
                Ok(InputEvent::Key(Key::Esc)) => return Ok(()),
                Ok(_) => {}
                Err(_) => return Err(GameError::InputDisconnected),
            }
        }
    }
}
