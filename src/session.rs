#![cfg(feature = "std")]

//! Session driver: wires an input source and an output sink to a
//! [`GameEngine`] and runs the prompt/guess loop until the game is won or
//! input runs out.

use rand::Rng;

use crate::{
    board::{Board, Grid},
    common::{CoordError, GameError, GuessResult},
    game::{GameEngine, GameStatus},
    ship::ShipKind,
};

/// Notifications delivered to the output sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    AlreadyGuessed,
    Miss,
    Hit(ShipKind),
    Won { guesses: usize },
    InvalidSize,
    InvalidCoordinate(CoordError),
}

impl From<GuessResult> for Event {
    fn from(result: GuessResult) -> Self {
        match result {
            GuessResult::AlreadyGuessed => Event::AlreadyGuessed,
            GuessResult::Miss => Event::Miss,
            GuessResult::Hit(kind) => Event::Hit(kind),
        }
    }
}

/// Supplies raw text: one size selection, then guesses. `Ok(None)` means the
/// stream closed.
pub trait InputSource {
    fn next_size(&mut self) -> anyhow::Result<Option<String>>;

    /// Next guess. `board` is passed so automated players can inspect what
    /// has been revealed so far.
    fn next_guess(&mut self, board: &Board) -> anyhow::Result<Option<String>>;
}

/// Receives rendered boards and event notifications.
pub trait OutputSink {
    fn render(&mut self, grid: &Grid) -> anyhow::Result<()>;
    fn notify(&mut self, event: Event) -> anyhow::Result<()>;
}

/// How a session finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SessionEnd {
    Won,
    /// Input closed before the game was won.
    Abandoned,
}

/// Summary returned once a session stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SessionSummary {
    pub end: SessionEnd,
    /// Board size, `None` if input closed before a valid size was chosen.
    pub size: Option<usize>,
    pub guesses: usize,
}

pub struct Session<I, O> {
    input: I,
    output: O,
    reveal_all: bool,
}

impl<I: InputSource, O: OutputSink> Session<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self {
            input,
            output,
            reveal_all: false,
        }
    }

    /// Render unrevealed ships too.
    pub fn reveal_all(mut self, reveal: bool) -> Self {
        self.reveal_all = reveal;
        self
    }

    pub fn into_parts(self) -> (I, O) {
        (self.input, self.output)
    }

    /// Run one full game with ships placed by `rng`.
    pub fn run<R: Rng>(&mut self, rng: &mut R) -> anyhow::Result<SessionSummary> {
        let fleet = loop {
            let Some(raw) = self.input.next_size()? else {
                log::warn!("input closed before a board size was chosen");
                return Ok(SessionSummary {
                    end: SessionEnd::Abandoned,
                    size: None,
                    guesses: 0,
                });
            };
            match GameEngine::configure(&raw) {
                Ok(fleet) => break fleet,
                Err(_) => self.output.notify(Event::InvalidSize)?,
            }
        };
        let engine = GameEngine::start(fleet, rng)?;
        self.play(engine)
    }

    /// Drive the guess loop on an engine whose ships are already placed.
    pub fn play(&mut self, mut engine: GameEngine) -> anyhow::Result<SessionSummary> {
        let size = Some(engine.board().size());
        self.output.render(&engine.render(self.reveal_all))?;
        if engine.status() == GameStatus::Won {
            let guesses = engine.guess_count();
            self.output.notify(Event::Won { guesses })?;
            return Ok(SessionSummary {
                end: SessionEnd::Won,
                size,
                guesses,
            });
        }
        loop {
            let Some(raw) = self.input.next_guess(engine.board())? else {
                log::warn!("input closed after {} guesses", engine.guess_count());
                return Ok(SessionSummary {
                    end: SessionEnd::Abandoned,
                    size,
                    guesses: engine.guess_count(),
                });
            };
            let report = match engine.submit_guess(&raw) {
                Ok(report) => report,
                Err(GameError::InvalidCoordinate(reason)) => {
                    self.output.notify(Event::InvalidCoordinate(reason))?;
                    continue;
                }
                Err(e) => return Err(e.into()),
            };
            self.output.notify(report.result.into())?;
            self.output.render(&engine.render(self.reveal_all))?;
            if report.all_sunk {
                let guesses = engine.guess_count();
                log::info!("all ships sunk after {} guesses", guesses);
                self.output.notify(Event::Won { guesses })?;
                return Ok(SessionSummary {
                    end: SessionEnd::Won,
                    size,
                    guesses,
                });
            }
        }
    }
}
