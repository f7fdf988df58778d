#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod board;
mod common;
mod config;
mod coord;
mod game;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod player_ai;
#[cfg(feature = "std")]
mod player_cli;
#[cfg(feature = "std")]
pub mod session;
mod ship;

pub use board::*;
pub use common::*;
pub use config::*;
pub use coord::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use player_ai::*;
#[cfg(feature = "std")]
pub use player_cli::*;
#[cfg(feature = "std")]
pub use session::{Event, InputSource, OutputSink, Session, SessionEnd, SessionSummary};
pub use ship::*;
