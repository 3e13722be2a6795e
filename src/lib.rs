#![cfg_attr(not(feature = "std"), no_std)]

mod bitboard;
mod board;
mod common;
mod config;
#[cfg(feature = "std")]
pub mod driver;
mod game;
pub mod input;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod render;
mod ship;
#[cfg(feature = "std")]
pub mod sim;
mod turn;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use driver::{Driver, GameSummary, InputClosed};
pub use game::*;
pub use input::{parse_placement, parse_target, Alphabet, ParseError};
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use render::{glyph, Glyph, Screen};
pub use ship::*;
#[cfg(feature = "std")]
pub use sim::{simulate, SimSummary};
pub use turn::*;
