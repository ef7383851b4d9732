//! Core of a shareable bingo board: seeded phrase assignment, a four hex digit
//! codec for the marked cells and completed-line detection on the 4×4 grid.
#![no_std]

extern crate alloc;

pub use board::*;
pub use codec::*;
pub use error::*;
pub use lines::*;
pub use phrases::*;
pub use random::*;
pub use seed::*;
pub use session::*;
pub use shuffle::*;
pub use state::*;
pub use types::*;

mod board;
mod codec;
mod error;
mod lines;
mod phrases;
mod random;
mod seed;
mod session;
mod shuffle;
mod state;
mod types;
