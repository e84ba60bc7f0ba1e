//! Runs the replay pipeline over directories of scrim replays.
//!
//! The binary in `main.rs` is a thin `clap` front end over [`scrims`],
//! [`replay`] and [`roles`].

pub mod error;
pub mod replay;
pub mod roles;
pub mod scrims;

pub use error::Error;
