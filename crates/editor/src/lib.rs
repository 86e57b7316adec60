// Library crate: the document engine, editor session and command interface.
// The binary in main.rs is a thin headless runner on top of it.

pub mod client;
pub mod command;
pub mod elevation;
pub mod fixtures;
pub mod geometry;
pub mod keyboard;
pub mod layout;
pub mod session;
pub mod state;
