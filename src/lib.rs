//! This crate provides a command-line task tracker.
//!
//! Tasks are plain to-dos, deadlines or events (see the [`task`] module). They are kept in a [`TaskList`], that is saved to a
//! flat text file by a [`Storage`] after every change.
//!
//! The save file is also meant to be read by humans: every task is saved as the line it is displayed with
//! (e.g. `[D][ ] submit report (by: Aug 30 2025 6pm)`). The [`codec`] module converts tasks to these lines, and parses them back. \
//! A lossless JSON format can be used instead (see [`storage::SaveFormat`]).
//!
//! The [`Session`] runs the commands typed by a user, and the [`ui`] module provides the interactive console loop.

pub mod error;
pub use error::TaskError;
pub mod datetime;
pub mod task;
pub use task::Task;
pub mod codec;
pub mod list;
pub use list::TaskList;
pub mod storage;
pub use storage::Storage;
pub mod command;
pub mod session;
pub use session::Session;
pub mod ui;

pub mod config;
pub mod utils;
