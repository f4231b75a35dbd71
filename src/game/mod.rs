//! Session engine and I/O collaborator

mod io;
mod session;

pub use io::{ConsoleIo, GameIo, IoError, ScriptedIo};
pub use session::{Outcome, Session};
