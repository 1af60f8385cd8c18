//! Terminal front end for `posts-core`.
//!
//! One `Shell` owns one `PostsController` for the whole session: it mounts
//! on start, reads a command per line, prints notices and re-renders, and
//! drops the controller on `quit` or EOF.

pub mod config;
pub mod shell;
pub mod terminal;
pub mod transport;

pub use config::Config;
pub use shell::{Command, Shell};
pub use terminal::{LineSource, StdinLines, TerminalConfirm};
pub use transport::UreqTransport;
