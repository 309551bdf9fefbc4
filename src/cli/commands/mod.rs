//! Command implementations.

pub mod check;
pub mod deps;
pub mod dispatcher;
pub mod quick;

pub use check::CheckCommand;
pub use deps::DepsCommand;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use quick::QuickCommand;
