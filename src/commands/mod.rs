//! Command implementations

pub mod base;
pub mod commit;
pub mod compare;
pub mod repos;
pub mod validators;

pub use base::{Command, CommandContext};
pub use commit::CommitCommand;
pub use compare::CompareCommand;
pub use repos::ReposCommand;
