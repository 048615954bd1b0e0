//! CLI subcommands.

pub mod ask;
pub mod serve;
