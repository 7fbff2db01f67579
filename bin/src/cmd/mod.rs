//! CLI subcommand modules.
//!
//! This module contains the implementations for all kaidoki CLI subcommands.

pub(crate) mod check;
pub(crate) mod scores;
