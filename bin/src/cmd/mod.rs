//! CLI subcommand modules.
//!
//! This module contains the implementations for all finbrain CLI subcommands.

pub(crate) mod available;
pub(crate) mod predictions;
pub(crate) mod ticker;
