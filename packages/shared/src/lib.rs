//! Shared utilities for the clanker-probe workspace.

pub mod logger;
