//! Planner CLI library.

pub mod cli;
pub mod commands;
