//! CLI infrastructure for the m,n,k-game engine
//!
//! This module provides the command-line interface for analyzing positions
//! and running engine duels.

pub mod commands;
pub mod output;
