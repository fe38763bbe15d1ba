//! CLI infrastructure for the gosieve toolkit
//!
//! This module provides the command-line interface for extracting a
//! deduplicated corpus and for printing corpus statistics.

pub mod commands;
pub mod output;
