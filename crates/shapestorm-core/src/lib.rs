//! Core types and definitions for the SHAPESTORM simulation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! components, configuration, commands, frame snapshots and constants.
//! It contains no simulation logic and no windowing or rendering code.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod state;
pub mod types;
