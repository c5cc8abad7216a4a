//! SHAPESTORM headless application.
//!
//! Loads the game configuration, drives the simulation engine at the
//! configured frame rate and feeds it scripted input.

pub mod config_file;
pub mod error;
pub mod game_loop;
pub mod input;

pub use shapestorm_core as core;
