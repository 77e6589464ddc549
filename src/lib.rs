//! Gridwalk - Random Lattice Path Deviation Simulator
//!
//! Generates random monotone lattice paths from (0,0) to (m,n), scores how
//! far each path strays from the ideal diagonal x/m = y/n, and aggregates
//! deviation statistics over many independent Monte Carlo trials.
//!
//! This module exposes the path and simulation logic for testing and the
//! CLI binary.

pub mod error;
pub mod path_generation;
pub mod path_scoring;
pub mod simulator;
