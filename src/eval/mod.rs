//! Evaluation module for Othello positions
//!
//! Both search strategies score cutoff and terminal boards with the same
//! material count: own discs minus opponent discs.

pub mod utility;

pub use utility::compute_utility;
