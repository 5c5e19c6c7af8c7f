//! Inverse Kinematics module
//!
//! This module contains the planar chain model and the CCD solver
//! implementation.

pub mod chain;
pub mod error;
pub mod solver;

pub use chain::{Chain, ChainBuilder};
pub use error::IkError;
pub use solver::{CcdSolver, SolveResult, SolverOptions};
