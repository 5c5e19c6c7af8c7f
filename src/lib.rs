//! # planar-ik
//!
//! A planar serial-link manipulator model with a CCD (Cyclic Coordinate
//! Descent) inverse kinematics solver.
//!
//! ## Features
//! - Forward kinematics over cumulative joint angles
//! - CCD solver sweeping tip-to-base with early exit on tolerance
//! - Per-joint mass damping for load-aware compliance
//!
//! ## Example
//! ```rust
//! use planar_ik::{CcdSolver, Chain, SolverOptions};
//! use glam::Vec2;
//!
//! // Build a three-link arm
//! let mut chain = Chain::builder()
//!     .add_link(100.0)
//!     .add_link(75.0)
//!     .add_link(50.0)
//!     .build()?;
//!
//! // Solve for target
//! let target = Vec2::new(120.0, 50.0);
//! let options = SolverOptions {
//!     max_iterations: 200,
//!     tolerance: 0.5,
//!     ..Default::default()
//! };
//! let result = CcdSolver::solve(&mut chain, target, &options)?;
//! println!("success: {}, iterations: {}", result.success, result.iterations);
//! # Ok::<(), planar_ik::IkError>(())
//! ```

pub mod ik;
pub mod math;

pub use ik::{CcdSolver, Chain, ChainBuilder, IkError, SolveResult, SolverOptions};
pub use math::signed_angle;
