use super::chain::Chain;
use super::error::IkError;
use crate::math::signed_angle;
use glam::Vec2;
use log::{debug, trace};

/// Configuration for a single solve call.
#[derive(Debug, Clone)]
pub struct SolverOptions {
    /// Upper bound on full sweeps over the chain.
    pub max_iterations: u32,
    /// Distance at which the target counts as reached.
    pub tolerance: f32,
    /// Return as soon as the tolerance is met instead of exhausting
    /// `max_iterations`.
    pub early_exit: bool,
    /// Fraction of each corrective angle actually applied.
    pub damping: f32,
    /// Per-joint load; heavier joints rotate less per step. Empty means all
    /// zero, otherwise one entry per joint.
    pub joint_masses: Vec<f32>,
    /// Global multiplier on how strongly mass suppresses rotation.
    pub mass_factor: f32,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            tolerance: 1e-3,
            early_exit: true,
            damping: 1.0,
            joint_masses: Vec::new(),
            mass_factor: 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveResult {
    pub success: bool,
    pub iterations: u32,
    pub distance: f32,
}

/// Cyclic Coordinate Descent solver for [`Chain`].
///
/// Sweeps the joints tip-to-base, rotating each one to locally minimize the
/// end-effector distance to the target, and repeats until the tolerance is
/// met or the iteration budget runs out. The chain keeps its last-attempted
/// pose either way; a failed solve is reported, not rolled back.
pub struct CcdSolver;

impl CcdSolver {
    pub fn solve(
        chain: &mut Chain,
        target: Vec2,
        options: &SolverOptions,
    ) -> Result<SolveResult, IkError> {
        if !target.is_finite() {
            return Err(IkError::invalid(format!(
                "target must have finite coordinates, got {target}"
            )));
        }
        Self::validate_options(chain, options)?;

        // Baseline pass so every joint correction starts from a consistent
        // position cache.
        chain.forward_kinematics();

        let n = chain.joint_count();
        for iter in 0..options.max_iterations {
            for i in (0..n).rev() {
                let joint_pos = chain.joint_positions()[i];
                let end_pos = chain.end_effector();

                let correction = signed_angle(end_pos - joint_pos, target - joint_pos);
                let mass = options.joint_masses.get(i).copied().unwrap_or(0.0);
                let scale = 1.0 / (1.0 + options.mass_factor * mass);

                chain.angles_mut()[i] += correction * options.damping * scale;

                // The next joint's correction must see this one applied;
                // corrections are strictly sequential within a sweep.
                chain.forward_kinematics();
            }

            let distance = chain.distance_to(target);
            trace!("sweep {}: distance {distance}", iter + 1);

            if options.early_exit && distance <= options.tolerance {
                debug!("converged after {} sweeps, distance {distance}", iter + 1);
                return Ok(SolveResult {
                    success: true,
                    iterations: iter + 1,
                    distance,
                });
            }
        }

        let distance = chain.distance_to(target);
        debug!(
            "budget of {} sweeps exhausted, distance {distance}",
            options.max_iterations
        );
        Ok(SolveResult {
            success: false,
            iterations: options.max_iterations,
            distance,
        })
    }

    fn validate_options(chain: &Chain, options: &SolverOptions) -> Result<(), IkError> {
        if options.max_iterations == 0 {
            return Err(IkError::invalid("max_iterations must be at least 1"));
        }
        if !options.tolerance.is_finite() || options.tolerance < 0.0 {
            return Err(IkError::invalid(format!(
                "tolerance must be non-negative, got {}",
                options.tolerance
            )));
        }
        if !options.damping.is_finite() || options.damping <= 0.0 {
            return Err(IkError::invalid(format!(
                "damping must be positive, got {}",
                options.damping
            )));
        }
        if !options.mass_factor.is_finite() || options.mass_factor < 0.0 {
            return Err(IkError::invalid(format!(
                "mass_factor must be non-negative, got {}",
                options.mass_factor
            )));
        }
        if !options.joint_masses.is_empty() {
            if options.joint_masses.len() != chain.joint_count() {
                return Err(IkError::invalid(format!(
                    "expected {} joint masses, got {}",
                    chain.joint_count(),
                    options.joint_masses.len()
                )));
            }
            if let Some(bad) = options
                .joint_masses
                .iter()
                .find(|m| !m.is_finite() || **m < 0.0)
            {
                return Err(IkError::invalid(format!(
                    "joint masses must be non-negative, got {bad}"
                )));
            }
        }
        Ok(())
    }
}
