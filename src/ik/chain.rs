use super::error::IkError;
use glam::Vec2;

/// A planar serial-link manipulator: fixed link lengths, mutable joint
/// angles, and a derived joint-position cache.
///
/// Each angle is the rotation of its joint relative to the cumulative
/// orientation of all preceding links, so rotations accumulate additively
/// down the chain.
#[derive(Debug, Clone)]
pub struct Chain {
    pub(crate) lengths: Vec<f32>,
    pub(crate) angles: Vec<f32>,
    pub(crate) origin: Vec2,
    pub(crate) joint_positions: Vec<Vec2>,
}

impl Chain {
    pub fn builder() -> ChainBuilder {
        ChainBuilder::new()
    }

    /// Builds a chain from link lengths, all angles at zero.
    ///
    /// Fails if `lengths` is empty or contains a non-positive or non-finite
    /// length.
    pub fn new(lengths: &[f32]) -> Result<Self, IkError> {
        if lengths.is_empty() {
            return Err(IkError::invalid("chain needs at least one link"));
        }
        if let Some(bad) = lengths.iter().find(|l| !l.is_finite() || **l <= 0.0) {
            return Err(IkError::invalid(format!(
                "link lengths must be positive, got {bad}"
            )));
        }

        Ok(Self {
            angles: vec![0.0; lengths.len()],
            lengths: lengths.to_vec(),
            origin: Vec2::ZERO,
            joint_positions: Vec::new(),
        })
    }

    pub fn lengths(&self) -> &[f32] {
        &self.lengths
    }

    pub fn angles(&self) -> &[f32] {
        &self.angles
    }

    /// Raw mutable access to the joint angles.
    ///
    /// The position cache is not invalidated by mutation through this slice;
    /// call [`forward_kinematics`](Self::forward_kinematics) afterwards.
    pub fn angles_mut(&mut self) -> &mut [f32] {
        &mut self.angles
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn joint_count(&self) -> usize {
        self.lengths.len()
    }

    pub fn total_length(&self) -> f32 {
        self.lengths.iter().sum()
    }

    /// Cached joint positions: the origin followed by each link tip. Empty
    /// until the first forward-kinematics pass.
    pub fn joint_positions(&self) -> &[Vec2] {
        &self.joint_positions
    }

    /// Replaces all joint angles and recomputes the joint positions.
    ///
    /// Fails if `angles` does not have exactly one entry per link.
    pub fn set_angles(&mut self, angles: &[f32]) -> Result<&[Vec2], IkError> {
        if angles.len() != self.lengths.len() {
            return Err(IkError::invalid(format!(
                "expected {} joint angles, got {}",
                self.lengths.len(),
                angles.len()
            )));
        }

        self.angles.clear();
        self.angles.extend_from_slice(angles);
        Ok(self.forward_kinematics())
    }

    /// Recomputes all joint positions from the origin, accumulating angles
    /// link by link.
    pub fn forward_kinematics(&mut self) -> &[Vec2] {
        self.joint_positions.clear();
        self.joint_positions.push(self.origin);

        let mut pos = self.origin;
        let mut cumulative = 0.0f32;
        for (length, angle) in self.lengths.iter().zip(&self.angles) {
            cumulative += angle;
            pos += Vec2::new(cumulative.cos(), cumulative.sin()) * *length;
            self.joint_positions.push(pos);
        }

        &self.joint_positions
    }

    /// Position of the free tip of the last link.
    ///
    /// Runs forward kinematics if the cache has never been populated; an
    /// already-populated cache is returned as-is even if angles were mutated
    /// through [`angles_mut`](Self::angles_mut) since.
    pub fn end_effector(&mut self) -> Vec2 {
        if self.joint_positions.is_empty() {
            self.forward_kinematics();
        }
        *self.joint_positions.last().unwrap()
    }

    /// Euclidean distance from the end effector to `target`.
    pub fn distance_to(&mut self, target: Vec2) -> f32 {
        (target - self.end_effector()).length()
    }
}

pub struct ChainBuilder {
    lengths: Vec<f32>,
    origin: Vec2,
}

impl ChainBuilder {
    pub fn new() -> Self {
        Self {
            lengths: Vec::new(),
            origin: Vec2::ZERO,
        }
    }

    pub fn add_link(mut self, length: f32) -> Self {
        self.lengths.push(length);
        self
    }

    pub fn origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    pub fn build(self) -> Result<Chain, IkError> {
        let mut chain = Chain::new(&self.lengths)?;
        chain.origin = self.origin;
        Ok(chain)
    }
}

impl Default for ChainBuilder {
    fn default() -> Self {
        Self::new()
    }
}
