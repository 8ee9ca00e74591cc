use glam::{Quat, Vec3};

use crate::controller::PhysicsIntegrator;
use crate::model::BodyState;

/// Minimal kinematic integrator.
///
/// `move_to` and `set_rotation` only queue commands; the pose changes in
/// [`KinematicBody::step`]. Within one tick the last command of each kind wins.
#[derive(Debug, Clone, Default)]
pub struct KinematicBody {
    state: BodyState,
    pending_position: Option<Vec3>,
    pending_rotation: Option<Quat>,
    bounds: Option<(Vec3, Vec3)>,
}

impl KinematicBody {
    pub fn new(state: BodyState) -> Self {
        Self { state, ..Default::default() }
    }

    /// Clamp positions to an axis-aligned box
    pub fn with_bounds(mut self, min: Vec3, max: Vec3) -> Self {
        self.bounds = Some((min.min(max), min.max(max)));
        self
    }

    pub fn state(&self) -> BodyState {
        self.state
    }

    /// Apply queued commands.
    pub fn step(&mut self) {
        if let Some(target) = self.pending_position.take() {
            self.state.position = match self.bounds {
                Some((min, max)) => target.clamp(min, max),
                None => target,
            };
        }
        if let Some(rotation) = self.pending_rotation.take() {
            self.state.rotation = rotation.normalize();
        }
    }
}

impl PhysicsIntegrator for KinematicBody {
    fn position(&self) -> Vec3 {
        self.state.position
    }

    fn move_to(&mut self, target: Vec3) {
        self.pending_position = Some(target);
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.pending_rotation = Some(rotation);
    }
}
