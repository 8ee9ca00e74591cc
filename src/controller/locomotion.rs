use glam::Vec3;

use crate::controller::AxisSource;

/// Raw axis values for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    pub horizontal: f32,
    pub vertical: f32,
}

impl FrameInput {
    pub const IDLE: Self = Self { horizontal: 0.0, vertical: 0.0 };

    /// Clamps to [-1, 1]; non-finite values read as 0.
    pub fn new(horizontal: f32, vertical: f32) -> Self {
        Self {
            horizontal: sanitize_axis(horizontal),
            vertical: sanitize_axis(vertical),
        }
    }

    pub fn sample<A: AxisSource + ?Sized>(source: &A, horizontal: &str, vertical: &str) -> Self {
        Self::new(source.sample_axis(horizontal), source.sample_axis(vertical))
    }

    pub fn is_idle(&self) -> bool {
        self.horizontal == 0.0 && self.vertical == 0.0
    }
}

fn sanitize_axis(value: f32) -> f32 {
    if value.is_finite() { value.clamp(-1.0, 1.0) } else { 0.0 }
}

/// Ground-plane displacement for one tick.
///
/// Input maps to `(h, 0, v)`, normalized so diagonals are no faster than
/// straight lines, then scaled by `move_speed * dt`. Returns `None` when
/// there is nothing to move: idle input or a non-positive `dt`.
pub fn displacement(input: FrameInput, move_speed: f32, dt: f32) -> Option<Vec3> {
    if !(dt.is_finite() && dt > 0.0) {
        tracing::debug!(dt, "skipping movement for non-positive tick duration");
        return None;
    }
    // Checked up front so normalize never sees a zero vector
    if input.is_idle() {
        return None;
    }
    let direction = Vec3::new(input.horizontal, 0.0, input.vertical).normalize();
    Some(direction * move_speed * dt)
}
