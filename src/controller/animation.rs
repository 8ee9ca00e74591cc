use std::collections::HashMap;

use crate::controller::{AnimationSink, FrameInput};

/// Two-state locomotion flag fed to the animator every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocomotionState {
    #[default]
    Idle,
    Walking,
}

impl LocomotionState {
    /// Walking iff either raw axis is non-zero. No hysteresis.
    pub fn from_input(input: FrameInput) -> Self {
        if input.horizontal != 0.0 || input.vertical != 0.0 {
            LocomotionState::Walking
        } else {
            LocomotionState::Idle
        }
    }

    pub fn is_walking(self) -> bool {
        self == LocomotionState::Walking
    }
}

/// Named boolean animator parameters.
#[derive(Debug, Clone, Default)]
pub struct Animator {
    bools: HashMap<String, bool>,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unset parameters read as false
    pub fn get_bool(&self, name: &str) -> bool {
        self.bools.get(name).copied().unwrap_or(false)
    }
}

impl AnimationSink for Animator {
    fn set_bool(&mut self, name: &str, value: bool) {
        let previous = self.bools.insert(name.to_string(), value);
        if previous != Some(value) {
            tracing::debug!(parameter = name, value, "animator parameter changed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walking_iff_any_axis_is_non_zero() {
        let grid = [-1.0, 0.0, 1.0];
        for h in grid {
            for v in grid {
                let state = LocomotionState::from_input(FrameInput::new(h, v));
                assert_eq!(state.is_walking(), h != 0.0 || v != 0.0, "({h}, {v})");
            }
        }
    }

    #[test]
    fn state_follows_input_every_tick() {
        let ticks = [(1.0, 0.0), (0.0, 0.0), (0.0, -1.0), (0.0, 0.0)];
        let states: Vec<_> = ticks
            .iter()
            .map(|&(h, v)| LocomotionState::from_input(FrameInput::new(h, v)))
            .collect();
        assert_eq!(
            states,
            [
                LocomotionState::Walking,
                LocomotionState::Idle,
                LocomotionState::Walking,
                LocomotionState::Idle,
            ]
        );
    }

    #[test]
    fn animator_stores_parameters() {
        let mut animator = Animator::new();
        assert!(!animator.get_bool("IsWalking"));
        animator.set_bool("IsWalking", true);
        assert!(animator.get_bool("IsWalking"));
        animator.set_bool("IsWalking", false);
        assert!(!animator.get_bool("IsWalking"));
    }
}
