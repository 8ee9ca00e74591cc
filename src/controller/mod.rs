// CONTROLLER: Per-tick input, movement, facing and animation state
pub mod animation;
pub mod collaborators;
pub mod input;
pub mod locomotion;
pub mod orientation;
pub mod physics;
pub mod player_controller;

pub use animation::{Animator, LocomotionState};
pub use collaborators::{AimSource, AnimationSink, AxisSource, PhysicsIntegrator, RayCaster};
pub use input::{AxisBinding, InputEvent, InputState, KeyBindings};
pub use locomotion::{displacement, FrameInput};
pub use orientation::{facing_toward, resolve_facing};
pub use physics::KinematicBody;
pub use player_controller::{PlayerController, TickCommands, TickContext};
