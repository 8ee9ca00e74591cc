use glam::{Quat, Vec2, Vec3};

use crate::config::ControllerConfig;
use crate::controller::{
    displacement, resolve_facing, AimSource, AnimationSink, AxisSource, FrameInput,
    LocomotionState, PhysicsIntegrator, RayCaster,
};
use crate::error::ConfigError;
use crate::model::{CollisionMask, Ray};

/// Everything one tick reads.
pub struct TickContext<'a, R: ?Sized> {
    pub input: FrameInput,
    /// `None` when no aim ray could be built this tick
    pub aim_ray: Option<Ray>,
    pub body_position: Vec3,
    pub ray_caster: &'a R,
    pub dt: f32,
}

/// Intents produced by one tick, applied by the integrator and animator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickCommands {
    /// Offset from the current position; `None` means stay put
    pub displacement: Option<Vec3>,
    /// Absolute facing; `None` means keep the previous one
    pub rotation: Option<Quat>,
    pub walking: bool,
}

/// Top-down character controller: raw-axis movement, aim-driven facing and
/// a walking flag for the animator.
#[derive(Debug, Clone)]
pub struct PlayerController {
    config: ControllerConfig,
    floor_mask: CollisionMask,
}

impl PlayerController {
    /// Validate `config` and resolve the floor layer once.
    pub fn initialize<R: RayCaster + ?Sized>(
        config: ControllerConfig,
        ray_caster: &R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let floor_mask = ray_caster
            .layer_mask(&config.floor_layer)
            .ok_or_else(|| ConfigError::UnknownLayer(config.floor_layer.clone()))?;

        tracing::info!(
            move_speed = config.move_speed,
            cam_ray_length = config.cam_ray_length,
            floor_layer = %config.floor_layer,
            "player controller initialized"
        );
        Ok(Self { config, floor_mask })
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn sample_input<A: AxisSource + ?Sized>(&self, axes: &A) -> FrameInput {
        FrameInput::sample(axes, &self.config.horizontal_axis, &self.config.vertical_axis)
    }

    /// Compute this tick's commands without touching any collaborator state.
    pub fn tick<R: RayCaster + ?Sized>(&self, ctx: &TickContext<'_, R>) -> TickCommands {
        let displacement = displacement(ctx.input, self.config.move_speed, ctx.dt);

        let rotation = ctx.aim_ray.as_ref().and_then(|ray| {
            resolve_facing(
                ray,
                ctx.body_position,
                ctx.ray_caster,
                self.floor_mask,
                self.config.cam_ray_length,
            )
        });

        let walking = LocomotionState::from_input(ctx.input).is_walking();

        TickCommands { displacement, rotation, walking }
    }

    /// Hand commands to the integrator (move, then rotate) and the animator.
    pub fn apply<P, S>(&self, commands: &TickCommands, body: &mut P, animator: &mut S)
    where
        P: PhysicsIntegrator + ?Sized,
        S: AnimationSink + ?Sized,
    {
        if let Some(d) = commands.displacement {
            let target = body.position() + d;
            body.move_to(target);
        }
        if let Some(rotation) = commands.rotation {
            body.set_rotation(rotation);
        }
        animator.set_bool(&self.config.walking_state, commands.walking);
    }

    /// One full fixed-step update: sample, tick, apply.
    #[allow(clippy::too_many_arguments)]
    pub fn fixed_update<A, M, R, P, S>(
        &self,
        axes: &A,
        aim: &M,
        pointer: Vec2,
        ray_caster: &R,
        body: &mut P,
        animator: &mut S,
        dt: f32,
    ) -> TickCommands
    where
        A: AxisSource + ?Sized,
        M: AimSource + ?Sized,
        R: RayCaster + ?Sized,
        P: PhysicsIntegrator + ?Sized,
        S: AnimationSink + ?Sized,
    {
        let ctx = TickContext {
            input: self.sample_input(axes),
            aim_ray: aim.aim_ray(pointer),
            body_position: body.position(),
            ray_caster,
            dt,
        };
        let commands = self.tick(&ctx);
        self.apply(&commands, body, animator);
        commands
    }
}
