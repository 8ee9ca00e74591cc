//! Seams between the controller and the systems around it.
//!
//! The controller never talks to an engine directly. Each tick it reads from
//! an [`AxisSource`], an [`AimSource`] and a [`RayCaster`], and hands its
//! results to a [`PhysicsIntegrator`] and an [`AnimationSink`].

use glam::{Quat, Vec2, Vec3};

use crate::model::{Camera, CollisionMask, CollisionWorld, Ray, RayHit};

/// Raw input axes, sampled once per tick.
pub trait AxisSource {
    /// Raw value of a named axis: -1, 0 or 1. Unknown axes read as 0.
    fn sample_axis(&self, name: &str) -> f32;
}

/// Where the aim ray starts and what it passes through.
pub trait AimSource {
    fn observation_point(&self) -> Vec3;

    /// World position under a 2D aim position (e.g. the pointer in pixels)
    fn aim_point(&self, aim: Vec2) -> Option<Vec3>;

    /// Ray from the observation point through the aim point.
    fn aim_ray(&self, aim: Vec2) -> Option<Ray> {
        Ray::between(self.observation_point(), self.aim_point(aim)?)
    }
}

/// Ray intersection service with a named layer registry.
pub trait RayCaster {
    fn layer_mask(&self, name: &str) -> Option<CollisionMask>;

    fn cast_ray(&self, ray: &Ray, max_distance: f32, mask: CollisionMask) -> Option<RayHit>;
}

/// Sole writer of the body's pose. Commands take effect in its own step.
pub trait PhysicsIntegrator {
    fn position(&self) -> Vec3;

    fn move_to(&mut self, target: Vec3);

    /// Absolute rotation, not an offset.
    fn set_rotation(&mut self, rotation: Quat);
}

pub trait AnimationSink {
    fn set_bool(&mut self, name: &str, value: bool);
}

impl AimSource for Camera {
    fn observation_point(&self) -> Vec3 {
        self.eye
    }

    fn aim_point(&self, aim: Vec2) -> Option<Vec3> {
        self.screen_point_to_ray(aim).map(|ray| ray.origin)
    }
}

impl RayCaster for CollisionWorld {
    fn layer_mask(&self, name: &str) -> Option<CollisionMask> {
        self.layer(name).map(CollisionMask::from)
    }

    fn cast_ray(&self, ray: &Ray, max_distance: f32, mask: CollisionMask) -> Option<RayHit> {
        self.raycast(ray, max_distance, mask)
    }
}
