use glam::{Quat, Vec3};

use crate::controller::RayCaster;
use crate::model::{CollisionMask, Ray};

/// Below this horizontal distance the facing direction is undefined.
const MIN_FACING_DISTANCE_SQ: f32 = 1e-12;

/// Yaw-only rotation whose forward axis (+Z) points from `body_position`
/// toward `target` on the ground plane.
///
/// `None` when the two points share the same horizontal position.
pub fn facing_toward(body_position: Vec3, target: Vec3) -> Option<Quat> {
    let mut toward = target - body_position;
    toward.y = 0.0;
    if !toward.is_finite() || toward.length_squared() <= MIN_FACING_DISTANCE_SQ {
        return None;
    }
    Some(Quat::from_rotation_y(toward.x.atan2(toward.z)))
}

/// Cast the aim ray against `mask` and face the point it hits.
///
/// A miss or a hit right under the body leaves facing untouched (`None`).
pub fn resolve_facing<R: RayCaster + ?Sized>(
    aim_ray: &Ray,
    body_position: Vec3,
    ray_caster: &R,
    mask: CollisionMask,
    max_distance: f32,
) -> Option<Quat> {
    let Some(hit) = ray_caster.cast_ray(aim_ray, max_distance, mask) else {
        tracing::trace!("aim ray missed, keeping facing");
        return None;
    };
    let rotation = facing_toward(body_position, hit.point);
    if rotation.is_none() {
        tracing::trace!(point = ?hit.point, "aim point under body, keeping facing");
    }
    rotation
}
