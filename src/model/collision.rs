use glam::{Vec2, Vec3};

use crate::error::LayerError;
use crate::model::{Ray, RayHit};

/// Number of distinct collision layers a world can hold.
pub const MAX_LAYERS: usize = 32;

const PARALLEL_EPSILON: f32 = 1e-6;

/// Set of collision layers, one bit per layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CollisionMask(u32);

impl CollisionMask {
    pub fn contains(self, layer: Layer) -> bool {
        self.0 & (1u32 << layer.0) != 0
    }
}

impl From<Layer> for CollisionMask {
    fn from(layer: Layer) -> Self {
        Self(1u32 << layer.0)
    }
}

/// Index of a registered layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layer(u8);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Infinite horizontal plane at `y = height`
    Plane { height: f32 },
    /// Horizontal rectangle centered on `center`, spanning `half_extents` in x and z
    Quad { center: Vec3, half_extents: Vec2 },
    Sphere { center: Vec3, radius: f32 },
}

impl Shape {
    /// Distance along `ray` to the nearest forward intersection.
    fn intersect(&self, ray: &Ray) -> Option<(f32, Vec3)> {
        match *self {
            Shape::Plane { height } => {
                let t = horizontal_plane_t(ray, height)?;
                Some((t, facing_up_normal(ray)))
            }
            Shape::Quad { center, half_extents } => {
                let t = horizontal_plane_t(ray, center.y)?;
                let p = ray.point_at(t);
                let inside = (p.x - center.x).abs() <= half_extents.x
                    && (p.z - center.z).abs() <= half_extents.y;
                inside.then(|| (t, facing_up_normal(ray)))
            }
            Shape::Sphere { center, radius } => {
                // Quadratic in t with a unit direction: t^2 + bt + c = 0
                let oc = ray.origin - center;
                let b = 2.0 * oc.dot(ray.direction);
                let c = oc.length_squared() - radius * radius;
                let discriminant = b * b - 4.0 * c;
                if discriminant < 0.0 {
                    return None;
                }
                let sqrt_d = discriminant.sqrt();
                let t1 = (-b - sqrt_d) / 2.0;
                let t2 = (-b + sqrt_d) / 2.0;
                let t = if t1 >= 0.0 {
                    t1
                } else if t2 >= 0.0 {
                    t2 // origin inside the sphere
                } else {
                    return None;
                };
                let normal = (ray.point_at(t) - center).normalize_or_zero();
                Some((t, normal))
            }
        }
    }
}

fn horizontal_plane_t(ray: &Ray, height: f32) -> Option<f32> {
    if ray.direction.y.abs() < PARALLEL_EPSILON {
        return None;
    }
    let t = (height - ray.origin.y) / ray.direction.y;
    (t >= 0.0).then_some(t)
}

fn facing_up_normal(ray: &Ray) -> Vec3 {
    if ray.direction.y < 0.0 { Vec3::Y } else { Vec3::NEG_Y }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Collider {
    shape: Shape,
    layer: Layer,
}

/// Static collision geometry with a named layer registry.
#[derive(Debug, Clone, Default)]
pub struct CollisionWorld {
    layers: Vec<String>,
    colliders: Vec<Collider>,
}

impl CollisionWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_layer(&mut self, name: &str) -> Result<Layer, LayerError> {
        if self.layers.iter().any(|l| l == name) {
            return Err(LayerError::Duplicate(name.to_string()));
        }
        if self.layers.len() >= MAX_LAYERS {
            return Err(LayerError::TableFull { max: MAX_LAYERS });
        }
        self.layers.push(name.to_string());
        Ok(Layer((self.layers.len() - 1) as u8))
    }

    pub fn layer(&self, name: &str) -> Option<Layer> {
        self.layers
            .iter()
            .position(|l| l == name)
            .map(|idx| Layer(idx as u8))
    }

    pub fn add_collider(&mut self, shape: Shape, layer: Layer) {
        self.colliders.push(Collider { shape, layer });
    }

    /// Nearest hit within `max_distance` on a collider whose layer is in `mask`.
    pub fn raycast(&self, ray: &Ray, max_distance: f32, mask: CollisionMask) -> Option<RayHit> {
        self.colliders
            .iter()
            .filter(|c| mask.contains(c.layer))
            .filter_map(|c| c.shape.intersect(ray))
            .filter(|(t, _)| *t <= max_distance)
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(distance, normal)| RayHit {
                distance,
                point: ray.point_at(distance),
                normal,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn down_from(origin: Vec3) -> Ray {
        Ray::new(origin, Vec3::NEG_Y).unwrap()
    }

    #[test]
    fn layers_register_once() {
        let mut world = CollisionWorld::new();
        let floor = world.add_layer("Floor").unwrap();
        assert_eq!(world.layer("Floor"), Some(floor));
        assert_eq!(world.add_layer("Floor"), Err(LayerError::Duplicate("Floor".into())));
        assert_eq!(world.layer("Water"), None);
    }

    #[test]
    fn layer_table_is_bounded() {
        let mut world = CollisionWorld::new();
        for i in 0..MAX_LAYERS {
            world.add_layer(&format!("layer{i}")).unwrap();
        }
        assert_eq!(world.add_layer("extra"), Err(LayerError::TableFull { max: MAX_LAYERS }));
    }

    #[test]
    fn layer_mask_holds_only_its_layer() {
        let mut world = CollisionWorld::new();
        let a = world.add_layer("A").unwrap();
        let b = world.add_layer("B").unwrap();
        let mask = CollisionMask::from(b);
        assert!(!mask.contains(a));
        assert!(mask.contains(b));
        assert!(!CollisionMask::default().contains(a));
    }

    #[test]
    fn quad_hit_and_edges() {
        let mut world = CollisionWorld::new();
        let floor = world.add_layer("Floor").unwrap();
        world.add_collider(
            Shape::Quad { center: Vec3::ZERO, half_extents: Vec2::new(5.0, 5.0) },
            floor,
        );
        let mask = floor.into();

        let hit = world.raycast(&down_from(Vec3::new(1.0, 10.0, -2.0)), 100.0, mask).unwrap();
        assert!((hit.distance - 10.0).abs() < 1e-5);
        assert!(hit.point.abs_diff_eq(Vec3::new(1.0, 0.0, -2.0), 1e-5));
        assert_eq!(hit.normal, Vec3::Y);

        assert!(world.raycast(&down_from(Vec3::new(6.0, 10.0, 0.0)), 100.0, mask).is_none());
    }

    #[test]
    fn respects_max_distance() {
        let mut world = CollisionWorld::new();
        let floor = world.add_layer("Floor").unwrap();
        world.add_collider(Shape::Plane { height: 0.0 }, floor);
        let ray = down_from(Vec3::new(0.0, 50.0, 0.0));
        assert!(world.raycast(&ray, 49.0, floor.into()).is_none());
        assert!(world.raycast(&ray, 50.0, floor.into()).is_some());
    }

    #[test]
    fn parallel_and_backward_rays_miss_the_plane() {
        let mut world = CollisionWorld::new();
        let floor = world.add_layer("Floor").unwrap();
        world.add_collider(Shape::Plane { height: 0.0 }, floor);

        let flat = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::X).unwrap();
        assert!(world.raycast(&flat, 100.0, floor.into()).is_none());

        let up = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::Y).unwrap();
        assert!(world.raycast(&up, 100.0, floor.into()).is_none());
    }

    #[test]
    fn mask_filters_out_other_layers() {
        let mut world = CollisionWorld::new();
        let floor = world.add_layer("Floor").unwrap();
        let props = world.add_layer("Props").unwrap();
        world.add_collider(Shape::Sphere { center: Vec3::new(0.0, 2.0, 0.0), radius: 1.0 }, props);
        world.add_collider(Shape::Plane { height: 0.0 }, floor);
        let ray = down_from(Vec3::new(0.0, 10.0, 0.0));

        // The sphere is nearer, but only the floor is in the mask
        let hit = world.raycast(&ray, 100.0, floor.into()).unwrap();
        assert!((hit.point.y).abs() < 1e-5);

        let hit = world.raycast(&ray, 100.0, props.into()).unwrap();
        assert!((hit.distance - 7.0).abs() < 1e-4);
        assert!(hit.normal.abs_diff_eq(Vec3::Y, 1e-4));

        assert!(world.raycast(&ray, 100.0, CollisionMask::default()).is_none());
    }
}
