// MODEL: World data the controller reads
pub mod body;
pub mod camera;
pub mod collision;
pub mod ray;

pub use body::BodyState;
pub use camera::Camera;
pub use collision::{CollisionMask, CollisionWorld, Layer, Shape, MAX_LAYERS};
pub use ray::{Ray, RayHit};
