use glam::{Mat4, Vec2, Vec3};

use crate::model::Ray;

/// Slightly less than π/2 so look_at stays defined
const PITCH_LIMIT: f32 = 1.5533;

/// Perspective observation camera. The aim ray is cast from here.
#[derive(Debug, Clone)]
pub struct Camera {
    pub eye: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub up: Vec3,
    pub fov_y: f32,
    /// Viewport size in pixels
    pub viewport: Vec2,
    pub z_near: f32,
    pub z_far: f32,
}

impl Camera {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            eye: Vec3::new(0.0, 15.0, -10.0),
            yaw: 0.0,
            pitch: 0.0,
            up: Vec3::Y,
            fov_y: 60f32.to_radians(),
            viewport: Vec2::new(width.max(1) as f32, height.max(1) as f32),
            z_near: 0.3,
            z_far: 1000.0,
        }
    }

    pub fn forward(&self) -> Vec3 {
        let cy = self.yaw;
        let cp = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        Vec3::new(cy.cos() * cp.cos(), cp.sin(), cy.sin() * cp.cos()).normalize()
    }

    pub fn target(&self) -> Vec3 { self.eye + self.forward() }

    pub fn aspect(&self) -> f32 { self.viewport.x / self.viewport.y }

    pub fn view_proj(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, self.target(), self.up);
        let proj = Mat4::perspective_rh(self.fov_y, self.aspect(), self.z_near, self.z_far);
        proj * view
    }

    pub fn set_look_at(&mut self, target: Vec3) {
        let Some(dir) = (target - self.eye).try_normalize() else {
            return;
        };
        self.yaw = dir.z.atan2(dir.x);
        self.pitch = dir.y.asin().clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Ray from the near plane through a pixel. `pointer` is in pixels with
    /// the origin at the top-left corner of the viewport.
    pub fn screen_point_to_ray(&self, pointer: Vec2) -> Option<Ray> {
        let ndc = Vec2::new(
            2.0 * pointer.x / self.viewport.x - 1.0,
            1.0 - 2.0 * pointer.y / self.viewport.y,
        );
        let inv = self.view_proj().inverse();
        // perspective_rh maps depth to [0, 1]
        let near = inv.project_point3(ndc.extend(0.0));
        let far = inv.project_point3(ndc.extend(1.0));
        if !(near.is_finite() && far.is_finite()) {
            return None;
        }
        Ray::new(near, far - near)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera_looking_down() -> Camera {
        let mut cam = Camera::new(800, 600);
        cam.eye = Vec3::new(0.0, 10.0, -10.0);
        cam.set_look_at(Vec3::ZERO);
        cam
    }

    #[test]
    fn look_at_points_forward_at_target() {
        let cam = camera_looking_down();
        let expected = (Vec3::ZERO - cam.eye).normalize();
        assert!(cam.forward().abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn center_pixel_ray_follows_forward() {
        let cam = camera_looking_down();
        let ray = cam.screen_point_to_ray(cam.viewport * 0.5).unwrap();
        assert!(ray.direction.abs_diff_eq(cam.forward(), 1e-4));
        // Origin sits on the near plane in front of the eye
        let along = (ray.origin - cam.eye).dot(cam.forward());
        assert!((along - cam.z_near).abs() < 1e-3);
    }

    #[test]
    fn pixel_offsets_bend_the_ray() {
        let cam = camera_looking_down();
        let center = cam.screen_point_to_ray(cam.viewport * 0.5).unwrap();

        let screen_right = cam.forward().cross(cam.up);
        let right = cam.screen_point_to_ray(Vec2::new(700.0, 300.0)).unwrap();
        assert!(right.direction.dot(screen_right) > 0.0);

        // Screen y grows downward
        let top = cam.screen_point_to_ray(Vec2::new(400.0, 50.0)).unwrap();
        assert!(top.direction.y > center.direction.y);
    }

    #[test]
    fn steep_camera_center_ray_lands_on_target() {
        let mut cam = Camera::new(800, 600);
        cam.eye = Vec3::new(0.0, 20.0, -1.0);
        cam.set_look_at(Vec3::ZERO);

        let ray = cam.screen_point_to_ray(cam.viewport * 0.5).unwrap();
        let t = -ray.origin.y / ray.direction.y;
        let ground = ray.point_at(t);
        assert!(ground.abs_diff_eq(Vec3::ZERO, 1e-2), "center ray hit {ground}");
    }
}
