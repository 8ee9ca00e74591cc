use std::env;
use std::str::FromStr;

use crate::error::ConfigError;

pub const DEFAULT_MOVE_SPEED: f32 = 6.0;
pub const DEFAULT_CAM_RAY_LENGTH: f32 = 100.0;
pub const DEFAULT_FLOOR_LAYER: &str = "Floor";
pub const DEFAULT_WALKING_STATE: &str = "IsWalking";

/// Tunables for a [`PlayerController`](crate::controller::PlayerController).
///
/// Fixed once the controller is initialized.
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerConfig {
    /// Ground speed in units per second
    pub move_speed: f32,
    /// Max distance of the aim ray cast from the camera
    pub cam_ray_length: f32,
    /// Collision layer the aim ray may hit
    pub floor_layer: String,
    /// Animator bool parameter receiving the walking flag
    pub walking_state: String,
    pub horizontal_axis: String,
    pub vertical_axis: String,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            move_speed: DEFAULT_MOVE_SPEED,
            cam_ray_length: DEFAULT_CAM_RAY_LENGTH,
            floor_layer: DEFAULT_FLOOR_LAYER.to_string(),
            walking_state: DEFAULT_WALKING_STATE.to_string(),
            horizontal_axis: "Horizontal".to_string(),
            vertical_axis: "Vertical".to_string(),
        }
    }
}

impl ControllerConfig {
    /// Defaults overlaid with `PLAYER_MOVE_SPEED`, `PLAYER_CAM_RAY_LENGTH`
    /// and `PLAYER_FLOOR_LAYER`. The result is validated.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(speed) = parse_var(&lookup, "PLAYER_MOVE_SPEED")? {
            config.move_speed = speed;
        }
        if let Some(length) = parse_var(&lookup, "PLAYER_CAM_RAY_LENGTH")? {
            config.cam_ray_length = length;
        }
        if let Some(layer) = lookup("PLAYER_FLOOR_LAYER") {
            let layer = layer.trim();
            if layer.is_empty() {
                return Err(ConfigError::InvalidEnv {
                    name: "PLAYER_FLOOR_LAYER",
                    value: layer.to_string(),
                });
            }
            config.floor_layer = layer.to_string();
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.move_speed.is_finite() && self.move_speed > 0.0) {
            return Err(ConfigError::InvalidMoveSpeed(self.move_speed));
        }
        if !(self.cam_ray_length.is_finite() && self.cam_ray_length > 0.0) {
            return Err(ConfigError::InvalidRayLength(self.cam_ray_length));
        }
        Ok(())
    }
}

fn parse_var<F, T>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnv { name, value: raw }),
    }
}
