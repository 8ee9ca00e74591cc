//! Platform-agnostic keyboard/pointer state exposed as raw axes
use std::collections::HashSet;

use glam::Vec2;

use crate::controller::AxisSource;

/// Platform-independent input events
#[derive(Debug, Clone)]
pub enum InputEvent {
    KeyDown(String),
    KeyUp(String),
    /// Absolute pointer position in viewport pixels
    PointerMove { x: f32, y: f32 },
    FocusLost,
    VisibilityChanged { visible: bool },
}

/// A named axis driven by two sets of keys.
#[derive(Debug, Clone)]
pub struct AxisBinding {
    pub name: String,
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

impl AxisBinding {
    pub fn new(name: &str, positive: &[&str], negative: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            positive: positive.iter().map(|k| k.to_ascii_lowercase()).collect(),
            negative: negative.iter().map(|k| k.to_ascii_lowercase()).collect(),
        }
    }
}

/// Key mapping configuration
#[derive(Debug, Clone)]
pub struct KeyBindings {
    pub axes: Vec<AxisBinding>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            axes: vec![
                AxisBinding::new("Horizontal", &["d", "ArrowRight"], &["a", "ArrowLeft"]),
                AxisBinding::new("Vertical", &["w", "ArrowUp"], &["s", "ArrowDown"]),
            ],
        }
    }
}

/// Pressed keys and pointer position, updated from [`InputEvent`]s.
#[derive(Debug, Clone)]
pub struct InputState {
    pressed_keys: HashSet<String>,
    pub pointer: Vec2,
    bindings: KeyBindings,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new(KeyBindings::default())
    }
}

impl InputState {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            pressed_keys: HashSet::new(),
            pointer: Vec2::ZERO,
            bindings,
        }
    }

    pub fn process_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown(key) => {
                self.pressed_keys.insert(key.to_ascii_lowercase());
            }
            InputEvent::KeyUp(key) => {
                self.pressed_keys.remove(&key.to_ascii_lowercase());
            }
            InputEvent::PointerMove { x, y } => {
                self.pointer = Vec2::new(*x, *y);
            }
            InputEvent::FocusLost | InputEvent::VisibilityChanged { visible: false } => {
                self.clear_keys();
            }
            InputEvent::VisibilityChanged { visible: true } => {}
        }
    }

    fn clear_keys(&mut self) {
        self.pressed_keys.clear();
    }

    fn any_pressed(&self, keys: &[String]) -> bool {
        keys.iter().any(|k| self.pressed_keys.contains(k))
    }
}

impl AxisSource for InputState {
    fn sample_axis(&self, name: &str) -> f32 {
        let Some(axis) = self.bindings.axes.iter().find(|a| a.name.eq_ignore_ascii_case(name)) else {
            tracing::trace!(axis = name, "unbound axis sampled");
            return 0.0;
        };
        // Opposite keys cancel out
        let positive = self.any_pressed(&axis.positive) as i8;
        let negative = self.any_pressed(&axis.negative) as i8;
        f32::from(positive - negative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(state: &mut InputState, key: &str) {
        state.process_event(&InputEvent::KeyDown(key.to_string()));
    }

    #[test]
    fn keys_map_to_raw_axes() {
        let mut input = InputState::default();
        assert_eq!(input.sample_axis("Horizontal"), 0.0);

        press(&mut input, "D");
        assert_eq!(input.sample_axis("Horizontal"), 1.0);
        assert_eq!(input.sample_axis("Vertical"), 0.0);

        press(&mut input, "ArrowDown");
        assert_eq!(input.sample_axis("vertical"), -1.0);

        input.process_event(&InputEvent::KeyUp("d".to_string()));
        assert_eq!(input.sample_axis("Horizontal"), 0.0);
    }

    #[test]
    fn opposite_keys_cancel() {
        let mut input = InputState::default();
        press(&mut input, "a");
        press(&mut input, "d");
        assert_eq!(input.sample_axis("Horizontal"), 0.0);
    }

    #[test]
    fn focus_loss_releases_keys() {
        let mut input = InputState::default();
        press(&mut input, "w");
        input.process_event(&InputEvent::FocusLost);
        assert_eq!(input.sample_axis("Vertical"), 0.0);
        assert!(input.pressed_keys.is_empty());
    }

    #[test]
    fn pointer_tracks_last_position() {
        let mut input = InputState::default();
        input.process_event(&InputEvent::PointerMove { x: 12.0, y: 34.0 });
        assert_eq!(input.pointer, Vec2::new(12.0, 34.0));
    }

    #[test]
    fn unknown_axis_reads_zero() {
        let mut input = InputState::default();
        press(&mut input, "w");
        assert_eq!(input.sample_axis("Jump"), 0.0);
    }
}
