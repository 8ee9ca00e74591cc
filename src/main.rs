use std::process::ExitCode;

use glam::{Vec2, Vec3};

use topdown_controller::{
    controller::{Animator, InputEvent, InputState, KinematicBody},
    logging,
    model::{BodyState, Camera, CollisionWorld, Shape},
    ControllerConfig, PlayerController,
};

const TICK_RATE: u32 = 50;
const FLOOR_HALF_SIZE: f32 = 30.0;

/// One scripted input change: at `tick`, apply `events`.
struct Cue {
    tick: u32,
    events: Vec<InputEvent>,
}

fn key_down(key: &str) -> InputEvent {
    InputEvent::KeyDown(key.to_string())
}

fn key_up(key: &str) -> InputEvent {
    InputEvent::KeyUp(key.to_string())
}

fn script() -> Vec<Cue> {
    vec![
        Cue { tick: 0, events: vec![InputEvent::PointerMove { x: 640.0, y: 200.0 }, key_down("w")] },
        Cue { tick: 50, events: vec![key_down("d")] },
        Cue { tick: 100, events: vec![key_up("w"), InputEvent::PointerMove { x: 1100.0, y: 400.0 }] },
        Cue { tick: 150, events: vec![key_up("d")] },
        // Aim at the sky: facing should hold
        Cue { tick: 175, events: vec![InputEvent::PointerMove { x: 640.0, y: -2000.0 }] },
        Cue { tick: 200, events: vec![key_down("ArrowLeft"), key_down("ArrowDown")] },
        Cue { tick: 250, events: vec![InputEvent::FocusLost] },
    ]
}

struct App {
    player: PlayerController,
    world: CollisionWorld,
    camera: Camera,
    input: InputState,
    body: KinematicBody,
    animator: Animator,
    camera_offset: Vec3,
}

impl App {
    fn new(config: ControllerConfig) -> Result<Self, topdown_controller::ConfigError> {
        let mut world = CollisionWorld::new();
        match world.add_layer(&config.floor_layer) {
            Ok(floor) => world.add_collider(
                Shape::Quad {
                    center: Vec3::ZERO,
                    half_extents: Vec2::splat(FLOOR_HALF_SIZE),
                },
                floor,
            ),
            Err(e) => tracing::warn!("floor layer not added: {e}"),
        }

        let player = PlayerController::initialize(config, &world)?;

        let camera_offset = Vec3::new(0.0, 15.0, -10.0);
        let mut camera = Camera::new(1280, 720);
        camera.eye = camera_offset;
        camera.set_look_at(Vec3::ZERO);

        let bound = Vec3::new(FLOOR_HALF_SIZE, 0.0, FLOOR_HALF_SIZE);
        let body = KinematicBody::new(BodyState::default()).with_bounds(-bound, bound);

        Ok(Self {
            player,
            world,
            camera,
            input: InputState::default(),
            body,
            animator: Animator::new(),
            camera_offset,
        })
    }

    fn update(&mut self, dt: f32) {
        let commands = self.player.fixed_update(
            &self.input,
            &self.camera,
            self.input.pointer,
            &self.world,
            &mut self.body,
            &mut self.animator,
            dt,
        );
        self.body.step();

        // Camera trails the body at a fixed offset
        self.camera.eye = self.body.state().position + self.camera_offset;

        tracing::trace!(?commands, "tick");
    }
}

fn main() -> ExitCode {
    logging::init();

    let config = match ControllerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };
    let mut app = match App::new(config) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!("controller refused to start: {e}");
            return ExitCode::FAILURE;
        }
    };

    let dt = 1.0 / TICK_RATE as f32;
    let cues = script();
    let total_ticks = 300;

    for tick in 0..total_ticks {
        for cue in cues.iter().filter(|c| c.tick == tick) {
            for event in &cue.events {
                app.input.process_event(event);
            }
        }

        app.update(dt);

        if tick % TICK_RATE == TICK_RATE - 1 {
            let state = app.body.state();
            tracing::info!(
                second = (tick + 1) / TICK_RATE,
                position = %state.position,
                yaw_deg = state.yaw().to_degrees(),
                walking = app.animator.get_bool(&app.player.config().walking_state),
                "body"
            );
        }
    }

    ExitCode::SUCCESS
}
