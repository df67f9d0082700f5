//! Chamber - Headless Demo Driver
//!
//! Runs a scripted session through the deterministic chamber simulation
//! and logs what a renderer would draw each frame. Run with
//! `RUST_LOG=info` (or `debug` for per-event detail).

use chamber_game::{
    FrameInput, HeldActions, InputEvent, MarkerColor, MovementInput, Simulation,
};

/// One segment of the scripted session: a run of ticks with the same held
/// keys, plus one-shot events delivered on the segment's first tick.
struct ScriptStep {
    name: &'static str,
    ticks: u32,
    forward: bool,
    sprint: bool,
    jump: bool,
    /// Mouse motion applied on every tick of the segment (pixels).
    mouse_delta: (f32, f32),
    events: Vec<InputEvent>,
}

impl ScriptStep {
    fn hold(name: &'static str, ticks: u32) -> Self {
        Self {
            name,
            ticks,
            forward: false,
            sprint: false,
            jump: false,
            mouse_delta: (0.0, 0.0),
            events: Vec::new(),
        }
    }

    fn input(&self, first_tick: bool) -> FrameInput {
        FrameInput {
            movement: MovementInput {
                forward: self.forward,
                ..Default::default()
            },
            held: HeldActions {
                jump: self.jump,
                sprint: self.sprint,
            },
            mouse_delta: self.mouse_delta,
            events: if first_tick {
                self.events.clone()
            } else {
                Vec::new()
            },
        }
    }
}

fn script() -> Vec<ScriptStep> {
    // Half a turn spread over 30 ticks at the default sensitivity.
    let half_turn_px = std::f32::consts::PI / 0.002 / 30.0;

    vec![
        ScriptStep::hold("settle onto the floor", 120),
        ScriptStep {
            forward: true,
            ..ScriptStep::hold("walk toward the far wall", 180)
        },
        ScriptStep {
            forward: true,
            sprint: true,
            ..ScriptStep::hold("sprint the rest of the way", 240)
        },
        ScriptStep {
            forward: true,
            jump: true,
            ..ScriptStep::hold("jump against the wall", 90)
        },
        ScriptStep {
            events: vec![InputEvent::Fire, InputEvent::PlaceMarker(MarkerColor::Blue)],
            ..ScriptStep::hold("shoot and mark the wall", 30)
        },
        ScriptStep {
            mouse_delta: (half_turn_px, 0.0),
            ..ScriptStep::hold("turn around", 30)
        },
        ScriptStep {
            events: vec![InputEvent::PlaceMarker(MarkerColor::Orange)],
            ..ScriptStep::hold("mark the opposite wall", 30)
        },
        ScriptStep {
            events: vec![
                InputEvent::Fire,
                InputEvent::Fire,
                InputEvent::Fire,
                InputEvent::Reload,
            ],
            ..ScriptStep::hold("empty a few rounds and reload", 60)
        },
    ]
}

fn main() {
    env_logger::init();

    let mut sim = Simulation::standard().expect("standard room geometry is valid");

    log::info!(
        "chamber up: {}x{} room, spawn at {}",
        sim.room.config.size,
        sim.room.config.size,
        sim.room.config.spawn_position
    );

    let mut total_decals = 0usize;
    for step in script() {
        let mut last = None;
        for tick in 0..step.ticks {
            let output = sim.tick(&step.input(tick == 0));
            total_decals += output.new_decals.len();
            last = Some(output);
        }

        if let Some(output) = last {
            log::info!(
                "{}: frame={} pos=({:.2}, {:.2}, {:.2}) yaw={:.2} grounded={} ammo={}",
                step.name,
                output.frame,
                output.position.x,
                output.position.y,
                output.position.z,
                output.yaw,
                output.grounded,
                output.ammo
            );
        }
    }

    let blue = sim.interaction.marker(MarkerColor::Blue);
    let orange = sim.interaction.marker(MarkerColor::Orange);
    log::info!(
        "session over: {:.0}s simulated, {} decals stuck, blue marker at {}, orange at {}",
        sim.frame as f32 * sim.delta_time(),
        total_decals,
        blue.position,
        orange.position
    );
}
