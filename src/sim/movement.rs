use crate::world::{GridMap, Pose};

/// Radians per second at full turn input.
pub const TURN_RATE: f32 = 2.5;

/// One frame of player intent, built by the input layer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputCmd {
    pub forward: f32, // –1 … +1  (back / ahead)
    pub turn: f32,    // –1 … +1  (left / right)
}

/// Integrate `cmd` over `dt` seconds.
///
/// Turning is unconditional.  A move whose destination is blocked (wall or
/// outside the map) is dropped as a whole; the player does not slide.
pub fn apply_input(pose: &mut Pose, cmd: InputCmd, map: &GridMap, speed: f32, dt: f32) {
    pose.rotation += cmd.turn.clamp(-1.0, 1.0) * TURN_RATE * dt;

    let step = cmd.forward.clamp(-1.0, 1.0) * speed * dt;
    if step == 0.0 {
        return;
    }
    let next = pose.pos + pose.forward() * step;
    if !map.is_blocking(next) {
        pose.pos = next;
    }
}
