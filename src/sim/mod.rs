mod movement;

pub use movement::{InputCmd, TURN_RATE, apply_input};
