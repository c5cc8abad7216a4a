//! Scripted input source.
//!
//! Stands in for a keyboard and mouse: for each loop iteration it yields the
//! player commands a person might have issued. The script is a pure function
//! of the iteration number, so runs are reproducible.

use shapestorm_core::commands::PlayerCommand;
use shapestorm_core::types::{unit_from_degrees, Vec2};

/// Iterations spent on each movement leg.
const LEG_LENGTH: u64 = 90;
/// Iterations between two shots.
const FIRE_EVERY: u64 = 12;
/// Angle step between consecutive shots, in degrees.
const FIRE_SWEEP_DEGREES: f32 = 37.0;
/// Pause window, as (start, length) in iterations.
const PAUSE_AT: (u64, u64) = (300, 30);

/// Intent per leg: right, down, left, up.
const LEGS: [(bool, bool, bool, bool); 4] = [
    (false, false, false, true),
    (false, true, false, false),
    (false, false, true, false),
    (true, false, false, false),
];

#[derive(Debug, Clone)]
pub struct ScriptedInput {
    center: Vec2,
    aim_radius: f32,
    length: u64,
}

impl ScriptedInput {
    /// A script for a play area of `play_area`, issuing `Quit` at iteration `length`.
    pub fn new(play_area: Vec2, length: u64) -> Self {
        Self {
            center: play_area / 2.0,
            aim_radius: play_area.min_element() / 2.0,
            length,
        }
    }

    pub fn length(&self) -> u64 {
        self.length
    }

    /// True once the script has nothing left to say.
    pub fn is_finished(&self, iteration: u64) -> bool {
        iteration > self.length
    }

    /// Commands for one loop iteration, in the order they should be applied.
    pub fn commands_for(&self, iteration: u64) -> Vec<PlayerCommand> {
        let mut commands = Vec::new();
        if iteration >= self.length {
            if iteration == self.length {
                commands.push(PlayerCommand::Quit);
            }
            return commands;
        }

        if iteration % LEG_LENGTH == 0 {
            let leg = (iteration / LEG_LENGTH) as usize % LEGS.len();
            let (up, down, left, right) = LEGS[leg];
            commands.push(PlayerCommand::SetIntent {
                up,
                down,
                left,
                right,
            });
        }

        if iteration % FIRE_EVERY == 0 {
            let shot = (iteration / FIRE_EVERY) as f32;
            let target = self.center + unit_from_degrees(shot * FIRE_SWEEP_DEGREES) * self.aim_radius;
            commands.push(PlayerCommand::Fire {
                x: target.x,
                y: target.y,
            });
        }

        let (pause_start, pause_len) = PAUSE_AT;
        if iteration == pause_start || iteration == pause_start + pause_len {
            commands.push(PlayerCommand::TogglePause);
        }

        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script() -> ScriptedInput {
        ScriptedInput::new(Vec2::new(1280.0, 720.0), 600)
    }

    #[test]
    fn test_first_iteration_moves_and_fires() {
        let commands = script().commands_for(0);
        assert_eq!(commands.len(), 2);
        assert!(matches!(
            commands[0],
            PlayerCommand::SetIntent { right: true, up: false, down: false, left: false }
        ));
        match commands[1] {
            PlayerCommand::Fire { x, y } => {
                assert_eq!((x, y), (640.0 + 360.0, 360.0));
            }
            ref other => panic!("expected Fire, got {other:?}"),
        }
    }

    #[test]
    fn test_legs_cycle() {
        let s = script();
        let intent_at = |i| {
            s.commands_for(i)
                .into_iter()
                .find(|c| matches!(c, PlayerCommand::SetIntent { .. }))
        };
        assert!(matches!(intent_at(90), Some(PlayerCommand::SetIntent { down: true, .. })));
        assert!(matches!(intent_at(180), Some(PlayerCommand::SetIntent { left: true, .. })));
        assert!(matches!(intent_at(270), Some(PlayerCommand::SetIntent { up: true, .. })));
        assert!(matches!(intent_at(360), Some(PlayerCommand::SetIntent { right: true, .. })));
        assert!(intent_at(91).is_none());
    }

    #[test]
    fn test_pause_window_toggles_twice() {
        let s = script();
        let toggles: Vec<u64> = (0..600)
            .filter(|&i| s.commands_for(i).contains(&PlayerCommand::TogglePause))
            .collect();
        assert_eq!(toggles, vec![300, 330]);
    }

    #[test]
    fn test_quit_once_at_end() {
        let s = script();
        assert_eq!(s.commands_for(600), vec![PlayerCommand::Quit]);
        assert!(s.commands_for(601).is_empty());
        assert!(!s.is_finished(600));
        assert!(s.is_finished(601));
    }

    #[test]
    fn test_script_is_reproducible() {
        let a: Vec<_> = (0..200).map(|i| script().commands_for(i)).collect();
        let b: Vec<_> = (0..200).map(|i| script().commands_for(i)).collect();
        assert_eq!(a, b);
    }
}
