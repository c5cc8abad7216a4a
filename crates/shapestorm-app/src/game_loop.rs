//! Frame loop: drives the simulation engine at the configured frame rate.
//!
//! Each iteration queues that iteration's scripted commands, ticks the
//! engine once and sleeps until the next frame is due.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use shapestorm_core::enums::Tag;
use shapestorm_core::state::FrameSnapshot;
use shapestorm_sim::SimulationEngine;

use crate::input::ScriptedInput;

/// Loop settings taken from the command line and config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopOptions {
    /// Frames per second; 0 runs as fast as possible.
    pub frame_limit: u32,
    /// Stop after this many iterations even if the script is not done.
    pub max_frames: Option<u64>,
    /// Log the HUD line every this many iterations; 0 disables it.
    pub hud_every: u64,
}

impl Default for LoopOptions {
    fn default() -> Self {
        Self {
            frame_limit: 60,
            max_frames: None,
            hud_every: 60,
        }
    }
}

/// How a run ended.
#[derive(Debug, Clone)]
pub struct LoopSummary {
    pub iterations: u64,
    pub last_snapshot: FrameSnapshot,
}

/// Nominal duration of one frame, or `None` when unthrottled.
pub fn frame_duration(frame_limit: u32) -> Option<Duration> {
    (frame_limit > 0).then(|| Duration::from_nanos(1_000_000_000 / u64::from(frame_limit)))
}

/// Run until the engine quits, the script ends or `max_frames` is reached.
pub fn run(
    engine: &mut SimulationEngine,
    script: &ScriptedInput,
    options: LoopOptions,
) -> LoopSummary {
    let tick_duration = frame_duration(options.frame_limit);
    let mut next_tick_time = Instant::now();
    let mut last_snapshot = engine.snapshot();
    let mut iterations = 0;

    while engine.is_running()
        && !script.is_finished(iterations)
        && options.max_frames.map_or(true, |max| iterations < max)
    {
        // 1. Input for this frame, applied after the simulation passes
        engine.queue_commands(script.commands_for(iterations));

        // 2. Advance one frame
        last_snapshot = engine.tick();

        if options.hud_every > 0 && iterations % options.hud_every == 0 {
            info!(
                frame = last_snapshot.frame,
                enemies = last_snapshot.count(Tag::Enemy),
                fragments = last_snapshot.count(Tag::SmallEnemy),
                bullets = last_snapshot.count(Tag::Bullet),
                paused = last_snapshot.paused,
                "{}",
                engine.hud_text()
            );
        }
        iterations += 1;

        // 3. Sleep until the next frame is due
        let Some(tick_duration) = tick_duration else {
            continue;
        };
        next_tick_time += tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > tick_duration * 2 {
            // Too far behind, reset to avoid a catch-up spiral
            debug!(iterations, "frame loop fell behind, resetting schedule");
            next_tick_time = now;
        }
    }

    info!(
        iterations,
        frame = last_snapshot.frame,
        score = last_snapshot.score,
        "frame loop finished"
    );
    LoopSummary {
        iterations,
        last_snapshot,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapestorm_core::commands::PlayerCommand;
    use shapestorm_core::config::GameConfig;
    use shapestorm_sim::SimConfig;

    fn engine() -> SimulationEngine {
        SimulationEngine::new(SimConfig::default()).unwrap()
    }

    fn unthrottled(max_frames: Option<u64>) -> LoopOptions {
        LoopOptions {
            frame_limit: 0,
            max_frames,
            hud_every: 0,
        }
    }

    #[test]
    fn test_frame_duration() {
        // 60Hz = 16.666ms per frame
        assert_eq!(
            frame_duration(60),
            Some(Duration::from_nanos(1_000_000_000 / 60))
        );
        assert_eq!(frame_duration(0), None);
    }

    #[test]
    fn test_runs_until_script_quits() {
        let mut engine = engine();
        let script = ScriptedInput::new(GameConfig::default().play_area(), 120);
        let summary = run(&mut engine, &script, unthrottled(None));

        assert_eq!(summary.iterations, 121, "quit is applied on the last iteration");
        assert!(!engine.is_running());
        assert_eq!(summary.last_snapshot.frame, 121);
    }

    #[test]
    fn test_max_frames_caps_run() {
        let mut engine = engine();
        let script = ScriptedInput::new(GameConfig::default().play_area(), 1_000);
        let summary = run(&mut engine, &script, unthrottled(Some(25)));

        assert_eq!(summary.iterations, 25);
        assert!(engine.is_running());
        assert_eq!(summary.last_snapshot.frame, 25);
    }

    #[test]
    fn test_stopped_engine_does_not_tick() {
        let mut engine = engine();
        engine.queue_command(PlayerCommand::Quit);
        engine.tick();

        let script = ScriptedInput::new(GameConfig::default().play_area(), 50);
        let summary = run(&mut engine, &script, unthrottled(None));
        assert_eq!(summary.iterations, 0);
        assert_eq!(summary.last_snapshot.frame, 1);
    }

    #[test]
    fn test_scripted_pause_holds_frame_counter() {
        let mut engine = engine();
        let script = ScriptedInput::new(GameConfig::default().play_area(), 400);
        let summary = run(&mut engine, &script, unthrottled(Some(320)));

        // Toggled at iteration 300; the 19 iterations after it do not advance.
        assert!(summary.last_snapshot.paused);
        assert_eq!(summary.last_snapshot.frame, 301);
    }

    #[test]
    fn test_throttled_loop_takes_time() {
        let mut engine = engine();
        let script = ScriptedInput::new(GameConfig::default().play_area(), 100);
        let options = LoopOptions {
            frame_limit: 200,
            max_frames: Some(10),
            hud_every: 0,
        };
        let start = Instant::now();
        run(&mut engine, &script, options);
        assert!(
            start.elapsed() >= Duration::from_millis(40),
            "10 frames at 200Hz should take about 50ms, took {:?}",
            start.elapsed()
        );
    }
}
