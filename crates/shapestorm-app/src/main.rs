//! shapestorm: headless SHAPESTORM runner.
//!
//! Usage:
//!   shapestorm [CONFIG] [--frames N] [--seed S] [--json]
//!
//! CONFIG is a `.json` config or a legacy line-format file. Without it the
//! stock configuration is used.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use shapestorm_app::config_file;
use shapestorm_app::error::AppError;
use shapestorm_app::game_loop::{self, LoopOptions};
use shapestorm_app::input::ScriptedInput;
use shapestorm_core::config::GameConfig;
use shapestorm_core::constants::DEFAULT_SEED;
use shapestorm_sim::{SimConfig, SimulationEngine};

/// Script length when `--frames` is not given: 30 seconds at 60 fps.
const DEFAULT_SCRIPT_FRAMES: u64 = 1_800;

#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    config: Option<PathBuf>,
    frames: Option<u64>,
    seed: Option<u64>,
    json: bool,
}

fn main() -> ExitCode {
    // Initialise structured logging; RUST_LOG overrides the default level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("shapestorm=info")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return ExitCode::SUCCESS;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            if matches!(err, AppError::Usage(_)) {
                print_usage();
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<(), AppError> {
    let cli = parse_args(args)?;

    let game = match &cli.config {
        Some(path) => config_file::load(path)?,
        None => {
            info!("no config given, using stock settings");
            GameConfig::default()
        }
    };
    game.validate()?;
    check_font(&game, cli.config.as_deref())?;

    let seed = cli.seed.unwrap_or(DEFAULT_SEED);
    let frame_limit = game.window.frame_limit;
    let play_area = game.play_area();
    let mut engine = SimulationEngine::new(SimConfig {
        seed,
        game,
        ..Default::default()
    })?;
    info!(
        seed,
        width = play_area.x,
        height = play_area.y,
        frame_limit,
        "simulation started"
    );

    let script = ScriptedInput::new(play_area, cli.frames.unwrap_or(DEFAULT_SCRIPT_FRAMES));
    let summary = game_loop::run(
        &mut engine,
        &script,
        LoopOptions {
            frame_limit,
            max_frames: cli.frames,
            ..Default::default()
        },
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary.last_snapshot)?);
    }
    Ok(())
}

fn parse_args(args: &[String]) -> Result<CliArgs, AppError> {
    let mut cli = CliArgs::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--frames" => cli.frames = Some(parse_value(iter.next(), "--frames")?),
            "--seed" => cli.seed = Some(parse_value(iter.next(), "--seed")?),
            "--json" => cli.json = true,
            flag if flag.starts_with("--") => {
                return Err(AppError::Usage(format!("unknown option: {flag}")));
            }
            path => {
                if cli.config.is_some() {
                    return Err(AppError::Usage(format!("unexpected argument: {path}")));
                }
                cli.config = Some(PathBuf::from(path));
            }
        }
    }
    Ok(cli)
}

fn parse_value(value: Option<&String>, flag: &str) -> Result<u64, AppError> {
    let value = value.ok_or_else(|| AppError::Usage(format!("{flag} needs a value")))?;
    value
        .parse()
        .map_err(|_| AppError::Usage(format!("{flag}: not a number: {value}")))
}

/// The HUD font must exist even though this runner draws nothing. Relative
/// paths resolve against the config file's directory.
fn check_font(game: &GameConfig, config_path: Option<&Path>) -> Result<(), AppError> {
    let file = Path::new(&game.font.file);
    let resolved = match config_path.and_then(Path::parent) {
        Some(dir) if file.is_relative() => dir.join(file),
        _ => file.to_path_buf(),
    };
    if resolved.is_file() {
        Ok(())
    } else {
        Err(AppError::MissingFont(resolved))
    }
}

const USAGE: &str = "shapestorm: headless SHAPESTORM runner\n\
     \n\
     Usage: shapestorm [CONFIG] [--frames N] [--seed S] [--json]\n\
     \n\
       CONFIG       config file (.json, or legacy line format)\n\
       --frames N   stop after N frames (default: end of demo script)\n\
       --seed S     RNG seed (default: 42)\n\
       --json       print the final frame snapshot as JSON\n\
     \n\
     The font named by the config's Font section must exist (relative paths\n\
     resolve next to CONFIG, or the working directory without one). No font\n\
     ships with the game; the stock config expects fonts/tech.ttf, so drop any\n\
     TrueType file there or point the Font line at one.\n\
     \n\
     Log level is controlled by RUST_LOG (default: shapestorm=info).\n";

fn print_usage() {
    eprintln!("{USAGE}");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_full_command_line() {
        let cli = parse_args(&args(&["game.json", "--frames", "300", "--seed", "7", "--json"])).unwrap();
        assert_eq!(
            cli,
            CliArgs {
                config: Some(PathBuf::from("game.json")),
                frames: Some(300),
                seed: Some(7),
                json: true,
            }
        );
    }

    #[test]
    fn test_parse_empty_command_line() {
        assert_eq!(parse_args(&[]).unwrap(), CliArgs::default());
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(parse_args(&args(&["--frames"])), Err(AppError::Usage(_))));
        assert!(matches!(parse_args(&args(&["--seed", "abc"])), Err(AppError::Usage(_))));
        assert!(matches!(parse_args(&args(&["--fast"])), Err(AppError::Usage(_))));
        assert!(matches!(parse_args(&args(&["a.txt", "b.txt"])), Err(AppError::Usage(_))));
    }

    #[test]
    fn test_usage_explains_font_requirement() {
        assert!(USAGE.contains("fonts/tech.ttf"));
        assert!(USAGE.contains("Font"));
    }

    #[test]
    fn test_missing_font_rejected() {
        let mut game = GameConfig::default();
        game.font.file = "no-such-font.ttf".to_string();
        let err = check_font(&game, Some(Path::new("/tmp/shapestorm/config.txt"))).unwrap_err();
        match err {
            AppError::MissingFont(path) => {
                assert_eq!(path, PathBuf::from("/tmp/shapestorm/no-such-font.ttf"));
            }
            other => panic!("expected MissingFont, got {other:?}"),
        }
    }
}
