//! Config file loading.
//!
//! Two formats are accepted. Files ending in `.json` hold a serialized
//! `GameConfig`. Anything else is the legacy line format, one section per
//! line, keyword first:
//!
//! ```text
//! Window W H FPS FULLSCREEN
//! Font FILE SIZE R G B
//! Player SR CR S FR FG FB OR OG OB OT V
//! Enemy SR CR SMIN SMAX OR OG OB OT VMIN VMAX L SI
//! Bullet SR CR S FR FG FB OR OG OB OT V L
//! ```
//!
//! Sections may come in any order. A section that never appears keeps its
//! defaults.

use std::path::Path;
use std::str::{FromStr, SplitWhitespace};

use tracing::{debug, info};

use shapestorm_core::config::{BulletConfig, EnemyConfig, FontConfig, GameConfig, PlayerConfig, WindowConfig};
use shapestorm_core::types::Rgba;

use crate::error::AppError;

/// Read and parse the config at `path`. Does not validate ranges.
pub fn load(path: &Path) -> Result<GameConfig, AppError> {
    let text = std::fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let config = if is_json {
        serde_json::from_str(&text)?
    } else {
        parse_legacy(&text)?
    };
    info!(path = %path.display(), json = is_json, "config loaded");
    Ok(config)
}

/// Parse the legacy line format.
pub fn parse_legacy(text: &str) -> Result<GameConfig, AppError> {
    let mut config = GameConfig::default();

    for (index, raw) in text.lines().enumerate() {
        let line_no = index + 1;
        let mut fields = Fields {
            tokens: raw.split_whitespace(),
            line: line_no,
        };
        let Some(keyword) = fields.tokens.next() else {
            continue;
        };

        match keyword {
            "Window" => config.window = window(&mut fields)?,
            "Font" => config.font = font(&mut fields)?,
            "Player" => config.player = player(&mut fields)?,
            "Enemy" => config.enemy = enemy(&mut fields)?,
            "Bullet" => config.bullet = bullet(&mut fields)?,
            other => {
                return Err(AppError::parse(
                    line_no,
                    format!("unknown section `{other}`"),
                ))
            }
        }
        fields.finish(keyword)?;
        debug!(line = line_no, section = keyword, "config section parsed");
    }

    Ok(config)
}

/// Token cursor over one line, for error context.
struct Fields<'a> {
    tokens: SplitWhitespace<'a>,
    line: usize,
}

impl Fields<'_> {
    fn next<T: FromStr>(&mut self, name: &str) -> Result<T, AppError> {
        let token = self
            .tokens
            .next()
            .ok_or_else(|| AppError::parse(self.line, format!("missing value for {name}")))?;
        token.parse().map_err(|_| {
            AppError::parse(self.line, format!("bad value `{token}` for {name}"))
        })
    }

    fn color(&mut self, name: &str) -> Result<Rgba, AppError> {
        Ok(Rgba::rgb(
            self.next(&format!("{name} red"))?,
            self.next(&format!("{name} green"))?,
            self.next(&format!("{name} blue"))?,
        ))
    }

    fn flag(&mut self, name: &str) -> Result<bool, AppError> {
        Ok(self.next::<i64>(name)? != 0)
    }

    fn finish(mut self, section: &str) -> Result<(), AppError> {
        match self.tokens.next() {
            Some(extra) => Err(AppError::parse(
                self.line,
                format!("unexpected trailing value `{extra}` in {section}"),
            )),
            None => Ok(()),
        }
    }
}

fn window(f: &mut Fields<'_>) -> Result<WindowConfig, AppError> {
    Ok(WindowConfig {
        width: f.next("window width")?,
        height: f.next("window height")?,
        frame_limit: f.next("frame limit")?,
        fullscreen: f.flag("fullscreen")?,
    })
}

fn font(f: &mut Fields<'_>) -> Result<FontConfig, AppError> {
    Ok(FontConfig {
        file: f.next("font file")?,
        size: f.next("font size")?,
        color: f.color("font color")?,
    })
}

fn player(f: &mut Fields<'_>) -> Result<PlayerConfig, AppError> {
    Ok(PlayerConfig {
        shape_radius: f.next("player shape radius")?,
        collision_radius: f.next("player collision radius")?,
        speed: f.next("player speed")?,
        fill: f.color("player fill")?,
        outline: f.color("player outline")?,
        outline_thickness: f.next("player outline thickness")?,
        vertices: f.next("player vertices")?,
    })
}

fn enemy(f: &mut Fields<'_>) -> Result<EnemyConfig, AppError> {
    Ok(EnemyConfig {
        shape_radius: f.next("enemy shape radius")?,
        collision_radius: f.next("enemy collision radius")?,
        speed_min: f.next("enemy min speed")?,
        speed_max: f.next("enemy max speed")?,
        outline: f.color("enemy outline")?,
        outline_thickness: f.next("enemy outline thickness")?,
        vertices_min: f.next("enemy min vertices")?,
        vertices_max: f.next("enemy max vertices")?,
        lifespan: f.next("small enemy lifespan")?,
        spawn_interval: f.next("spawn interval")?,
    })
}

fn bullet(f: &mut Fields<'_>) -> Result<BulletConfig, AppError> {
    Ok(BulletConfig {
        shape_radius: f.next("bullet shape radius")?,
        collision_radius: f.next("bullet collision radius")?,
        speed: f.next("bullet speed")?,
        fill: f.color("bullet fill")?,
        outline: f.color("bullet outline")?,
        outline_thickness: f.next("bullet outline thickness")?,
        vertices: f.next("bullet vertices")?,
        lifespan: f.next("bullet lifespan")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const STOCK: &str = "\
Window 1280 720 60 0
Font fonts/tech.ttf 24 255 255 255
Player 32 32 5 5 5 5 255 0 0 4 8
Enemy 32 32 3 3 255 255 255 2 3 8 90 60
Bullet 10 10 20 255 255 255 255 255 255 2 20 90
";

    #[test]
    fn test_stock_file_matches_defaults() {
        let config = parse_legacy(STOCK).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_sections_in_any_order_and_missing_keep_defaults() {
        let text = "Bullet 4 5 12 1 2 3 4 5 6 1 6 30\n\nWindow 800 600 0 1\n";
        let config = parse_legacy(text).unwrap();
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.frame_limit, 0);
        assert!(config.window.fullscreen);
        assert_eq!(config.bullet.speed, 12.0);
        assert_eq!(config.bullet.fill, Rgba::rgb(1, 2, 3));
        assert_eq!(config.bullet.lifespan, 30);
        assert_eq!(config.player, PlayerConfig::default());
        assert_eq!(config.enemy, EnemyConfig::default());
    }

    #[test]
    fn test_unknown_section_rejected() {
        let err = parse_legacy("Window 800 600 60 0\nBoss 1 2 3\n").unwrap_err();
        assert!(
            matches!(err, AppError::Parse { line: 2, .. }),
            "got {err:?}"
        );
    }

    #[test]
    fn test_short_line_reports_field() {
        let err = parse_legacy("Window 800 600").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("line 1"), "{message}");
        assert!(message.contains("frame limit"), "{message}");
    }

    #[test]
    fn test_bad_number_reports_token() {
        let err = parse_legacy("Enemy 32 32 3 fast 255 255 255 2 3 8 90 60").unwrap_err();
        assert!(err.to_string().contains("`fast`"));
    }

    #[test]
    fn test_trailing_values_rejected() {
        assert!(parse_legacy("Window 800 600 60 0 7").is_err());
    }

    #[test]
    fn test_color_channel_out_of_range_rejected() {
        assert!(parse_legacy("Font f.ttf 24 256 0 0").is_err());
    }

    #[test]
    fn test_non_finite_values_parse_but_fail_validation() {
        let config = parse_legacy("Enemy 32 32 3 3 255 255 255 NaN 3 8 90 60").unwrap();
        assert!(config.enemy.outline_thickness.is_nan());
        assert!(config.validate().is_err());

        let config = parse_legacy("Enemy 32 inf 3 3 255 255 255 2 3 8 90 60").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_json_and_legacy_files() {
        let dir = std::env::temp_dir().join(format!("shapestorm-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let json_path = dir.join("game.json");
        std::fs::write(&json_path, r#"{"enemy": {"spawnInterval": 15}}"#).unwrap();
        let config = load(&json_path).unwrap();
        assert_eq!(config.enemy.spawn_interval, 15);
        assert_eq!(config.window, WindowConfig::default());

        let legacy_path = dir.join("config.txt");
        std::fs::write(&legacy_path, STOCK).unwrap();
        assert_eq!(load(&legacy_path).unwrap(), GameConfig::default());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(matches!(err, AppError::Io { .. }));
    }
}
