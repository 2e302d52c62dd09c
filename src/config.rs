use clap::{ArgAction, Parser, ValueHint};
use dirs_next::home_dir;
use embedded_graphics::prelude::Size;
use log::LevelFilter;
use std::{fs, path::{Path, PathBuf}};
use thiserror::Error;

use crate::face::{Color, DisplayMode, FaceStyle, Padding};
use crate::ticker::TickerKind;

/// Default face edge when neither YAML nor CLI give one.
pub const DEFAULT_FACE_SIZE: u32 = 128;

/// Error type for config loading/validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Top-level configuration
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, Default)]
pub struct Config {
    pub log_level: Option<String>,     // e.g., "info" | "debug"
    pub clock: Option<ClockConfig>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, Default)]
pub struct ClockConfig {
    pub ticker: Option<TickerKind>,
    pub analog: Option<bool>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub padding: Option<Padding>,
    pub colors: Option<ColorsConfig>,
}

/// Per-part colors; anything left out keeps the stock face color.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, Default)]
pub struct ColorsConfig {
    pub center_inner: Option<Color>,
    pub center_outer: Option<Color>,
    pub seconds_needle: Option<Color>,
    pub minutes_needle: Option<Color>,
    pub hours_needle: Option<Color>,
    pub degrees: Option<Color>,
    pub hours_values: Option<Color>,
    pub numbers: Option<Color>,
}

impl ClockConfig {
    pub fn face_style(&self) -> FaceStyle {
        let mut style = FaceStyle::default();
        if let Some(false) = self.analog {
            style.mode = DisplayMode::Digital;
        }
        if let Some(c) = self.colors.as_ref() {
            if let Some(v) = c.center_inner   { style.center_inner = v; }
            if let Some(v) = c.center_outer   { style.center_outer = v; }
            if let Some(v) = c.seconds_needle { style.seconds_needle = v; }
            if let Some(v) = c.minutes_needle { style.minutes_needle = v; }
            if let Some(v) = c.hours_needle   { style.hours_needle = v; }
            if let Some(v) = c.degrees        { style.degrees = v; }
            if let Some(v) = c.hours_values   { style.hours_values = v; }
            if let Some(v) = c.numbers        { style.numbers = v; }
        }
        style
    }

    pub fn ticker_kind(&self) -> TickerKind {
        self.ticker.unwrap_or_default()
    }

    /// Space offered to the widget, before padding and squaring.
    pub fn bounds(&self) -> Size {
        Size::new(
            self.width.unwrap_or(DEFAULT_FACE_SIZE),
            self.height.unwrap_or(DEFAULT_FACE_SIZE),
        )
    }
}

impl Config {
    pub fn clock_or_default(&self) -> ClockConfig {
        self.clock.clone().unwrap_or_default()
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level
            .as_deref()
            .and_then(|l| l.parse().ok())
            .unwrap_or(LevelFilter::Info)
    }
}

/// CLI overrides. All fields are Options so we can layer them over YAML.
#[derive(Debug, Parser, Clone)]
#[command(name = "clockface-demo", about = "LyMonS clock face demo")]
pub struct Cli {
    /// Path to a YAML config file (overrides search)
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub log_level: Option<String>,
    /// redraw trigger backend
    #[arg(long, value_enum)]
    pub ticker: Option<TickerKind>,
    /// digital readout instead of the analog face
    #[arg(long, action = ArgAction::SetTrue)]
    pub digital: bool,
    #[arg(long)]
    pub width: Option<u32>,
    #[arg(long)]
    pub height: Option<u32>,
    /// how long to keep focus and tick
    #[arg(long, default_value_t = 3)]
    pub seconds: u64,
    /// write each frame as PBM to this path instead of printing text art
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub pbm: Option<PathBuf>,
    /// dump fully merged config (after overrides) and exit
    #[arg(long, action = ArgAction::SetTrue)]
    pub dump_config: bool,
}

/// Public entry point: parse CLI, read YAML, merge, validate.
pub fn load() -> Result<(Config, Cli), ConfigError> {
    let cli = Cli::parse();
    let cfg = load_from(&cli)?;
    Ok((cfg, cli))
}

/// Layer defaults, YAML and the given CLI flags.
pub fn load_from(cli: &Cli) -> Result<Config, ConfigError> {
    // 1) defaults (from `Default` impl)
    let mut cfg = Config::default();

    // 2) YAML file (explicit path or search)
    if let Some(p) = cli.config.as_ref() {
        if !p.exists() {
            return Err(ConfigError::Validation(format!(
                "Config file not found: {}",
                p.display()
            )));
        }
        merge(&mut cfg, read_yaml(p)?);
    } else if let Some(p) = find_config_file() {
        merge(&mut cfg, read_yaml(&p)?);
    }

    // 3) CLI overrides (highest precedence)
    apply_cli_overrides(&mut cfg, cli);

    // 4) Validate
    validate(&cfg)?;
    Ok(cfg)
}

/// Pretty YAML of the effective config.
pub fn to_yaml(cfg: &Config) -> Result<String, ConfigError> {
    Ok(serde_yaml::to_string(cfg)?)
}

/// Try common locations in order (first hit wins).
fn find_config_file() -> Option<PathBuf> {
    if let Some(home) = home_dir() {
        let p = home.join(".config/lymons/clockface.yaml");
        if p.exists() { return Some(p) }
        let p = home.join(".config/clockface.yaml");
        if p.exists() { return Some(p) }
    }
    for candidate in &["clockface.yaml", "config/clockface.yaml"] {
        let p = PathBuf::from(candidate);
        if p.exists() { return Some(p) }
    }
    None
}

fn read_yaml(path: &Path) -> Result<Config, ConfigError> {
    let s = fs::read_to_string(path)?;
    parse_yaml(&s)
}

pub fn parse_yaml(s: &str) -> Result<Config, ConfigError> {
    let cfg: Config = serde_yaml::from_str(s)?;
    Ok(cfg)
}

/// Shallow merge `src` into `dst`, Option-by-Option.
fn merge(dst: &mut Config, src: Config) {
    if src.log_level.is_some() { dst.log_level = src.log_level; }
    match (&mut dst.clock, src.clock) {
        (None, Some(c)) => dst.clock = Some(c),
        (Some(d), Some(s)) => merge_clock(d, s),
        _ => {}
    }
}

fn merge_clock(dst: &mut ClockConfig, src: ClockConfig) {
    if src.ticker.is_some()  { dst.ticker = src.ticker; }
    if src.analog.is_some()  { dst.analog = src.analog; }
    if src.width.is_some()   { dst.width = src.width; }
    if src.height.is_some()  { dst.height = src.height; }
    if src.padding.is_some() { dst.padding = src.padding; }
    if src.colors.is_some()  { dst.colors = src.colors; }
}

fn apply_cli_overrides(cfg: &mut Config, cli: &Cli) {
    if cli.log_level.is_some() { cfg.log_level = cli.log_level.clone(); }
    let any_clock = cli.ticker.is_some()
        || cli.digital
        || cli.width.is_some()
        || cli.height.is_some();

    if any_clock && cfg.clock.is_none() {
        cfg.clock = Some(ClockConfig::default());
    }
    if let Some(clock) = cfg.clock.as_mut() {
        if cli.ticker.is_some() { clock.ticker = cli.ticker; }
        if cli.digital          { clock.analog = Some(false); }
        if cli.width.is_some()  { clock.width = cli.width; }
        if cli.height.is_some() { clock.height = cli.height; }
    }
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if let Some(level) = cfg.log_level.as_deref() {
        if level.parse::<LevelFilter>().is_err() {
            return Err(ConfigError::Validation(format!("unknown log_level '{level}'")));
        }
    }
    if let Some(clock) = cfg.clock.as_ref() {
        let bounds = clock.bounds();
        if bounds.width == 0 || bounds.height == 0 {
            return Err(ConfigError::Validation("clock width/height must be > 0".into()));
        }
        if let Some(p) = clock.padding {
            if p.horizontal() >= bounds.width || p.vertical() >= bounds.height {
                return Err(ConfigError::Validation("clock padding leaves no room for the face".into()));
            }
        }
    }
    Ok(())
}
