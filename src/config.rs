// src/config.rs  -  Runtime configuration (CLI + TOML)
use anyhow::{Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::app::Role;
use crate::i18n::Language;

/// The example config is embedded directly in the binary at compile time.
/// Users can write it out with:  farm-connect --write-config
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../config.toml.example");

// ── CLI ───────────────────────────────────────────────────────────────────────
#[derive(Parser, Debug, Default)]
#[command(
    name    = "farm-connect",
    about   = "FarmConnect  |  farmers and farm workers, in English, हिन्दी and ગુજરાતી",
    version,
)]
pub struct Cli {
    /// Config file path (default: ~/.config/farm-connect/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// UI language: en | hi | gu
    #[arg(long)]
    pub lang: Option<Language>,

    /// Role preselected on the login/registration form: farmer | worker
    #[arg(long)]
    pub role: Option<Role>,

    /// Name prefilled on the registration form
    #[arg(long)]
    pub name: Option<String>,

    /// Phone number prefilled on the login/registration form
    #[arg(long)]
    pub phone: Option<String>,

    /// Village prefilled on the registration form
    #[arg(long)]
    pub village: Option<String>,

    /// Skip landing and login: open the dashboard as a verified demo user
    #[arg(long, action)]
    pub demo: bool,

    /// Print every phrase key with its English, Hindi and Gujarati text and exit
    #[arg(long, action)]
    pub list_keys: bool,

    /// Write the built-in default config.toml to the config path and exit.
    /// Use --config <PATH> to write to a custom location.
    #[arg(long, action)]
    pub write_config: bool,

    /// Print the built-in default config.toml to stdout and exit
    #[arg(long, action)]
    pub print_config: bool,
}

// ── TOML file structure ───────────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    pub general: Option<GeneralCfg>,
    pub account: Option<AccountCfg>,
    pub ui:      Option<UiCfg>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralCfg {
    pub language: Option<Language>,
}

/// Prefill for the login/registration form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountCfg {
    pub role:    Option<Role>,
    pub name:    Option<String>,
    pub phone:   Option<String>,
    pub village: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiCfg {
    /// Show "any 6 digits are accepted" under the OTP boxes
    pub show_otp_hint: Option<bool>,
}

// ── Resolved / merged config ──────────────────────────────────────────────────
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub language:      Language,
    pub role:          Role,
    pub name:          String,
    pub phone:         String,
    pub village:       String,
    pub show_otp_hint: bool,
    /// Start signed in on the dashboard
    pub demo:          bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            language:      Language::En,
            role:          Role::Farmer,
            name:          String::new(),
            phone:         String::new(),
            village:       String::new(),
            show_otp_hint: true,
            demo:          false,
        }
    }
}

// ── Config loader ─────────────────────────────────────────────────────────────
impl AppConfig {
    /// Write the embedded default config to disk.
    /// Returns the path it was written to.
    pub fn write_default_config(cli: &Cli) -> Result<PathBuf> {
        let path = cli.config.clone().unwrap_or_else(default_config_path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Creating config directory {:?}", parent))?;
        }
        std::fs::write(&path, DEFAULT_CONFIG_TOML)
            .with_context(|| format!("Writing config to {:?}", path))?;
        Ok(path)
    }

    pub fn load(cli: &Cli) -> Result<Self> {
        let path = cli.config.clone().unwrap_or_else(default_config_path);
        Self::load_from(&path, cli)
    }

    fn load_from(path: &Path, cli: &Cli) -> Result<Self> {
        let mut cfg = Self::default();

        // 1. Load TOML file
        if path.exists() {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Reading config {:?}", path))?;
            let fc = parse_file_config(&raw)
                .with_context(|| format!("Parsing config {:?}", path))?;
            cfg.apply_file(&fc);
            log::info!("[config] loaded {}", path.display());
        } else {
            log::info!("[config] no config file at {}, using defaults", path.display());
        }

        // 2. Apply CLI overrides
        cfg.apply_cli(cli);
        Ok(cfg)
    }

    fn apply_file(&mut self, fc: &FileConfig) {
        if let Some(g) = &fc.general {
            if let Some(v) = g.language { self.language = v; }
        }
        if let Some(a) = &fc.account {
            if let Some(v) = a.role        { self.role    = v; }
            if let Some(v) = &a.name       { self.name    = v.clone(); }
            if let Some(v) = &a.phone      { self.phone   = v.clone(); }
            if let Some(v) = &a.village    { self.village = v.clone(); }
        }
        if let Some(u) = &fc.ui {
            if let Some(v) = u.show_otp_hint { self.show_otp_hint = v; }
        }
    }

    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(v) = cli.lang     { self.language = v; }
        if let Some(v) = cli.role     { self.role     = v; }
        if let Some(v) = &cli.name    { self.name     = v.clone(); }
        if let Some(v) = &cli.phone   { self.phone    = v.clone(); }
        if let Some(v) = &cli.village { self.village  = v.clone(); }
        if cli.demo                   { self.demo     = true; }
    }
}

fn parse_file_config(raw: &str) -> Result<FileConfig> {
    Ok(toml::from_str(raw)?)
}

fn default_config_path() -> PathBuf {
    dirs_next().join("farm-connect").join("config.toml")
}

fn dirs_next() -> PathBuf {
    if let Ok(v) = std::env::var("XDG_CONFIG_HOME") { return PathBuf::from(v); }
    if let Ok(v) = std::env::var("APPDATA")          { return PathBuf::from(v); }
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_default();
    PathBuf::from(home).join(".config")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_example_parses() {
        let fc = parse_file_config(DEFAULT_CONFIG_TOML).unwrap();
        let mut cfg = AppConfig::default();
        cfg.apply_file(&fc);
        assert_eq!(cfg.language, Language::En);
        assert_eq!(cfg.role, Role::Farmer);
        assert!(cfg.show_otp_hint);
    }

    #[test]
    fn file_values_override_defaults() {
        let fc = parse_file_config(
            "[general]\nlanguage = \"gu\"\n\n[account]\nrole = \"worker\"\nphone = \"9876543210\"\n\n[ui]\nshow_otp_hint = false\n",
        )
        .unwrap();
        let mut cfg = AppConfig::default();
        cfg.apply_file(&fc);
        assert_eq!(cfg.language, Language::Gu);
        assert_eq!(cfg.role, Role::Worker);
        assert_eq!(cfg.phone, "9876543210");
        assert!(!cfg.show_otp_hint);
    }

    #[test]
    fn cli_wins_over_file() {
        let fc = parse_file_config("[general]\nlanguage = \"hi\"\n").unwrap();
        let cli = Cli::parse_from(["farm-connect", "--lang", "gu", "--role", "worker", "--demo"]);
        let mut cfg = AppConfig::default();
        cfg.apply_file(&fc);
        cfg.apply_cli(&cli);
        assert_eq!(cfg.language, Language::Gu);
        assert_eq!(cfg.role, Role::Worker);
        assert!(cfg.demo);
    }

    #[test]
    fn unknown_language_in_file_is_an_error() {
        assert!(parse_file_config("[general]\nlanguage = \"fr\"\n").is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let cli = Cli::default();
        let cfg = AppConfig::load_from(Path::new("/nonexistent/farm-connect.toml"), &cli).unwrap();
        assert_eq!(cfg, AppConfig::default());
    }
}
