//! inifig command-line tool.
//!
//! Reads layered INI settings the same way an embedding application would and
//! lets you inspect or change them from a shell.
//!
//! # Usage
//!
//! ```text
//! inifig [OPTIONS] <COMMAND>
//!
//! Commands:
//!   get <KEY>              Print the effective value of KEY
//!   set <KEY> <VALUE>      Assign VALUE and save to the last file
//!   show [SECTION]         Print a section (or every section); --json for JSON
//!   origin <KEY>           Print where the effective value comes from
//!   init                   Save the effective settings, creating the file
//!
//! Options:
//!   -f, --file <FILE>        Settings file; repeat to layer [default: config.ini]
//!       --defaults <TOML>    Defaults declared in a TOML file
//!       --user-config <APP>  Append the per-user file for APP as the save target
//! ```
//!
//! KEY is `option` (section `GENERAL`) or `section.option`.
//!
//! # Environment variable overrides
//!
//! | Variable          | Description                               |
//! |-------------------|-------------------------------------------|
//! | `INIFIG_FILE`     | Comma-separated settings files, used when no `-f` is given |
//! | `INIFIG_DEFAULTS` | Path of the defaults TOML                 |
//! | `RUST_LOG`        | Log filter (logs go to stderr) [default: warn] |

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use inifig::infrastructure::paths;
use inifig::{Defaults, FileList, Origin, SettingKey, Settings, SettingsError};

/// Environment variable holding a comma-separated file list.
const FILES_ENV: &str = "INIFIG_FILE";

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Layered INI settings: defaults, multi-file precedence, save to the last file.
#[derive(Debug, Parser)]
#[command(name = "inifig", version)]
struct Cli {
    /// Settings file to load.  Repeat to layer several files: later files
    /// override earlier ones and the last one receives saved changes.
    /// Without `-f`, the comma-separated list in INIFIG_FILE is used.
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    files: Vec<PathBuf>,

    /// TOML file declaring default values.  Top-level keys go to the GENERAL
    /// section, tables become sections.
    #[arg(long, value_name = "TOML", env = "INIFIG_DEFAULTS")]
    defaults: Option<PathBuf>,

    /// Append the platform per-user settings file for this application name
    /// (e.g. `~/.config/<APP>/config.ini`) as the last file.
    #[arg(long, value_name = "APP")]
    user_config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the effective value of a setting.
    Get { key: String },
    /// Assign a value and save it to the last file.
    Set { key: String, value: String },
    /// Print the options of a section, or of every section.
    Show {
        section: Option<String>,
        /// Print JSON instead of `key : value` lines.
        #[arg(long)]
        json: bool,
    },
    /// Print where the effective value of a setting comes from.
    Origin { key: String },
    /// Save the effective settings, creating the last file if needed.
    Init,
}

impl Cli {
    /// Builds the ordered file list from `--file` (or `env_files`, the value
    /// of INIFIG_FILE) and `--user-config`.
    ///
    /// Only the environment list is split on commas; a `-f` path is taken
    /// as written.
    ///
    /// # Errors
    ///
    /// Returns an error if `--user-config` is given but the platform config
    /// directory cannot be determined.
    fn file_list(&self, env_files: Option<&str>) -> anyhow::Result<FileList> {
        let env_paths: Vec<PathBuf> = env_files
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .collect();
        let mut files = if !self.files.is_empty() {
            FileList::from(self.files.clone())
        } else if !env_paths.is_empty() {
            FileList::from(env_paths)
        } else {
            FileList::default()
        };
        if let Some(app) = &self.user_config {
            let path = paths::user_config_file(app)
                .with_context(|| format!("cannot locate user settings for '{app}'"))?;
            files.push(path);
        }
        Ok(files)
    }
}

fn load_defaults(path: Option<&Path>) -> anyhow::Result<Defaults> {
    let Some(path) = path else {
        return Ok(Defaults::new());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read defaults {}", path.display()))?;
    let defaults = Defaults::from_toml_str(&text)
        .with_context(|| format!("invalid defaults {}", path.display()))?;
    debug!("loaded {} defaults from {}", defaults.len(), path.display());
    Ok(defaults)
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so `get` output stays pipeable.  Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let defaults = load_defaults(cli.defaults.as_deref())?;
    let files = cli.file_list(std::env::var(FILES_ENV).ok().as_deref())?;
    let mut settings = Settings::open(defaults, files).context("failed to load settings")?;

    match cli.command {
        Command::Get { key } => {
            let value = settings
                .get(key.as_str())
                .ok_or_else(|| SettingsError::UnknownKey(SettingKey::parse(&key)))?;
            println!("{value}");
        }
        Command::Set { key, value } => {
            settings.set(key.as_str(), &value)?;
            settings
                .save()
                .with_context(|| format!("failed to save {key}"))?;
        }
        Command::Show { section, json } => show(&settings, section.as_deref(), json)?,
        Command::Origin { key } => {
            let origin = settings
                .origin(key.as_str())
                .ok_or_else(|| SettingsError::UnknownKey(SettingKey::parse(&key)))?;
            match origin {
                Origin::Default => println!("default"),
                Origin::Assigned => println!("assigned"),
                Origin::File(index) => {
                    let path = settings
                        .files()
                        .get(index)
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| format!("file #{index}"));
                    println!("{path}");
                }
            }
        }
        Command::Init => {
            settings.save()?;
            println!("{}", settings.save_path().display());
        }
    }

    Ok(())
}

fn show(settings: &Settings, section: Option<&str>, json: bool) -> anyhow::Result<()> {
    let doc = settings.document();
    match (section, json) {
        (Some(name), true) => {
            let options = doc
                .section(name)
                .with_context(|| format!("no section [{name}]"))?;
            println!("{}", serde_json::to_string_pretty(options)?);
        }
        (None, true) => println!("{}", serde_json::to_string_pretty(doc)?),
        (Some(name), false) => {
            if !doc.has_section(name) {
                anyhow::bail!("no section [{name}]");
            }
            print!("{}", settings.section_summary(name));
        }
        (None, false) => {
            for (name, _) in doc.sections() {
                println!("[{name}]");
                print!("{}", settings.section_summary(name));
            }
        }
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
