//! Platform-appropriate locations for per-user settings files.
//!
//! For an application named `app`:
//! - Windows:  `%APPDATA%\app\config.ini`
//! - Linux:    `$XDG_CONFIG_HOME/app/config.ini` or `~/.config/app/config.ini`
//! - macOS:    `~/Library/Application Support/app/config.ini`
//!
//! A per-user file is typically placed last in the file list so that it
//! overrides system-wide files and receives saved changes.

use std::ffi::OsString;
use std::path::PathBuf;

use thiserror::Error;

/// Name of the per-user settings file inside the config directory.
pub const USER_CONFIG_FILE: &str = "config.ini";

/// Error type for path resolution.
#[derive(Debug, Error)]
pub enum PathError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,
}

/// Resolves the config directory for `app`, or `None` when the relevant
/// environment variables are unset.
pub fn config_dir(app: &str) -> Option<PathBuf> {
    platform_config_base().map(|base| base.join(app))
}

/// Resolves the full path of the per-user settings file for `app`.
///
/// # Errors
///
/// Returns [`PathError::NoPlatformConfigDir`] if the base directory cannot be
/// determined.
pub fn user_config_file(app: &str) -> Result<PathBuf, PathError> {
    config_dir(app)
        .map(|dir| dir.join(USER_CONFIG_FILE))
        .ok_or(PathError::NoPlatformConfigDir)
}

/// Resolves the platform config base directory, without the app subdirectory.
fn platform_config_base() -> Option<PathBuf> {
    config_base_from(|name| std::env::var_os(name))
}

/// Resolves the config base directory from environment variables read
/// through `var`.
fn config_base_from(var: impl Fn(&str) -> Option<OsString>) -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        // %APPDATA% e.g. C:\Users\<user>\AppData\Roaming
        var("APPDATA").filter(|p| !p.is_empty()).map(PathBuf::from)
    }

    #[cfg(target_os = "linux")]
    {
        // XDG_CONFIG_HOME or ~/.config
        var("XDG_CONFIG_HOME")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .or_else(|| var("HOME").map(|h| PathBuf::from(h).join(".config")))
    }

    #[cfg(target_os = "macos")]
    {
        var("HOME").map(|h| PathBuf::from(h).join("Library").join("Application Support"))
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        let _ = var;
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    /// A variable lookup backed by a fixed list instead of the process
    /// environment.
    fn vars(pairs: &[(&'static str, PathBuf)]) -> impl Fn(&str) -> Option<OsString> {
        let pairs: Vec<(&'static str, PathBuf)> = pairs.to_vec();
        move |name| {
            pairs
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.clone().into_os_string())
        }
    }

    fn scratch_dir() -> PathBuf {
        std::env::temp_dir().join(format!("inifig_paths_{}", Uuid::new_v4()))
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_config_base_prefers_xdg_config_home() {
        // Arrange
        let xdg = scratch_dir();
        let lookup = vars(&[
            ("XDG_CONFIG_HOME", xdg.clone()),
            ("HOME", PathBuf::from("/home/someone")),
        ]);

        // Act
        let base = config_base_from(lookup);

        // Assert
        assert_eq!(base, Some(xdg));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_config_base_falls_back_to_home_dot_config() {
        let home = scratch_dir();
        let lookup = vars(&[("XDG_CONFIG_HOME", PathBuf::new()), ("HOME", home.clone())]);

        assert_eq!(config_base_from(lookup), Some(home.join(".config")));
    }

    #[cfg(target_os = "windows")]
    #[test]
    fn test_config_base_uses_appdata() {
        let appdata = scratch_dir();
        let lookup = vars(&[("APPDATA", appdata.clone())]);

        assert_eq!(config_base_from(lookup), Some(appdata));
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn test_config_base_uses_application_support() {
        let home = scratch_dir();
        let lookup = vars(&[("HOME", home.clone())]);

        assert_eq!(
            config_base_from(lookup),
            Some(home.join("Library").join("Application Support"))
        );
    }

    #[test]
    fn test_config_base_is_none_without_variables() {
        assert_eq!(config_base_from(vars(&[])), None);
    }

    #[test]
    fn test_user_config_file_ends_with_app_and_file_name() {
        if let Ok(path) = user_config_file("inifig-test") {
            assert!(
                path.ends_with("inifig-test/config.ini"),
                "unexpected user config path: {path:?}"
            );
        }
        // NoPlatformConfigDir (e.g. in a stripped CI env) is also acceptable.
    }
}
