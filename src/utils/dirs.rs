//! Where the dashboard keeps its files.

use std::env;
use std::path::PathBuf;

const APP_DIR_NAME: &str = "VoltCentral";

/// Platform data directory: `%APPDATA%`, `~/Library/Application Support`,
/// or `$XDG_DATA_HOME` falling back to `~/.local/share`.
fn platform_data_dir() -> Option<PathBuf> {
    if cfg!(windows) {
        return env::var_os("APPDATA").map(PathBuf::from);
    }

    let home = env::var_os("HOME").map(PathBuf::from);
    if cfg!(target_os = "macos") {
        return home.map(|home| home.join("Library").join("Application Support"));
    }

    env::var_os("XDG_DATA_HOME")
        .map(PathBuf::from)
        .or_else(|| home.map(|home| home.join(".local").join("share")))
}

/// Directory holding the dashboard's config and saved session.
///
/// Relative to the working directory when no data directory can be resolved.
pub fn dashboard_dir() -> PathBuf {
    platform_data_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(APP_DIR_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_dir_ends_with_app_name() {
        assert!(dashboard_dir().ends_with(APP_DIR_NAME));
    }
}
