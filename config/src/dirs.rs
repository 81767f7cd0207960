//! Platform-specific application paths.

use std::env;
use std::path::PathBuf;

/// Find a configuration file from standard paths.
///
/// In GNU/Linux:
///     current directory | $XDG_CONFIG_HOME/lamport | /etc/lamport
///
/// In MacOS:
///     current directory | $HOME/Library/Preferences/dev.lamport.lamport
///
/// In Windows:
///     current directory | C:\Users\<user>\AppData\Roaming\lamport
pub fn find_config() -> Option<PathBuf> {
    let mut config_dirs = Vec::with_capacity(3);

    if let Ok(dir) = env::current_dir() {
        config_dirs.push(dir);
    }

    if let Some(dir) = directories_next::ProjectDirs::from("dev", "lamport", "lamport") {
        config_dirs.push(dir.config_dir().into());
    }

    if cfg!(unix) {
        config_dirs.push("/etc/lamport".into());
    }

    config_dirs
        .into_iter()
        .map(|path| path.join("lamport.toml"))
        .find(|path| path.exists())
}
