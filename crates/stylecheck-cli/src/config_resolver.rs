//! Locates the configuration file for a run.
//!
//! An explicit `--config` path wins unconditionally and is never
//! existence-checked, so a typo surfaces as a load error instead of a
//! silent fallback to defaults. Without one, the first existing
//! candidate wins: project files (`stylecheck.toml`, then
//! `.stylecheck.toml`) ahead of the per-user file
//! (`$STYLECHECK_CONFIG_DIR/config.toml`, default `~/.stylecheck/`).

use std::path::{Path, PathBuf};

/// Where a run's configuration comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Path handed over on the command line.
    Explicit(PathBuf),
    /// Config file in the project directory.
    Project(PathBuf),
    /// Per-user fallback config.
    Global(PathBuf),
    /// Nothing found; built-in defaults apply.
    Default,
}

impl ConfigSource {
    /// File to load, or `None` for built-in defaults.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// True for the per-user fallback.
    #[must_use]
    pub fn is_global(&self) -> bool {
        matches!(self, Self::Global(_))
    }
}

/// Picks the config source for a run.
#[must_use]
pub fn locate(project_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    match explicit {
        Some(p) => ConfigSource::Explicit(p.to_path_buf()),
        None => first_existing(candidates(project_dir, user_config_dir().as_deref())),
    }
}

/// Candidate sources, highest priority first.
fn candidates(project_dir: &Path, user_dir: Option<&Path>) -> Vec<ConfigSource> {
    let mut out = vec![
        ConfigSource::Project(project_dir.join("stylecheck.toml")),
        ConfigSource::Project(project_dir.join(".stylecheck.toml")),
    ];
    if let Some(dir) = user_dir {
        out.push(ConfigSource::Global(dir.join("config.toml")));
    }
    out
}

fn first_existing(candidates: Vec<ConfigSource>) -> ConfigSource {
    for source in candidates {
        if source.path().is_some_and(Path::exists) {
            tracing::debug!("config source: {source:?}");
            return source;
        }
    }
    ConfigSource::Default
}

/// Per-user config directory; the env var override keeps tests and CI
/// away from the real home directory.
fn user_config_dir() -> Option<PathBuf> {
    std::env::var_os("STYLECHECK_CONFIG_DIR")
        .map(PathBuf::from)
        .or_else(|| home::home_dir().map(|h| h.join(".stylecheck")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::write(path, "").expect("write");
    }

    #[test]
    fn explicit_path_wins_without_existence_check() {
        let missing = Path::new("/no/such/stylecheck.toml");
        let source = locate(Path::new("."), Some(missing));
        assert_eq!(source, ConfigSource::Explicit(missing.to_path_buf()));
    }

    #[test]
    fn plain_project_file_beats_dotted_one() {
        let dir = TempDir::new().expect("tempdir");
        touch(&dir.path().join(".stylecheck.toml"));
        assert_eq!(
            first_existing(candidates(dir.path(), None)),
            ConfigSource::Project(dir.path().join(".stylecheck.toml"))
        );

        touch(&dir.path().join("stylecheck.toml"));
        assert_eq!(
            first_existing(candidates(dir.path(), None)),
            ConfigSource::Project(dir.path().join("stylecheck.toml"))
        );
    }

    #[test]
    fn user_file_applies_only_without_project_file() {
        let project = TempDir::new().expect("tempdir");
        let user = TempDir::new().expect("tempdir");
        touch(&user.path().join("config.toml"));

        let source = first_existing(candidates(project.path(), Some(user.path())));
        assert!(source.is_global());
        assert_eq!(source.path(), Some(user.path().join("config.toml").as_path()));

        touch(&project.path().join("stylecheck.toml"));
        let source = first_existing(candidates(project.path(), Some(user.path())));
        assert!(matches!(source, ConfigSource::Project(_)));
        assert!(!source.is_global());
    }

    #[test]
    fn no_candidate_on_disk_means_defaults() {
        let project = TempDir::new().expect("tempdir");
        let source = first_existing(candidates(project.path(), None));
        assert_eq!(source, ConfigSource::Default);
        assert!(source.path().is_none());
        assert!(!source.is_global());
    }
}
