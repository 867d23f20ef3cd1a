use crate::cli::StripArgs;
use crate::error::{StripError, StripResult};
use crate::walker::WalkOptions;
use logstrip_core::{get_config_home, StripConfig};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolved settings for a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub strip: StripConfig,
    pub dry_run: bool,
}

impl Config {
    /// Global config location under the config home
    pub fn global_config_path() -> Option<PathBuf> {
        get_config_home().map(|h| h.join("logstrip").join("config.toml"))
    }

    /// Load configuration with priority:
    /// 1. Defaults
    /// 2. Global config
    /// 3. Repo config (`.logstrip.toml`)
    /// 4. Config file given on the command line
    /// 5. CLI arguments
    pub fn load(args: &StripArgs) -> StripResult<Self> {
        Self::load_in(Path::new("."), args)
    }

    /// Same as [`Config::load`], looking for the repo config in `repo_dir`
    pub fn load_in(repo_dir: &Path, args: &StripArgs) -> StripResult<Self> {
        let mut sources = Vec::new();

        if let Some(global_config) = Self::global_config_path() {
            if global_config.exists() {
                sources.push(global_config);
            }
        }

        let repo_config = repo_dir.join(".logstrip.toml");
        if repo_config.exists() {
            sources.push(repo_config);
        }

        if let Some(custom_config) = &args.config {
            sources.push(PathBuf::from(custom_config));
        }

        Self::load_from(&sources, args)
    }

    /// Merge the given config files in order, then apply CLI overrides
    pub fn load_from(sources: &[PathBuf], args: &StripArgs) -> StripResult<Self> {
        let mut config = Self::default();

        for path in sources {
            config = config.merge_from_file(path)?;
        }

        if let Some(ref root) = args.root {
            config.strip.root = root.clone();
        }
        config.dry_run = args.dry_run;

        config.strip.extensions = config
            .strip
            .extensions
            .iter()
            .map(|ext| ext.trim_start_matches('.').to_string())
            .collect();

        Ok(config)
    }

    fn merge_from_file(self, path: &Path) -> StripResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            StripError::Config(format!(
                "Failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;

        let root_config = logstrip_core::Config::from_toml(&content).map_err(|e| {
            StripError::Config(format!(
                "Failed to parse config from {}: {}",
                path.display(),
                e
            ))
        })?;

        debug!(path = %path.display(), "loaded config");

        // A file without a [strip] section leaves earlier layers untouched
        Ok(match root_config.strip {
            Some(strip) => Self {
                strip,
                dry_run: self.dry_run,
            },
            None => self,
        })
    }

    pub fn walk_options(&self) -> WalkOptions {
        WalkOptions {
            root: PathBuf::from(&self.strip.root),
            extensions: self.strip.extensions.clone(),
            exclude_dirs: self.strip.exclude_dirs.clone(),
            dry_run: self.dry_run,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_without_sources() {
        let config = Config::load_from(&[], &StripArgs::default()).unwrap();
        assert_eq!(config, Config::default());

        let opts = config.walk_options();
        assert_eq!(opts.root, PathBuf::from("src"));
        assert!(!opts.dry_run);
    }

    #[test]
    fn test_file_then_cli_precedence() {
        let first = write_config(
            r#"
[strip]
root = "app"
extensions = [".ts", "mts"]
"#,
        );
        let second = write_config(
            r#"
version = "1"

[strip]
root = "lib"
extensions = ["ts"]
exclude_dirs = ["node_modules", "generated"]
"#,
        );

        let sources = vec![first.path().to_path_buf(), second.path().to_path_buf()];
        let config = Config::load_from(&sources, &StripArgs::default()).unwrap();
        assert_eq!(config.strip.root, "lib");
        assert_eq!(config.strip.exclude_dirs, vec!["node_modules", "generated"]);

        let args = StripArgs {
            root: Some("packages/web/src".to_string()),
            config: None,
            dry_run: true,
        };
        let config = Config::load_from(&sources[..1], &args).unwrap();
        assert_eq!(config.strip.root, "packages/web/src");
        assert_eq!(config.strip.extensions, vec!["ts", "mts"]);
        assert!(config.dry_run);
    }

    #[test]
    fn test_file_without_strip_section_is_ignored() {
        let file = write_config("version = \"1\"\n");
        let config =
            Config::load_from(&[file.path().to_path_buf()], &StripArgs::default()).unwrap();
        assert_eq!(config.strip, StripConfig::default());
    }

    #[test]
    fn test_bad_config_is_error() {
        let file = write_config("version = \"2\"\n");
        let err = Config::load_from(&[file.path().to_path_buf()], &StripArgs::default())
            .unwrap_err();
        assert!(matches!(err, StripError::Config(_)));

        let missing = PathBuf::from("/nonexistent/logstrip/config.toml");
        let err = Config::load_from(&[missing], &StripArgs::default()).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }

    #[test]
    fn test_load_finds_repo_config() {
        let repo = TempDir::new().unwrap();
        fs::write(
            repo.path().join(".logstrip.toml"),
            "[strip]\nroot = \"web/src\"\nexclude_dirs = [\"node_modules\", \"dist\"]\n",
        )
        .unwrap();

        let config = Config::load_in(repo.path(), &StripArgs::default()).unwrap();
        assert_eq!(config.strip.root, "web/src");
        assert_eq!(config.strip.extensions, vec!["ts", "tsx"]);
        assert_eq!(config.strip.exclude_dirs, vec!["node_modules", "dist"]);
    }

    #[test]
    fn test_load_explicit_config_overrides_repo_config() {
        let repo = TempDir::new().unwrap();
        fs::write(repo.path().join(".logstrip.toml"), "[strip]\nroot = \"web/src\"\n").unwrap();
        let custom = write_config("[strip]\nroot = \"api/src\"\nextensions = [\"mts\"]\n");

        let args = StripArgs {
            root: None,
            config: Some(custom.path().to_string_lossy().to_string()),
            dry_run: false,
        };
        let config = Config::load_in(repo.path(), &args).unwrap();
        assert_eq!(config.strip.root, "api/src");
        assert_eq!(config.strip.extensions, vec!["mts"]);
    }

    #[test]
    fn test_load_rejects_broken_repo_config() {
        let repo = TempDir::new().unwrap();
        fs::write(repo.path().join(".logstrip.toml"), "[strip\n").unwrap();

        let err = Config::load_in(repo.path(), &StripArgs::default()).unwrap_err();
        assert!(err.to_string().contains(".logstrip.toml"));
    }
}
