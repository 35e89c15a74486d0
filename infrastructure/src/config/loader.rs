//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const PROJECT_FILES: [&str; 2] = ["tmclass.toml", ".tmclass.toml"];

/// Environment variables read without a config file, mapped onto `[completion]`
pub const ENV_PREFIX: &str = "AZURE_AI_";
const ENV_KEYS: [&str; 3] = ["endpoint", "api_key", "model"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `AZURE_AI_*` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./tmclass.toml` or `./.tmclass.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/tmclass/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(
            Self::global_config_path().as_deref(),
            Self::project_config_path().as_deref(),
            config_path.map(PathBuf::as_path),
        )
        .extract()
        .map_err(Box::new)
    }

    /// Load defaults plus environment variables only (for --no-config)
    pub fn load_without_files() -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(None, None, None).extract().map_err(Box::new)
    }

    fn figment(global: Option<&Path>, project: Option<&Path>, explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        for path in [global, project, explicit].into_iter().flatten() {
            if path.exists() || Some(path) == explicit {
                figment = figment.merge(Toml::file(path));
            }
        }

        figment.merge(Self::env_provider())
    }

    fn env_provider() -> Env {
        Env::prefixed(ENV_PREFIX)
            .only(&ENV_KEYS)
            .map(|key| format!("completion.{}", key.as_str()).into())
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/tmclass/config.toml if set,
    /// otherwise the platform config directory.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("tmclass").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(explicit: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");

        for key in ENV_KEYS {
            let name = format!("{}{}", ENV_PREFIX, key.to_uppercase());
            let state = if std::env::var_os(&name).is_some() { "SET  " } else { "     " };
            println!("  [{}] Env:     {}", state, name);
        }

        if let Some(path) = explicit {
            println!("  [FOUND] Explicit: {}", path.display());
        }

        match Self::project_config_path() {
            Some(path) => println!("  [FOUND] Project: {}", path.display()),
            None => println!("  [     ] Project: ./tmclass.toml or ./.tmclass.toml"),
        }

        if let Some(path) = Self::global_config_path() {
            let state = if path.exists() { "FOUND" } else { "     " };
            println!("  [{}] Global:  {}", state, path.display());
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_toml(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_defaults_without_files() {
        let config: FileConfig = ConfigLoader::figment(None, None, None).extract().unwrap();
        assert_eq!(config.fetch.timeout_seconds, 10);
        assert_eq!(config.completion.timeout_seconds, 60);
        assert_eq!(config.completion.max_completion_tokens, 4000);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("tmclass"));
    }

    #[test]
    fn test_explicit_file_overrides_project_file() {
        let dir = tempfile::tempdir().unwrap();
        let project = write_toml(
            &dir,
            "tmclass.toml",
            "[completion]\nmodel = \"project-model\"\n\n[fetch]\ntimeout_seconds = 5\n",
        );
        let explicit = write_toml(&dir, "custom.toml", "[completion]\nmodel = \"explicit-model\"\n");

        let config: FileConfig =
            ConfigLoader::figment(None, Some(&project), Some(&explicit)).extract().unwrap();

        assert_eq!(config.completion.model, "explicit-model");
        // Untouched keys keep the lower layer's value
        assert_eq!(config.fetch.timeout_seconds, 5);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let result: Result<FileConfig, _> =
            ConfigLoader::figment(None, None, Some(&missing)).extract();
        assert!(result.is_err());
    }

    #[test]
    fn test_env_maps_onto_completion_section() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("AZURE_AI_ENDPOINT", "https://example.services.ai.azure.com/api/projects/p");
            jail.set_env("AZURE_AI_MODEL", "gpt-4o-mini");
            jail.set_env("AZURE_AI_UNRELATED", "ignored");

            let config: FileConfig = ConfigLoader::figment(None, None, None).extract()?;
            assert_eq!(
                config.completion.endpoint.as_deref(),
                Some("https://example.services.ai.azure.com/api/projects/p")
            );
            assert_eq!(config.completion.model, "gpt-4o-mini");
            Ok(())
        });
    }
}
