//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "haul-quote";
const PROJECT_FILES: [&str; 2] = ["haul-quote.toml", ".haul-quote.toml"];
const ENV_PREFIX: &str = "HAUL_QUOTE_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `HAUL_QUOTE_*` environment variables (`__` separates sections,
    ///    e.g. `HAUL_QUOTE_INTAKE__ENDPOINT`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./haul-quote.toml` or `./.haul-quote.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/haul-quote/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let global = Self::global_config_path().filter(|p| p.exists());
        let project = Self::project_config_path();

        Self::figment(global.as_deref(), project.as_deref(), config_path.map(PathBuf::as_path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(Box::new)
    }

    /// Merge the file layers in order, lowest priority first
    fn figment(global: Option<&Path>, project: Option<&Path>, explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        for path in [global, project, explicit].into_iter().flatten() {
            figment = figment.merge(Toml::file(path));
        }

        figment
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/haul-quote/config.toml if set,
    /// otherwise falls back to ~/.config/haul-quote/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
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

        println!("  [ENV  ] {}* environment variables", ENV_PREFIX);

        if let Some(path) = explicit {
            let mark = if path.exists() { "FOUND" } else { "     " };
            println!("  [{}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./{} or ./{}", PROJECT_FILES[0], PROJECT_FILES[1]);
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn toml_file(contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert!(config.intake.endpoint.is_none());
        assert!(config.analytics.enabled);
        assert!(config.output.color);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("haul-quote"));
    }

    #[test]
    fn test_later_files_override_earlier() {
        let global = toml_file(
            r#"
[intake]
endpoint = "https://global.example.com/hook"
timeout_seconds = 10

[output]
color = false
"#,
        );
        let explicit = toml_file(
            r#"
[intake]
endpoint = "https://explicit.example.com/hook"
"#,
        );

        let config: FileConfig =
            ConfigLoader::figment(Some(global.path()), None, Some(explicit.path()))
                .extract()
                .unwrap();

        assert_eq!(
            config.intake.endpoint.as_deref(),
            Some("https://explicit.example.com/hook")
        );
        // Keys absent from the higher layer survive from the lower one
        assert_eq!(config.intake.timeout_seconds, Some(10));
        assert!(!config.output.color);
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let broken = toml_file("[intake\nendpoint = ");
        let result: Result<FileConfig, _> =
            ConfigLoader::figment(None, None, Some(broken.path())).extract();
        assert!(result.is_err());
    }
}
