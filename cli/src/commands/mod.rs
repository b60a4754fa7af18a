pub mod config;
pub mod list;
pub mod paths;
pub mod theme;

use kde_colors_platform::{BaseDirs, FileSystem};
use kde_colors_theme::ThemeCatalog;

use crate::cli::{Commands, OutputFormat};
use crate::config::{config_path, UserConfig};
use crate::error::CommandError;
use crate::output::Render;

/// Run a command against `catalog` and render its result.
pub fn execute<F: FileSystem, D: BaseDirs>(
    command: &Commands,
    catalog: &ThemeCatalog<F, D>,
    config: &UserConfig,
    format: OutputFormat,
) -> Result<String, CommandError> {
    match command {
        Commands::List => list::run(catalog).render(format),
        Commands::Paths => paths::run(catalog).render(format),
        Commands::Theme { name } => theme::run(catalog, name.as_deref())?.render(format),
        Commands::Config { path: true } => config::ConfigPath::new(config_path()).render(format),
        Commands::Config { path: false } => {
            config::run(catalog.dirs(), config, config_path()).render(format)
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{catalog, sample_catalog};
    use super::*;
    use crate::error::ExitStatus;
    use kde_colors_platform::MemoryFileSystem;
    use pretty_assertions::assert_eq;

    fn run(command: Commands, format: OutputFormat) -> Result<String, CommandError> {
        execute(&command, &sample_catalog(), &UserConfig::default(), format)
    }

    #[test]
    fn test_list_dispatch() {
        let text = run(Commands::List, OutputFormat::Text).unwrap();
        assert!(text.starts_with("Available desktop themes"));

        let json: serde_json::Value =
            serde_json::from_str(&run(Commands::List, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json["current"], "Breeze");
    }

    #[test]
    fn test_theme_dispatch_not_found() {
        let err = run(
            Commands::Theme {
                name: Some("nonexistent".into()),
            },
            OutputFormat::Text,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Theme 'nonexistent' not found");
        assert_eq!(err.exit_status(), ExitStatus::ThemeNotFound);
    }

    #[test]
    fn test_theme_dispatch_without_current() {
        let err = execute(
            &Commands::Theme { name: None },
            &catalog(MemoryFileSystem::new()),
            &UserConfig::default(),
            OutputFormat::Json,
        )
        .unwrap_err();
        assert!(matches!(err, CommandError::NoCurrentTheme));
    }

    #[test]
    fn test_config_path_dispatch() {
        let text = run(Commands::Config { path: true }, OutputFormat::Text).unwrap();
        assert_eq!(text, config_path().display().to_string());
    }
}
