use std::path::PathBuf;

use kde_colors_platform::BaseDirs;
use serde::Serialize;

use crate::config::UserConfig;
use crate::output::{bullet_list, Render};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigPath {
    pub config_file: PathBuf,
}

impl ConfigPath {
    pub fn new(config_file: PathBuf) -> Self {
        Self { config_file }
    }
}

impl Render for ConfigPath {
    fn to_text(&self) -> String {
        self.config_file.display().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigReport {
    pub config_file: PathBuf,
    pub config_file_exists: bool,
    pub settings: UserConfig,
    pub config_home: PathBuf,
    pub config_dirs: Vec<PathBuf>,
    pub data_home: PathBuf,
    pub data_dirs: Vec<PathBuf>,
}

pub fn run(dirs: &impl BaseDirs, config: &UserConfig, config_file: PathBuf) -> ConfigReport {
    ConfigReport {
        config_file_exists: config_file.is_file(),
        config_file,
        settings: config.clone(),
        config_home: dirs.config_home(),
        config_dirs: dirs.config_dirs(),
        data_home: dirs.data_home(),
        data_dirs: dirs.data_dirs(),
    }
}

impl Render for ConfigReport {
    fn to_text(&self) -> String {
        let mut header = format!("Config file: {}", self.config_file.display());
        if !self.config_file_exists {
            header.push_str(" (not created, using defaults)");
        }

        let mut lines = vec![
            header,
            String::new(),
            format!("log_level = \"{}\"", self.settings.log_level.label()),
            format!("json = {}", self.settings.json),
            String::new(),
            "XDG directories:".to_string(),
            format!("- Config home: {}", self.config_home.display()),
        ];
        lines.extend(bullet_list("Config dirs", &self.config_dirs));
        lines.push(format!("- Data home: {}", self.data_home.display()));
        lines.extend(bullet_list("Data dirs", &self.data_dirs));
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogLevel;
    use kde_colors_platform::{MapEnvironment, MemoryFileSystem, Xdg};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn xdg() -> Xdg<MapEnvironment> {
        Xdg::new(MapEnvironment::new(), &MemoryFileSystem::new())
    }

    #[test]
    fn test_report_text() {
        let config = UserConfig {
            log_level: LogLevel::Debug,
            json: true,
        };
        let report = run(&xdg(), &config, PathBuf::from("/nonexistent/kde-colors/config.toml"));

        assert_eq!(
            report.to_text(),
            "Config file: /nonexistent/kde-colors/config.toml (not created, using defaults)\n\
             \n\
             log_level = \"debug\"\n\
             json = true\n\
             \n\
             XDG directories:\n\
             - Config home: /home/user/.config\n\
             - Config dirs:\n  - /etc/xdg\n\
             - Data home: /home/user/.local/share\n\
             - Data dirs:\n  - /usr/local/share\n  - /usr/share"
        );
    }

    #[test]
    fn test_report_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "json = false\n").unwrap();

        let report = run(&xdg(), &UserConfig::default(), path.clone());
        assert!(report.config_file_exists);
        assert_eq!(
            report.to_text().lines().next(),
            Some(format!("Config file: {}", path.display()).as_str())
        );
    }

    #[test]
    fn test_report_json() {
        let report = run(&xdg(), &UserConfig::default(), PathBuf::from("/c/config.toml"));
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(value["config_file"], "/c/config.toml");
        assert_eq!(value["settings"]["log_level"], "warn");
        assert_eq!(value["settings"]["json"], false);
        assert_eq!(value["data_dirs"][1], "/usr/share");
    }

    #[test]
    fn test_path_only() {
        let path = ConfigPath::new(PathBuf::from("/c/config.toml"));
        assert_eq!(path.to_text(), "/c/config.toml");
        assert_eq!(
            path.to_json().unwrap(),
            "{\n  \"config_file\": \"/c/config.toml\"\n}"
        );
    }
}
