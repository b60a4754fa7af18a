//! Rendering and writing of command results.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::cli::OutputFormat;
use crate::error::CommandError;

/// A command result that can be shown as text or JSON.
pub trait Render: Serialize {
    fn to_text(&self) -> String;

    fn to_json(&self) -> Result<String, CommandError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn render(&self, format: OutputFormat) -> Result<String, CommandError> {
        match format {
            OutputFormat::Text => Ok(self.to_text()),
            OutputFormat::Json => self.to_json(),
        }
    }
}

/// Write rendered output to `path`, creating parent directories, or to stdout.
pub fn write_output(content: &str, path: Option<&Path>) -> Result<(), CommandError> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "writing output to file");
            write_file(content, path).map_err(|source| CommandError::Write {
                path: path.to_path_buf(),
                source,
            })
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{content}")
                .and_then(|_| stdout.flush())
                .map_err(CommandError::Stdout)
        }
    }
}

fn write_file(content: &str, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, format!("{content}\n"))
}

/// Bulleted `  - path` lines under a `- title:` heading.
pub(crate) fn bullet_list(title: &str, paths: &[PathBuf]) -> Vec<String> {
    let mut lines = vec![format!("- {title}:")];
    lines.extend(paths.iter().map(|path| format!("  - {}", path.display())));
    lines
}
