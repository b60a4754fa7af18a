use std::io;
use std::path::PathBuf;

use crate::ini::IniError;

/// Failure to read one configuration or color file.
///
/// These never escape the catalog: every probe that fails is logged and
/// treated as "this source had nothing".
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Ini {
        path: PathBuf,
        #[source]
        source: IniError,
    },
}

pub type Result<T> = std::result::Result<T, ThemeError>;
