//! KDE Plasma theme discovery and color parsing.
//!
//! The entry point is [`ThemeCatalog`], which scans the XDG search roots for
//! `plasma/desktoptheme/<Theme>` directories, parses their color files and
//! marks the theme Plasma reports as current.
//!
//! ```ignore
//! let catalog = kde_colors_theme::system_catalog();
//! for (name, theme) in catalog.load_themes() {
//!     println!("{name}{}", if theme.is_current { " *" } else { "" });
//! }
//! ```

mod catalog;
mod color;
mod colors_file;
mod current;
pub mod discovery;
mod error;
pub mod ini;
mod names;
mod types;

pub use catalog::{ThemeCatalog, Themes};
pub use color::parse_color_value;
pub use colors_file::parse_colors_file;
pub use current::{current_theme, current_theme_with_source, CurrentThemeSource};
pub use error::{Result, ThemeError};
pub use names::{normalize, package_id, theme_from_package, theme_id};
pub use types::{ColorSection, ColorSections, ColorValue, Rgb, ThemeRecord};

use kde_colors_platform::{StdEnvironment, StdFileSystem, Xdg};

/// Catalog over the real file system and process environment.
pub type SystemCatalog = ThemeCatalog<StdFileSystem, Xdg<StdEnvironment>>;

pub fn system_catalog() -> SystemCatalog {
    let fs = StdFileSystem;
    let xdg = Xdg::new(StdEnvironment, &fs);
    ThemeCatalog::new(fs, xdg)
}
