//! Capability interfaces used by kde-colors to reach the outside world.
//!
//! Everything the theme engine knows about the host goes through two
//! traits:
//!
//! - [`FileSystem`] - read-only file and directory probing
//! - [`Environment`] - environment variable lookup
//!
//! [`Xdg`] builds the XDG base-directory search paths on top of both.
//! The `Std*` types talk to the real system; the `Memory`/`Map` types are
//! in-process doubles for tests.
//!
//! # Example
//!
//! ```ignore
//! use kde_colors_platform::{BaseDirs, StdEnvironment, StdFileSystem, Xdg};
//!
//! let fs = StdFileSystem;
//! let xdg = Xdg::new(StdEnvironment, &fs);
//! println!("config home: {}", xdg.config_home().display());
//! ```

mod env;
mod fs;
mod glob;
mod memory;
mod xdg;

pub use env::{Environment, MapEnvironment, StdEnvironment};
pub use fs::{FileSystem, StdFileSystem};
pub use glob::wildcard_match;
pub use memory::MemoryFileSystem;
pub use xdg::{BaseDirs, Xdg, XDG_CONFIG_DIRS, XDG_CONFIG_HOME, XDG_DATA_DIRS, XDG_DATA_HOME};
