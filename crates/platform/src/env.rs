//! Environment variable capability.

use std::collections::HashMap;

/// Lookup of environment variables.
pub trait Environment {
    /// Value of a variable, or `None` if unset or not valid unicode.
    fn var(&self, name: &str) -> Option<String>;
}

impl<T: Environment + ?Sized> Environment for &T {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}

/// Process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdEnvironment;

impl Environment for StdEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Environment backed by a map, for tests and sandboxed runs.
#[derive(Debug, Clone, Default)]
pub struct MapEnvironment {
    vars: HashMap<String, String>,
}

impl MapEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }
}

impl Environment for MapEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_environment_lookup() {
        let env = MapEnvironment::new().with_var("XDG_CONFIG_HOME", "/tmp/config");
        assert_eq!(env.var("XDG_CONFIG_HOME").as_deref(), Some("/tmp/config"));
        assert_eq!(env.var("XDG_DATA_HOME"), None);
    }

    #[test]
    fn test_std_environment_missing_var() {
        assert_eq!(
            StdEnvironment.var("KDE_COLORS_SURELY_UNSET_VARIABLE_1234"),
            None
        );
    }
}
