//! Minimal INI reader.
//!
//! KDE writes its configuration in a plain INI dialect. The rules here
//! follow what `kdeglobals`, `plasmarc` and `.colors` files need:
//!
//! - `[Section]` headers, names are case-sensitive
//! - `key=value` or `key: value`, split at the first delimiter
//! - keys are lowercased, keys and values are trimmed
//! - `#` and `;` start full-line comments
//! - lines indented deeper than their option continue its value, blank
//!   lines inside a value are kept
//! - `[DEFAULT]` options are visible from every section
//!
//! Duplicate sections or keys, options outside a section and lines without a
//! delimiter are rejected for the whole file.

use indexmap::IndexMap;

pub const DEFAULT_SECTION: &str = "DEFAULT";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IniError {
    #[error("line {line}: option outside of any section")]
    MissingSectionHeader { line: usize },

    #[error("line {line}: expected `key = value`, got {content:?}")]
    Syntax { line: usize, content: String },

    #[error("line {line}: section [{section}] already defined")]
    DuplicateSection { line: usize, section: String },

    #[error("line {line}: option `{option}` already defined in [{section}]")]
    DuplicateOption {
        line: usize,
        section: String,
        option: String,
    },
}

type Options = IndexMap<String, String>;

/// A parsed INI document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ini {
    defaults: Options,
    sections: IndexMap<String, Options>,
}

impl Ini {
    pub fn parse(content: &str) -> Result<Self, IniError> {
        let mut ini = Ini::default();
        let mut seen_sections: Vec<String> = Vec::new();
        let mut current: Option<String> = None;
        let mut last_key: Option<String> = None;
        let mut indent_level = 0;

        for (idx, raw_line) in content.lines().enumerate() {
            let line = idx + 1;
            let trimmed = raw_line.trim();

            if trimmed.is_empty() {
                if let Some(value) = ini.value_mut(current.as_deref(), last_key.as_deref()) {
                    value.push('\n');
                }
                continue;
            }
            if trimmed.starts_with('#') || trimmed.starts_with(';') {
                continue;
            }

            let indent = raw_line.len() - raw_line.trim_start().len();
            if indent > indent_level {
                if let Some(value) = ini.value_mut(current.as_deref(), last_key.as_deref()) {
                    value.push('\n');
                    value.push_str(trimmed);
                    continue;
                }
            }
            indent_level = indent;

            if let Some(name) = section_header(trimmed) {
                if seen_sections.iter().any(|s| s == name) {
                    return Err(IniError::DuplicateSection {
                        line,
                        section: name.to_string(),
                    });
                }
                seen_sections.push(name.to_string());
                if name != DEFAULT_SECTION {
                    ini.sections.insert(name.to_string(), Options::new());
                }
                current = Some(name.to_string());
                last_key = None;
                continue;
            }

            let Some(section) = current.as_deref() else {
                return Err(IniError::MissingSectionHeader { line });
            };

            let Some((key, value)) = split_option(trimmed) else {
                return Err(IniError::Syntax {
                    line,
                    content: trimmed.to_string(),
                });
            };

            let options = ini.options_mut(section);
            if options.contains_key(&key) {
                return Err(IniError::DuplicateOption {
                    line,
                    section: section.to_string(),
                    option: key,
                });
            }
            options.insert(key.clone(), value.to_string());
            last_key = Some(key);
        }

        ini.trim_trailing_blank_lines();
        Ok(ini)
    }

    fn value_mut(&mut self, section: Option<&str>, key: Option<&str>) -> Option<&mut String> {
        let (section, key) = (section?, key?);
        self.options_mut(section).get_mut(key)
    }

    /// Blank lines kept open for a continuation that never came.
    fn trim_trailing_blank_lines(&mut self) {
        let options = self
            .sections
            .values_mut()
            .chain(std::iter::once(&mut self.defaults));
        for value in options.flat_map(|options| options.values_mut()) {
            let len = value.trim_end().len();
            value.truncate(len);
        }
    }

    fn options_mut(&mut self, section: &str) -> &mut Options {
        if section == DEFAULT_SECTION {
            &mut self.defaults
        } else {
            self.sections.entry(section.to_string()).or_default()
        }
    }

    /// Section names in file order, excluding `[DEFAULT]`.
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Value of `key` in `section`, falling back to `[DEFAULT]`.
    ///
    /// `key` is matched case-insensitively.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        let options = self.sections.get(section)?;
        let key = key.to_lowercase();
        options
            .get(&key)
            .or_else(|| self.defaults.get(&key))
            .map(String::as_str)
    }

    /// Options of a section in file order, followed by inherited defaults.
    pub fn section(&self, name: &str) -> Option<Vec<(&str, &str)>> {
        let options = self.sections.get(name)?;
        let mut items: Vec<(&str, &str)> = options
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        items.extend(
            self.defaults
                .iter()
                .filter(|(k, _)| !options.contains_key(*k))
                .map(|(k, v)| (k.as_str(), v.as_str())),
        );
        Some(items)
    }
}

fn section_header(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('[')?;
    let end = rest.rfind(']')?;
    let name = &rest[..end];
    (!name.is_empty()).then_some(name)
}

fn split_option(line: &str) -> Option<(String, &str)> {
    let pos = line.find(['=', ':'])?;
    let key = line[..pos].trim();
    if key.is_empty() {
        return None;
    }
    Some((key.to_lowercase(), line[pos + 1..].trim()))
}
