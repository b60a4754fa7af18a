//! Theme name handling.

/// Lowercase and drop spaces and hyphens, for loose name comparison.
///
/// `"Breeze Dark"`, `"breeze-dark"` and `"BREEZEDARK"` all become
/// `"breezedark"`. Underscores are kept.
pub fn normalize(name: &str) -> String {
    name.to_lowercase().replace([' ', '-'], "")
}

/// Lowercased, space-to-hyphen slug.
pub fn theme_id(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

/// Synthesized look-and-feel package identifier for a theme.
pub fn package_id(name: &str) -> String {
    format!("org.kde.{}.desktop", normalize(name))
}

/// Guess a theme name from a look-and-feel package identifier.
///
/// Takes the third dot-separated part, strips `desktop` and surrounding
/// dots, and hyphenates `dark`: `org.kde.breezedark.desktop` becomes
/// `breeze-dark`. Identifiers with fewer than three parts yield `None`.
pub fn theme_from_package(package: &str) -> Option<String> {
    let part = package.split('.').nth(2)?;
    let name = part.replace("desktop", "");
    let name = name.trim_matches('.');
    Some(name.replace("dark", "-dark"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("Breeze Dark"), "breezedark");
        assert_eq!(normalize("breeze-dark"), "breezedark");
        assert_eq!(normalize("BREEZEDARK"), "breezedark");
        assert_eq!(normalize("Breeze-Dark"), "breezedark");
        assert_eq!(normalize("breeze_dark"), "breeze_dark");
    }

    #[test]
    fn test_theme_id() {
        assert_eq!(theme_id("Breeze Dark"), "breeze-dark");
        assert_eq!(theme_id("Oxygen"), "oxygen");
    }

    #[test]
    fn test_package_id() {
        assert_eq!(package_id("Breeze Dark"), "org.kde.breezedark.desktop");
    }

    #[test]
    fn test_theme_from_package() {
        assert_eq!(
            theme_from_package("org.kde.breezedark.desktop").as_deref(),
            Some("breeze-dark")
        );
        assert_eq!(
            theme_from_package("org.kde.oxygen.desktop").as_deref(),
            Some("oxygen")
        );
        assert_eq!(
            theme_from_package("org.kde.breeze").as_deref(),
            Some("breeze")
        );
    }

    #[test]
    fn test_theme_from_package_too_short() {
        assert_eq!(theme_from_package("breeze"), None);
        assert_eq!(theme_from_package("org.kde"), None);
    }
}
