//! Page sections selected by the top navigation.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unknown section slug.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown section: {0}")]
pub struct ParseSectionError(pub String);

/// One of the panels of the single-page shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    Catalog,
    About,
    Contacts,
}

impl Section {
    /// All sections in navigation order.
    pub const ALL: [Self; 4] = [Self::Home, Self::Catalog, Self::About, Self::Contacts];

    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Catalog => "catalog",
            Self::About => "about",
            Self::Contacts => "contacts",
        }
    }

    /// URL path the section is served at.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Catalog => "/catalog",
            Self::About => "/about",
            Self::Contacts => "/contacts",
        }
    }

    /// Navigation label.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Главная",
            Self::Catalog => "Каталог",
            Self::About => "О нас",
            Self::Contacts => "Контакты",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Section {
    type Err = ParseSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.slug() == s)
            .ok_or_else(|| ParseSectionError(s.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_slug() {
        for section in Section::ALL {
            assert_eq!(section.slug().parse::<Section>().unwrap(), section);
        }
    }

    #[test]
    fn test_parse_unknown() {
        let err = "checkout".parse::<Section>().unwrap_err();
        assert_eq!(err.to_string(), "unknown section: checkout");
        assert!("Catalog".parse::<Section>().is_err());
    }

    #[test]
    fn test_paths() {
        assert_eq!(Section::Home.path(), "/");
        assert_eq!(Section::Contacts.path(), "/contacts");
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Section::About).unwrap(), "\"about\"");
        let s: Section = serde_json::from_str("\"catalog\"").unwrap();
        assert_eq!(s, Section::Catalog);
    }

    #[test]
    fn test_default_is_home() {
        assert_eq!(Section::default(), Section::Home);
    }
}
