//! Core types for the selector cascade.

use serde::{Deserialize, Serialize};

use geocascade_source::{City, Country, Region};

/// Reserved option value marking the zone manual-entry escape hatch.
pub const MANUAL_ENTRY_VALUE: &str = "manual";

/// The four dependent selector levels, from ancestor to descendant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectorLevel {
    Country,
    Region,
    City,
    Zone,
}

impl SelectorLevel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Country => "country",
            Self::Region => "region",
            Self::City => "city",
            Self::Zone => "zone",
        }
    }
}

impl std::fmt::Display for SelectorLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Load status of one selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectorStatus {
    /// No load attempted (or invalidated by an ancestor change).
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// Options are populated and valid.
    Ready,
    /// The last fetch failed; an error placeholder is shown.
    Failed,
}

/// One selectable entry: opaque value plus display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorOption {
    pub value: String,
    pub label: String,
}

impl SelectorOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Synthetic option for free-text input: value and label are the text.
    pub fn verbatim(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            value: text.clone(),
            label: text,
        }
    }
}

impl From<Country> for SelectorOption {
    fn from(country: Country) -> Self {
        Self {
            value: country.code,
            label: country.name,
        }
    }
}

impl From<Region> for SelectorOption {
    fn from(region: Region) -> Self {
        Self {
            value: region.code,
            label: region.name,
        }
    }
}

impl From<City> for SelectorOption {
    fn from(city: City) -> Self {
        Self {
            value: city.id.to_string(),
            label: city.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_from_city_stringifies_id() {
        let opt: SelectorOption = City {
            id: 2_988_507,
            name: "Paris".to_string(),
        }
        .into();
        assert_eq!(opt.value, "2988507");
        assert_eq!(opt.label, "Paris");
    }

    #[test]
    fn verbatim_option_mirrors_text() {
        let opt = SelectorOption::verbatim("Quartier Latin");
        assert_eq!(opt.value, opt.label);
        assert_eq!(opt.value, "Quartier Latin");
    }

    #[test]
    fn level_display() {
        assert_eq!(SelectorLevel::Region.to_string(), "region");
    }
}
