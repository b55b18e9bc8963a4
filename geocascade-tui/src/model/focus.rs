//! Focus state definition

use geocascade_core::SelectorLevel;

/// The form field holding keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusField {
    #[default]
    Country,
    Region,
    City,
    Zone,
}

impl FocusField {
    /// Move focus down the form, wrapping.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Country => Self::Region,
            Self::Region => Self::City,
            Self::City => Self::Zone,
            Self::Zone => Self::Country,
        }
    }

    /// Move focus up the form, wrapping.
    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Self::Country => Self::Zone,
            Self::Region => Self::Country,
            Self::City => Self::Region,
            Self::Zone => Self::City,
        }
    }

    /// The cascade level this field drives.
    #[must_use]
    pub fn level(self) -> SelectorLevel {
        match self {
            Self::Country => SelectorLevel::Country,
            Self::Region => SelectorLevel::Region,
            Self::City => SelectorLevel::City,
            Self::Zone => SelectorLevel::Zone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_cycles_through_all_fields() {
        let mut f = FocusField::Country;
        for _ in 0..4 {
            f = f.next();
        }
        assert_eq!(f, FocusField::Country);
        assert_eq!(FocusField::Country.prev(), FocusField::Zone);
    }

    #[test]
    fn each_field_maps_to_its_level() {
        assert_eq!(FocusField::Country.level(), SelectorLevel::Country);
        assert_eq!(FocusField::Region.level(), SelectorLevel::Region);
        assert_eq!(FocusField::City.level(), SelectorLevel::City);
        assert_eq!(FocusField::Zone.level(), SelectorLevel::Zone);
    }
}
