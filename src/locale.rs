//! Language tags.

use crate::Error;
use std::fmt;
use std::str::FromStr;

/// A language plus region pair such as `en-US`.
///
/// The language is stored lowercase and the region uppercase. The region may be empty.
///
/// # Examples
///
/// ```rust
/// use readable::Locale;
///
/// let locale: Locale = "ru_ru".parse().unwrap();
/// assert_eq!(locale, Locale::new("ru", "RU"));
/// assert_eq!(locale.to_string(), "ru-RU");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Locale {
    language: String,
    region: String,
}

impl Locale {
    pub fn new(language: &str, region: &str) -> Self {
        Locale {
            language: language.to_ascii_lowercase(),
            region: region.to_ascii_uppercase(),
        }
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.language, self.region)
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(['-', '_']);
        let language = parts.next().unwrap_or_default();
        let region = parts.next().unwrap_or_default();

        let valid = |part: &str| part.chars().all(|c| c.is_ascii_alphanumeric());
        if language.is_empty() || !valid(language) || !valid(region) || parts.next().is_some() {
            return Err(Error::custom(format!("invalid language tag: {:?}", s)));
        }
        Ok(Locale::new(language, region))
    }
}
