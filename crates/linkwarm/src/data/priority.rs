use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Requested priority of a prefetch.
///
/// Only the exact hint `"high"` selects [`Priority::High`]. Every other hint,
/// including an absent one, is a standard prefetch.
///
/// # Examples
///
/// ```
/// use linkwarm::Priority;
///
/// assert_eq!("high".parse::<Priority>().unwrap(), Priority::High);
/// assert_eq!("HIGH".parse::<Priority>().unwrap(), Priority::Standard);
/// assert_eq!(Priority::from_hint(None), Priority::Standard);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "String")]
pub enum Priority {
    /// Dispatched through the capability-selected strategy and recorded in
    /// the registry on success.
    #[default]
    Standard,

    /// Dispatched through fetch (or XHR) as a detached task, never recorded.
    High,
}

impl Priority {
    pub const HIGH_HINT: &'static str = "high";

    pub fn from_hint(hint: Option<&str>) -> Self {
        match hint {
            Some(Self::HIGH_HINT) => Priority::High,
            _ => Priority::Standard,
        }
    }

    pub fn is_high(self) -> bool {
        matches!(self, Priority::High)
    }
}

impl FromStr for Priority {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_hint(Some(s)))
    }
}

impl From<String> for Priority {
    fn from(s: String) -> Self {
        Self::from_hint(Some(&s))
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Standard => write!(f, "standard"),
            Priority::High => write!(f, "high"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_exact_high_is_high() {
        assert_eq!(Priority::from_hint(Some("high")), Priority::High);
        assert_eq!(Priority::from_hint(Some("High")), Priority::Standard);
        assert_eq!(Priority::from_hint(Some(" high")), Priority::Standard);
        assert_eq!(Priority::from_hint(Some("low")), Priority::Standard);
        assert_eq!(Priority::from_hint(Some("")), Priority::Standard);
        assert_eq!(Priority::from_hint(None), Priority::Standard);
    }

    #[test]
    fn test_default_is_standard() {
        assert_eq!(Priority::default(), Priority::Standard);
        assert!(!Priority::default().is_high());
    }

    #[test]
    fn test_display() {
        assert_eq!(Priority::Standard.to_string(), "standard");
        assert_eq!(Priority::High.to_string(), "high");
    }
}
