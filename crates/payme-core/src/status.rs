//! Invoice Status Tones
//!
//! Maps the backend's status strings onto the stylesheet's pill classes. The
//! pill always shows the raw status text; only the tone is derived.

use serde::{Deserialize, Serialize};

/// Visual tone of the status pill
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusTone {
    /// Terminal success (payment went through)
    Success,
    /// Terminal failure (payment failed or the invoice expired)
    Error,
    /// In-flight (checkout started, outcome pending)
    Warning,
    /// Anything else, including statuses this page does not know about
    Neutral,
}

impl StatusTone {
    /// Classify a raw status string
    pub fn for_status(status: &str) -> Self {
        match status {
            "SUCCEEDED" => StatusTone::Success,
            "FAILED" | "EXPIRED" => StatusTone::Error,
            "PENDING" => StatusTone::Warning,
            _ => StatusTone::Neutral,
        }
    }

    /// Stylesheet class for this tone
    pub fn css_class(self) -> &'static str {
        match self {
            StatusTone::Success => "pill-green",
            StatusTone::Error => "pill-red",
            StatusTone::Warning => "pill-amber",
            StatusTone::Neutral => "pill-gray",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_statuses() {
        assert_eq!(StatusTone::for_status("SUCCEEDED"), StatusTone::Success);
        assert_eq!(StatusTone::for_status("FAILED"), StatusTone::Error);
        assert_eq!(StatusTone::for_status("EXPIRED"), StatusTone::Error);
        assert_eq!(StatusTone::for_status("PENDING"), StatusTone::Warning);
    }

    #[test]
    fn test_unknown_statuses_are_neutral() {
        assert_eq!(StatusTone::for_status("UNKNOWN"), StatusTone::Neutral);
        assert_eq!(StatusTone::for_status("CREATED"), StatusTone::Neutral);
        assert_eq!(StatusTone::for_status(""), StatusTone::Neutral);
        assert_eq!(StatusTone::for_status("succeeded"), StatusTone::Neutral);
    }

    #[test]
    fn test_css_classes() {
        assert_eq!(StatusTone::Success.css_class(), "pill-green");
        assert_eq!(StatusTone::Error.css_class(), "pill-red");
        assert_eq!(StatusTone::Warning.css_class(), "pill-amber");
        assert_eq!(StatusTone::Neutral.css_class(), "pill-gray");
    }
}
