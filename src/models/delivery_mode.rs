/// How a lesson is delivered, as far as the reporting system cares.
///
/// Only the office keyword is recognized; every other mode collapses into
/// `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryMode {
    Office, // "ufficio"
    Other,  // Online, FAD, ...
}

impl DeliveryMode {
    const OFFICE_KEYWORD: &'static str = "ufficio";

    /// Classify a free-text mode (case-insensitive exact match).
    pub fn from_mode(mode: &str) -> Self {
        if mode.trim().to_lowercase() == Self::OFFICE_KEYWORD {
            DeliveryMode::Office
        } else {
            DeliveryMode::Other
        }
    }

    /// Value for the TIPOLOGIA column
    pub fn category_code(&self) -> &'static str {
        match self {
            DeliveryMode::Office => "1",
            DeliveryMode::Other => "4",
        }
    }

    /// Value for the SVOLGIMENTO SEDE LEZIONE column (empty when not in office)
    pub fn site_code(&self) -> &'static str {
        match self {
            DeliveryMode::Office => "1",
            DeliveryMode::Other => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn office_keyword_is_case_insensitive() {
        assert_eq!(DeliveryMode::from_mode("Ufficio"), DeliveryMode::Office);
        assert_eq!(DeliveryMode::from_mode("UFFICIO"), DeliveryMode::Office);
        assert_eq!(DeliveryMode::from_mode("ufficio"), DeliveryMode::Office);
    }

    #[test]
    fn anything_else_is_other() {
        for mode in ["Online", "FAD", "Ufficio 2", "in ufficio", ""] {
            assert_eq!(DeliveryMode::from_mode(mode), DeliveryMode::Other, "{mode}");
        }
    }

    #[test]
    fn codes_follow_mode() {
        assert_eq!(DeliveryMode::Office.category_code(), "1");
        assert_eq!(DeliveryMode::Office.site_code(), "1");
        assert_eq!(DeliveryMode::Other.category_code(), "4");
        assert_eq!(DeliveryMode::Other.site_code(), "");
    }
}
