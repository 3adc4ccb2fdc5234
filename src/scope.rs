use std::fmt;

const ANALYTICS_READONLY: &str = "https://www.googleapis.com/auth/analytics.readonly";

/// Google API scope requested during authorization.
///
/// The full catalog lives at
/// <https://developers.google.com/identity/protocols/googlescopes>; anything
/// not covered by a named variant goes through `Custom` or `Collection`.
#[derive(Debug, Clone)]
pub enum GoogleServiceScope {
    /// View Google Analytics data (read-only).
    GoogleAnalyticsRead,
    /// A single scope URL.
    Custom(String),
    /// Several scopes requested together.
    Collection(Vec<String>),
}

impl GoogleServiceScope {
    /// The space-joined form sent in OAuth requests.
    pub fn canonical(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for GoogleServiceScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GoogleAnalyticsRead => f.write_str(ANALYTICS_READONLY),
            Self::Custom(scope) => f.write_str(scope),
            Self::Collection(scopes) => f.write_str(&scopes.join(" ")),
        }
    }
}

/// Scopes are interchangeable whenever their canonical strings match,
/// regardless of which variant produced them.
impl PartialEq for GoogleServiceScope {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for GoogleServiceScope {}

impl From<&str> for GoogleServiceScope {
    fn from(scope: &str) -> Self {
        match scope {
            ANALYTICS_READONLY => Self::GoogleAnalyticsRead,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl From<Vec<String>> for GoogleServiceScope {
    fn from(scopes: Vec<String>) -> Self {
        Self::Collection(scopes)
    }
}
