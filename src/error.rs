use std::fmt;

#[derive(Debug)]
pub enum BookingError {
    MissingField(&'static str),
    InvalidDate(String),
    InvalidPassengers(String),
    InvalidEmail(String),
    InvalidLanguage(String),
    InvalidToken { kind: &'static str, token: String },
    SlotOutOfRange { category: &'static str, index: usize, len: usize },
    Preferences(String),
    Serialization(String),
    Validation(String),
}

impl fmt::Display for BookingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "{field} is required"),
            Self::InvalidDate(date) => write!(
                f,
                "invalid date \"{date}\" — must be YYYY-MM-DD format (e.g. 2026-03-01)"
            ),
            Self::InvalidPassengers(msg) => write!(f, "invalid passenger counts: {msg}"),
            Self::InvalidEmail(email) => write!(
                f,
                "invalid email address \"{email}\" — expected something like name@example.com"
            ),
            Self::InvalidLanguage(code) => write!(
                f,
                "unsupported language \"{code}\" — choose one of: en, hi, ur, te"
            ),
            Self::InvalidToken { kind, token } => write!(f, "invalid {kind}: {token}"),
            Self::SlotOutOfRange {
                category,
                index,
                len,
            } => write!(
                f,
                "no {category} name slot at position {index} (only {len} selected)"
            ),
            Self::Preferences(detail) => write!(
                f,
                "could not access the preference file — {detail}. \
                 Use --prefs or SKYVOYAGE_PREFS to point at a writable location"
            ),
            Self::Serialization(detail) => write!(f, "failed to serialize output — {detail}"),
            Self::Validation(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for BookingError {}

impl From<serde_json::Error> for BookingError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
