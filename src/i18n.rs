use serde::{Deserialize, Serialize};

use crate::error::BookingError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
    Ur,
    Te,
}

impl Language {
    pub const ALL: [Language; 4] = [Self::En, Self::Hi, Self::Ur, Self::Te];

    pub fn from_code(code: &str) -> Result<Self, BookingError> {
        match code.trim().to_lowercase().as_str() {
            "en" => Ok(Self::En),
            "hi" => Ok(Self::Hi),
            "ur" => Ok(Self::Ur),
            "te" => Ok(Self::Te),
            _ => Err(BookingError::InvalidLanguage(code.to_string())),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
            Self::Ur => "ur",
            Self::Te => "te",
        }
    }

    /// Name of the language in its own script.
    pub fn native_name(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Hi => "हिन्दी",
            Self::Ur => "اردو",
            Self::Te => "తెలుగు",
        }
    }

    fn table(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::En => EN,
            Self::Hi => HI,
            Self::Ur => UR,
            Self::Te => TE,
        }
    }
}

const EN: &[(&str, &str)] = &[
    ("flights", "Flights"),
    ("offers", "Offers"),
    ("manageBookings", "Manage Bookings"),
    ("from", "From"),
    ("to", "To"),
    ("departDate", "Departure Date"),
    ("returnDate", "Return Date"),
    ("passengers", "Passengers"),
    ("cabinClass", "Cabin Class"),
    ("searchFlights", "Search Flights"),
    ("findBooking", "Find Your Booking"),
    ("bookingReference", "Booking Reference"),
    ("specialOffers", "Special Offers & Deals"),
    ("greeting", "Hello! How can I help you with your flight booking today?"),
];

const HI: &[(&str, &str)] = &[
    ("flights", "उड़ानें"),
    ("offers", "ऑफर"),
    ("manageBookings", "बुकिंग प्रबंधित करें"),
    ("from", "से"),
    ("to", "तक"),
    ("departDate", "प्रस्थान तिथि"),
    ("returnDate", "वापसी तिथि"),
    ("passengers", "यात्री"),
    ("cabinClass", "केबिन श्रेणी"),
    ("searchFlights", "उड़ानें खोजें"),
    ("findBooking", "अपनी बुकिंग खोजें"),
    ("bookingReference", "बुकिंग संदर्भ"),
    ("specialOffers", "विशेष ऑफर और डील"),
    ("greeting", "नमस्ते! मैं आज आपकी उड़ान बुकिंग में कैसे मदद कर सकता हूं?"),
];

const UR: &[(&str, &str)] = &[
    ("flights", "پروازیں"),
    ("offers", "آفرز"),
    ("manageBookings", "بکنگ منیج کریں"),
    ("from", "سے"),
    ("to", "تک"),
    ("departDate", "روانگی کی تاریخ"),
    ("returnDate", "واپسی کی تاریخ"),
    ("passengers", "مسافر"),
    ("cabinClass", "کیبن کلاس"),
    ("searchFlights", "پروازیں تلاش کریں"),
    ("findBooking", "اپنی بکنگ تلاش کریں"),
    ("bookingReference", "بکنگ حوالہ"),
    ("specialOffers", "خصوصی آفرز اور ڈیلز"),
    ("greeting", "ہیلو! میں آج آپ کی پرواز کی بکنگ میں کیسے مدد کر سکتا ہوں؟"),
];

const TE: &[(&str, &str)] = &[
    ("flights", "విమానాలు"),
    ("offers", "ఆఫర్లు"),
    ("manageBookings", "బుకింగ్‌లను నిర్వహించండి"),
    ("from", "నుండి"),
    ("to", "వరకు"),
    ("departDate", "నిష్క్రమణ తేదీ"),
    ("returnDate", "తిరిగి వచ్చే తేదీ"),
    ("passengers", "ప్రయాణికులు"),
    ("cabinClass", "కేబిన్ తరగతి"),
    ("searchFlights", "విమానాలను శోధించండి"),
    ("findBooking", "మీ బుకింగ్‌ను కనుగొనండి"),
    ("bookingReference", "బుకింగ్ రిఫరెన్స్"),
    ("specialOffers", "ప్రత్యేక ఆఫర్లు మరియు డీల్స్"),
    ("greeting", "హలో! నేను ఈరోజు మీ విమానం బుకింగ్లో ఎలా సహాయం చేయగలను?"),
];

/// Active language, passed to whatever renders user-facing text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Locale {
    language: Language,
}

impl Locale {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Looks up `key`, returning the key itself when no translation exists.
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        self.language
            .table()
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
            .unwrap_or(key)
    }
}
