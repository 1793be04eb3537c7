//! Help desk: the keyword-routed support assistant and the FAQ list.

use serde::Serialize;
use tracing::debug;

use crate::error::BookingError;
use crate::fetch::{self, FetchOptions};
use crate::i18n::Language;

pub const CANCEL_REPLY: &str = "To cancel your booking or request a refund, please go to the 'Manage Bookings' section and enter your booking details. Depending on your fare type, fees may apply.";
pub const BAGGAGE_REPLY: &str = "Baggage allowance varies based on your ticket type and destination. Economy tickets typically include one carry-on (7kg) with options to purchase checked baggage. Business class usually includes 2 checked bags (23kg each).";
pub const CHECK_IN_REPLY: &str = "Online check-in opens 48 hours before departure and closes 1 hour before the flight. You can check in through our website or mobile app.";
pub const CHANGE_REPLY: &str = "To change your flight, go to the 'Manage Bookings' section on our website. Change fees may apply depending on your fare type.";
pub const FALLBACK_REPLY: &str = "Thank you for your message. For specific information about your booking, please visit the 'Manage Bookings' section or contact our customer support team.";

// First matching rule wins.
const RULES: [(&[&str], &str); 4] = [
    (&["cancel", "refund"], CANCEL_REPLY),
    (&["baggage", "luggage"], BAGGAGE_REPLY),
    (&["check-in"], CHECK_IN_REPLY),
    (&["change", "reschedule"], CHANGE_REPLY),
];

/// Picks the canned answer for `message` by case-insensitive keyword match.
pub fn reply(message: &str) -> &'static str {
    let lower = message.to_lowercase();
    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, answer)| *answer)
        .unwrap_or(FALLBACK_REPLY)
}

/// Opening line of a chat session in `language`.
pub fn greeting(language: Language) -> &'static str {
    match language {
        Language::En => "Hello! How can I help you with your flight booking today?",
        Language::Hi => "नमस्ते! मैं आज आपकी उड़ान बुकिंग में कैसे मदद कर सकता हूं?",
        Language::Ur => "ہیلو! میں آج آپ کی پرواز کی بکنگ میں کیسے مدد کر سکتا ہوں؟",
        Language::Te => "హలో! నేను ఈరోజు మీ విమానం బుకింగ్లో ఎలా సహాయం చేయగలను?",
    }
}

/// Answers `message` after the simulated typing delay. Blank messages are
/// rejected rather than answered.
pub async fn ask(message: &str, options: &FetchOptions) -> Result<&'static str, BookingError> {
    if message.trim().is_empty() {
        return Err(BookingError::MissingField("message"));
    }
    let answer = reply(message);
    debug!(fallback = answer == FALLBACK_REPLY, "support reply chosen");
    fetch::simulate_latency(options).await;
    Ok(answer)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

fn faq(question: &str, answer: &str) -> Faq {
    Faq {
        question: question.to_string(),
        answer: answer.to_string(),
    }
}

pub fn faqs() -> Vec<Faq> {
    vec![
        faq(
            "How do I change or cancel my booking?",
            "You can change or cancel your booking through the 'Manage Booking' section on our website. Enter your booking reference and last name to access your reservation. Please note that fees may apply depending on your fare type and how close to departure you make changes.",
        ),
        faq(
            "What is the baggage allowance?",
            "Baggage allowance varies depending on your ticket type and destination. For most economy flights, you're allowed one carry-on bag (max 7kg) and can purchase checked baggage. Business class typically includes 2 checked bags (23kg each). Check your booking confirmation for specific details.",
        ),
        faq(
            "How early should I arrive at the airport?",
            "For domestic flights, we recommend arriving 90 minutes before departure. For international flights, please arrive 3 hours before departure to allow time for check-in, security screening, and immigration procedures.",
        ),
        faq(
            "Do I need a visa for my destination?",
            "Visa requirements depend on your nationality and destination. It's your responsibility to ensure you have the necessary documentation. We recommend checking with the embassy or consulate of your destination country before traveling.",
        ),
    ]
}
