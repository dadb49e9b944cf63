//! Outbound Messaging Links
//!
//! Fire-and-forget URL templates for the WhatsApp/Viber hand-off and
//! the phone dial link. No response is ever read back.

use urlencoding::encode;

/// WhatsApp deep link with a pre-filled message body
pub fn whatsapp_link(phone: &str, text: &str) -> String {
    format!("https://wa.me/{}?text={}", phone, encode(text))
}

/// Viber forward link with a pre-filled message body
pub fn viber_link(text: &str) -> String {
    format!("viber://forward?text={}", encode(text))
}

/// Phone dial link
pub fn dial_link(phone: &str) -> String {
    format!("tel:{}", phone)
}

/// A table reservation request as entered in the booking form
#[derive(Debug, Clone)]
pub struct ReservationRequest {
    /// Human-readable date, e.g. "Saturday, 14 June"
    pub date: String,
    /// e.g. "19:30"
    pub time: String,
    pub guests: u32,
    pub window_seat: bool,
}

/// Pre-filled reservation message for the messaging hand-off
pub fn reservation_message(request: &ReservationRequest) -> String {
    let mut msg = String::from("Hi, I'd like to make a reservation.\n\n");
    msg.push_str(&format!("Date: {}\n", request.date));
    msg.push_str(&format!("Time: {}\n", request.time));
    msg.push_str(&format!("Guests: {}\n", request.guests));
    msg.push_str(&format!(
        "Window seat: {}",
        if request.window_seat {
            "Yes, please"
        } else {
            "No preference"
        }
    ));
    msg
}
