//! Pure presentation helpers derived from already-decoded landing data.

use crate::sections::DEFAULT_FONT;

/// Country code prefixed to phone numbers for WhatsApp deep links.
const WHATSAPP_COUNTRY_CODE: &str = "51";

/// Initials for a testimonial avatar: first letters of the first two
/// words, uppercased; a single word yields its first character; an empty
/// name falls back to `"U"`.
pub fn initials(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    match words.as_slice() {
        [] => "U".to_string(),
        [first] => first.chars().take(1).collect::<String>().to_uppercase(),
        [first, second, ..] => {
            let mut s = String::new();
            s.extend(first.chars().take(1));
            s.extend(second.chars().take(1));
            s.to_uppercase()
        }
    }
}

/// Normalize a phone number for messaging deep links: strip everything
/// but digits and prefix the country code unless already present.
pub fn normalize_phone(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.starts_with(WHATSAPP_COUNTRY_CODE) {
        digits
    } else {
        format!("{WHATSAPP_COUNTRY_CODE}{digits}")
    }
}

/// WhatsApp deep link with a default greeting.
pub fn whatsapp_link(phone: &str) -> String {
    format!(
        "https://wa.me/{}?text=Hola, estoy interesado en sus servicios",
        normalize_phone(phone)
    )
}

/// Embeddable map URL for the coordinates of the map section.
pub fn map_embed_url(lat: &str, lng: &str) -> String {
    format!("https://maps.google.com/maps?q={lat},{lng}&t=&z=15&ie=UTF8&iwloc=&output=embed")
}

/// External "open in maps" link for the same coordinates.
pub fn maps_link(lat: &str, lng: &str) -> String {
    format!("https://www.google.com/maps?q={lat},{lng}")
}

/// Stylesheet URL for loading a non-default font. Returns `None` for the
/// system default, which ships with the page and needs no request.
pub fn google_font_url(family: &str) -> Option<String> {
    if family == DEFAULT_FONT {
        return None;
    }
    Some(format!(
        "https://fonts.googleapis.com/css2?family={}:wght@300;400;500;600;700&display=swap",
        family.replace(' ', "+")
    ))
}
