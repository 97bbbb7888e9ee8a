use crate::config;

/// Builds a `wa.me` deep link that opens a conversation with the given
/// number and a pre-filled message.
pub fn whatsapp_link(phone: &str, message: &str) -> String {
    // urlencoding escapes a few characters that browsers leave bare in query
    // text. Restore those so the link matches the one the firm circulates.
    let encoded = urlencoding::encode(message)
        .replace("%21", "!")
        .replace("%2A", "*")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")");
    format!("https://wa.me/{phone}?text={encoded}")
}

/// Deep link for the firm's configured number and greeting.
pub fn contact_link() -> String {
    whatsapp_link(config::WHATSAPP_PHONE, config::WHATSAPP_MESSAGE)
}

/// Opens the WhatsApp conversation in a new tab. Popup blockers may refuse;
/// there is nothing useful to do about it, so the result is ignored.
pub fn open_contact_chat() {
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target(&contact_link(), "_blank");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_contact_link() {
        assert_eq!(
            contact_link(),
            "https://wa.me/5531999999999?text=Ol%C3%A1!%20Gostaria%20de%20saber%20mais%20sobre%20os%20servi%C3%A7os%20jur%C3%ADdicos%20do%20escrit%C3%B3rio."
        );
    }

    #[test]
    fn test_spaces_and_accents() {
        assert_eq!(
            whatsapp_link("5511888888888", "Bom dia, advogados!"),
            "https://wa.me/5511888888888?text=Bom%20dia%2C%20advogados!"
        );
        assert_eq!(
            whatsapp_link("1", "ação"),
            "https://wa.me/1?text=a%C3%A7%C3%A3o"
        );
    }

    #[test]
    fn test_unescaped_punctuation() {
        // Same set a browser's encodeURIComponent leaves alone.
        assert_eq!(
            whatsapp_link("1", "a!b*c'd(e)f.g-h_i~j"),
            "https://wa.me/1?text=a!b*c'd(e)f.g-h_i~j"
        );
    }

    #[test]
    fn test_empty_message() {
        assert_eq!(whatsapp_link("5531999999999", ""), "https://wa.me/5531999999999?text=");
    }
}
