//! WhatsApp deep-link helpers for the public pages.

/// Brazilian country code prefixed to every deep link.
const COUNTRY_CODE: &str = "55";

/// Secretariat number that receives membership requests from the join page.
pub const ASSOCIATION_WHATSAPP: &str = "559191222234";

/// Digits of a free-text contact string, if there are enough of them to
/// plausibly be a phone number (10 or more).
pub fn whatsapp_digits(contact_info: &str) -> Option<String> {
    let digits: String = contact_info
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    (digits.len() >= 10).then_some(digits)
}

/// `https://wa.me/55<digits>` link for a doctor's contact, when eligible.
pub fn whatsapp_link(contact_info: &str) -> Option<String> {
    whatsapp_digits(contact_info).map(|digits| format!("https://wa.me/{COUNTRY_CODE}{digits}"))
}

/// Pre-filled membership request the join page opens in a new tab.
/// `%0A` is the line break WhatsApp expects inside the `text` parameter.
pub fn membership_request_url(
    name: &str,
    crm: &str,
    email: &str,
    phone: &str,
    message: &str,
) -> String {
    let text = format!(
        "Olá, gostaria de solicitar filiação à SPO.%0A%0A\
         *Nome:* {name}%0A*CRM:* {crm}%0A*Email:* {email}%0A\
         *Telefone:* {phone}%0A*Mensagem:* {message}"
    );
    format!("https://wa.me/{ASSOCIATION_WHATSAPP}?text={text}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_contacts_get_no_whatsapp_action() {
        assert_eq!(whatsapp_link("(91) 9122"), None);
        assert_eq!(whatsapp_link("sem telefone"), None);
        assert_eq!(whatsapp_link(""), None);
    }

    #[test]
    fn ten_or_more_digits_build_a_wa_me_link() {
        assert_eq!(
            whatsapp_link("(91) 98888-0000").as_deref(),
            Some("https://wa.me/559198880000")
        );
        // Exactly ten digits is the threshold.
        assert_eq!(
            whatsapp_link("9188880000").as_deref(),
            Some("https://wa.me/559188880000")
        );
    }

    #[test]
    fn non_digits_are_stripped_before_the_length_check() {
        assert_eq!(
            whatsapp_digits("Dra. Ana +55 (91) 98888-0000 ramal").as_deref(),
            Some("5591988880000")
        );
    }

    #[test]
    fn membership_request_targets_the_association_number() {
        let url = membership_request_url(
            "Dr. João",
            "1234 PA",
            "joao@email.com",
            "(91) 90000-0000",
            "",
        );
        assert!(url.starts_with("https://wa.me/559191222234?text="));
        assert!(url.contains("*Nome:* Dr. João"));
        assert!(url.contains("*CRM:* 1234 PA"));
    }
}
