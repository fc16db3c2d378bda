use std::sync::LazyLock;

use regex::Regex;
use storeintel_core::ContactDetails;

use crate::document::ParsedDocument;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b").expect("valid email regex")
});

// Ten digits with an optional leading `+`/country digit and common separators.
static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\+?[1-9]?[\s\-()]?\d{3}[\s\-()]?\d{3}[\s\-]?\d{4}").expect("valid phone regex")
});

/// Retina asset names such as `logo@2x.png` match the email pattern.
const IMAGE_SUFFIXES: [&str; 3] = [".png", ".jpg", ".gif"];

/// Emails (at most 5) and phone numbers (at most 3) in the page's visible
/// text, deduplicated in order of first appearance.
#[must_use]
pub fn extract_contact_details(doc: &ParsedDocument) -> ContactDetails {
    contact_details_in(&doc.text())
}

fn contact_details_in(text: &str) -> ContactDetails {
    let emails = dedup(
        EMAIL
            .find_iter(text)
            .map(|m| m.as_str())
            .filter(|email| !IMAGE_SUFFIXES.iter().any(|suffix| email.ends_with(suffix))),
        ContactDetails::MAX_EMAILS,
    );
    let phone_numbers = dedup(
        PHONE.find_iter(text).map(|m| m.as_str().trim()),
        ContactDetails::MAX_PHONE_NUMBERS,
    );
    ContactDetails {
        emails,
        phone_numbers,
        addresses: Vec::new(),
    }
}

fn dedup<'a>(matches: impl Iterator<Item = &'a str>, cap: usize) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for found in matches {
        if out.len() == cap {
            break;
        }
        if !out.iter().any(|seen| seen == found) {
            out.push(found.to_owned());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_emails_and_phones_in_visible_text() {
        let doc = ParsedDocument::parse(
            "<footer><p>Email support@acme.com or call 555-123-4567.</p>\
             <p>Wholesale: sales@acme.com, +1 800 555 0199</p></footer>",
        );
        let contact = extract_contact_details(&doc);
        assert_eq!(contact.emails, vec!["support@acme.com", "sales@acme.com"]);
        assert_eq!(contact.phone_numbers.len(), 2);
        assert!(contact.phone_numbers.iter().any(|p| p.contains("555 0199")));
    }

    #[test]
    fn duplicates_are_collapsed() {
        let contact = contact_details_in("hi@acme.com hi@acme.com 555-123-4567 555-123-4567");
        assert_eq!(contact.emails, vec!["hi@acme.com"]);
        assert_eq!(contact.phone_numbers, vec!["555-123-4567"]);
    }

    #[test]
    fn image_names_are_not_emails() {
        let contact = contact_details_in("logo@2x.png banner@hero.jpg real@acme.co");
        assert_eq!(contact.emails, vec!["real@acme.co"]);
    }

    #[test]
    fn caps_emails_at_five_and_phones_at_three() {
        let text: String = (0..8)
            .map(|i| format!("user{i}@acme.com 555-000-000{i} "))
            .collect();
        let contact = contact_details_in(&text);
        assert_eq!(contact.emails.len(), 5);
        assert_eq!(contact.phone_numbers.len(), 3);
    }

    #[test]
    fn scripts_do_not_leak_contacts() {
        let doc = ParsedDocument::parse(
            "<body><script>var e = 'tracker@analytics.io';</script><p>No contact here</p></body>",
        );
        assert!(extract_contact_details(&doc).is_empty());
    }
}
