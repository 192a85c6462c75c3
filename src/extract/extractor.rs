//! Page-level contact extraction
//!
//! Turns raw markup into a [`PageFacts`] value: emails and phones from the
//! visible text and from `mailto:`/`tel:` anchors, social profile links from
//! the raw markup. Extraction is a pure function with no failure mode; a page
//! with no matches yields empty sets.

use crate::extract::patterns::{ANCHOR_SELECTOR, EMAIL_RE, PHONE_RE, SOCIAL_PATTERNS};
use crate::extract::Platform;
use scraper::Html;
use std::collections::{BTreeMap, HashSet};

/// Deduplicated extraction output for one fetched page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFacts {
    pub emails: HashSet<String>,
    pub phones: HashSet<String>,
    pub socials: BTreeMap<Platform, HashSet<String>>,
}

impl PageFacts {
    /// Creates an empty fact set with every platform keyed
    pub fn empty() -> Self {
        Self {
            emails: HashSet::new(),
            phones: HashSet::new(),
            socials: Platform::ALL
                .iter()
                .map(|p| (*p, HashSet::new()))
                .collect(),
        }
    }

    /// Returns true if no facts were found on the page
    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
            && self.phones.is_empty()
            && self.socials.values().all(|s| s.is_empty())
    }
}

/// Extracts contact facts from a page's raw markup
///
/// # Extraction rules
///
/// - Emails: the email pattern over the page's visible text, plus any
///   `mailto:` anchor targets with the scheme prefix stripped.
/// - Phones: the loose phone pattern over the visible text, plus any `tel:`
///   anchor targets with the scheme prefix stripped; every phone is reduced to
///   a canonical form (optional leading `+`, digits only).
/// - Socials: per-platform URL patterns over the RAW markup, case-insensitive,
///   keeping the full matched URL.
pub fn extract_page_facts(html: &str) -> PageFacts {
    let document = Html::parse_document(html);
    let mut facts = PageFacts::empty();

    let text: String = document.root_element().text().collect();

    for m in EMAIL_RE.find_iter(&text) {
        facts.emails.insert(m.as_str().to_string());
    }

    for m in PHONE_RE.find_iter(&text) {
        facts.phones.insert(normalize_phone(m.as_str()));
    }

    for element in document.select(&ANCHOR_SELECTOR) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        let href = href.trim();
        if let Some(target) = href.strip_prefix("mailto:") {
            if !target.is_empty() {
                facts.emails.insert(target.to_string());
            }
        } else if let Some(target) = href.strip_prefix("tel:") {
            let phone = normalize_phone(target);
            if !phone.is_empty() {
                facts.phones.insert(phone);
            }
        }
    }

    for (platform, pattern) in SOCIAL_PATTERNS.iter() {
        let set = facts.socials.entry(*platform).or_default();
        for m in pattern.find_iter(html) {
            set.insert(m.as_str().to_string());
        }
    }

    facts
}

/// Reduces a matched phone to its canonical digit-preserving form
///
/// Keeps a leading `+` and every digit; drops whitespace and punctuation such
/// as dashes, dots, and parentheses.
fn normalize_phone(raw: &str) -> String {
    let raw = raw.trim();
    let mut out = String::with_capacity(raw.len());
    for (i, c) in raw.chars().enumerate() {
        if c.is_ascii_digit() || (c == '+' && i == 0) {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_page_scenario() {
        let html = r#"<html><body>
            <a href="mailto:a@b.com">Email us</a>
            <p>Call +1 (555) 123-4567</p>
            <a href="https://facebook.com/acme">Facebook</a>
            </body></html>"#;

        let facts = extract_page_facts(html);
        assert_eq!(facts.emails, HashSet::from(["a@b.com".to_string()]));
        assert_eq!(facts.phones, HashSet::from(["+15551234567".to_string()]));
        assert_eq!(
            facts.socials[&Platform::Facebook],
            HashSet::from(["https://facebook.com/acme".to_string()])
        );
        assert!(facts.socials[&Platform::Twitter].is_empty());
        assert!(facts.socials[&Platform::Instagram].is_empty());
    }

    #[test]
    fn test_empty_page_yields_empty_sets() {
        let facts = extract_page_facts("<html><body><p>Nothing here</p></body></html>");
        assert!(facts.is_empty());
        // All platforms are still keyed
        assert_eq!(facts.socials.len(), 3);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let html = r#"<p>reach me at info@example.com or 020-7946-0958</p>
            <a href="https://instagram.com/acme">ig</a>"#;
        let first = extract_page_facts(html);
        let second = extract_page_facts(html);
        assert_eq!(first, second);
    }

    #[test]
    fn test_email_in_text_and_mailto_deduplicated() {
        let html = r#"<p>info@example.com</p><a href="mailto:info@example.com">mail</a>"#;
        let facts = extract_page_facts(html);
        assert_eq!(facts.emails.len(), 1);
    }

    #[test]
    fn test_tel_anchor_normalized() {
        let html = r#"<a href="tel:+44 20 7946 0958">Call</a>"#;
        let facts = extract_page_facts(html);
        assert_eq!(facts.phones, HashSet::from(["+442079460958".to_string()]));
    }

    #[test]
    fn test_social_link_in_attribute_only() {
        // No anchor text, the URL appears only inside the href attribute
        let html = r#"<a href="https://www.twitter.com/acme"><img src="bird.png"></a>"#;
        let facts = extract_page_facts(html);
        assert_eq!(
            facts.socials[&Platform::Twitter],
            HashSet::from(["https://www.twitter.com/acme".to_string()])
        );
    }

    #[test]
    fn test_social_matching_case_insensitive() {
        let html = r#"<a href="HTTPS://Facebook.com/Acme">fb</a>"#;
        let facts = extract_page_facts(html);
        assert_eq!(
            facts.socials[&Platform::Facebook],
            HashSet::from(["HTTPS://Facebook.com/Acme".to_string()])
        );
    }

    #[test]
    fn test_loose_phone_accepts_embedded_run() {
        // A digit run that is probably a tracking ID still matches.
        // Preserved on purpose, see the pattern table notes.
        let facts = extract_page_facts("<p>ref 4401234567890</p>");
        assert!(!facts.phones.is_empty());
    }

    #[test]
    fn test_duplicate_phones_collapse_after_normalization() {
        let html = "<p>+1 555 123 4567 and +1 (555) 123-4567</p>";
        let facts = extract_page_facts(html);
        assert_eq!(facts.phones, HashSet::from(["+15551234567".to_string()]));
    }

    #[test]
    fn test_normalize_phone() {
        assert_eq!(normalize_phone("+1 (555) 123-4567"), "+15551234567");
        assert_eq!(normalize_phone("020 7946 0958"), "02079460958");
        assert_eq!(normalize_phone("  +31-20-123-4567 "), "+31201234567");
    }
}
