//! Fixed pattern tables for contact extraction
//!
//! The tables are immutable process-wide data; each pattern is compiled once
//! on first use. The phone pattern is intentionally loose (a phone-like run
//! embedded in a longer digit sequence still matches) and must stay that way:
//! tightening it would change which pages contribute numbers.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Selector;
use serde::Serialize;

/// Social platforms recognized by the extractor
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Facebook,
    Twitter,
    Instagram,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Facebook, Platform::Twitter, Platform::Instagram];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Facebook => "facebook",
            Platform::Twitter => "twitter",
            Platform::Instagram => "instagram",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generic `local@domain.tld` email pattern, applied to visible text
pub static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap());

/// Loose phone pattern: optional leading +, then digits with common separators,
/// at least 8 significant digits end to end
pub static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\+?\d[\d\-() ]{7,}\d").unwrap());

/// Per-platform profile URL patterns, matched case-insensitively against raw
/// markup so links inside attributes are found too
pub static SOCIAL_PATTERNS: Lazy<Vec<(Platform, Regex)>> = Lazy::new(|| {
    vec![
        (
            Platform::Facebook,
            Regex::new(r#"(?i)https?://(www\.)?facebook\.com/[^\s"'<>]*"#).unwrap(),
        ),
        (
            Platform::Twitter,
            Regex::new(r#"(?i)https?://(www\.)?(twitter|x)\.com/[^\s"'<>]*"#).unwrap(),
        ),
        (
            Platform::Instagram,
            Regex::new(r#"(?i)https?://(www\.)?instagram\.com/[^\s"'<>]*"#).unwrap(),
        ),
    ]
});

/// Selector for anchors carrying an href attribute
pub static ANCHOR_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").unwrap());
