//! Social share links.

use std::fmt;

/// Destination picked from a share button's classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShareTarget {
    /// `twitter` class.
    Twitter,
    /// `facebook` class.
    Facebook,
    /// `linkedin` class.
    LinkedIn,
    /// `whatsapp` class.
    WhatsApp,
}

impl ShareTarget {
    /// All targets in class-matching priority order.
    pub const ALL: [ShareTarget; 4] = [
        ShareTarget::Twitter,
        ShareTarget::Facebook,
        ShareTarget::LinkedIn,
        ShareTarget::WhatsApp,
    ];

    /// Class marking a button for this target.
    pub fn class_name(self) -> &'static str {
        match self {
            ShareTarget::Twitter => "twitter",
            ShareTarget::Facebook => "facebook",
            ShareTarget::LinkedIn => "linkedin",
            ShareTarget::WhatsApp => "whatsapp",
        }
    }

    /// First target whose class `has_class` accepts.
    pub fn from_classes(has_class: impl Fn(&str) -> bool) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|target| has_class(target.class_name()))
    }

    /// Share URL for a page, with both values percent-encoded.
    pub fn share_url(self, page_url: &str, title: &str) -> String {
        let url = encode_component(page_url);
        let title = encode_component(title);
        match self {
            ShareTarget::Twitter => format!("https://twitter.com/intent/tweet?url={url}&text={title}"),
            ShareTarget::Facebook => format!("https://www.facebook.com/sharer/sharer.php?u={url}"),
            ShareTarget::LinkedIn => {
                format!("https://www.linkedin.com/shareArticle?mini=true&url={url}&title={title}")
            },
            ShareTarget::WhatsApp => format!("https://wa.me/?text={title}%20{url}"),
        }
    }
}

/// Percent-encode like `encodeURIComponent`: `!'()*` stay literal.
fn encode_component(value: &str) -> String {
    let encoded = urlencoding::encode(value);
    if !encoded.contains("%2") {
        return encoded.into_owned();
    }
    encoded
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*")
}

impl fmt::Display for ShareTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}
