//! Topic slug generation
//!
//! Folds a free-text topic to ASCII and collapses everything that is not a
//! letter or digit into single hyphens. Topics with nothing left after
//! folding get a stable hash-derived identifier instead.

use sha1::{Digest, Sha1};
use unicode_normalization::UnicodeNormalization;

use crate::consts::{FALLBACK_HASH_LEN, FALLBACK_PREFIX, MAX_SLUG_LEN};

/// A filesystem-safe slug and how it was derived
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Slug {
    pub(crate) value: String,
    /// True when the topic had no ASCII alphanumerics and the hash was used
    pub(crate) fallback: bool,
}

/// Convert a topic into a slug matching `[a-z0-9-]`, at most 70 chars,
/// with no leading or trailing hyphen. Never empty.
pub(crate) fn topic_slug(topic: &str) -> Slug {
    let mut out = String::new();
    let mut pending_dash = false;

    // NFKD splits accented letters into base + combining mark; the marks and
    // any other non-ASCII code points are dropped.
    for ch in topic.nfkd().filter(char::is_ascii) {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    if out.is_empty() {
        return Slug {
            value: fallback_slug(topic),
            fallback: true,
        };
    }

    // ASCII only, so byte length equals char count.
    out.truncate(MAX_SLUG_LEN);
    let kept = out.trim_end_matches('-').len();
    out.truncate(kept);

    Slug {
        value: out,
        fallback: false,
    }
}

/// `topic-<first 8 hex of SHA-1(topic as UTF-8)>`
fn fallback_slug(topic: &str) -> String {
    let digest = format!("{:x}", Sha1::digest(topic.as_bytes()));
    format!("{FALLBACK_PREFIX}-{}", &digest[..FALLBACK_HASH_LEN])
}
