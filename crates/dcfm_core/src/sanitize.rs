//! Field sanitizers applied to every submission before validation.
//!
//! The store is trusted by the render path, so everything that could be
//! replayed as markup is neutralized here rather than at output time.

use regex::Regex;
use std::sync::LazyLock;

static SCRIPT_OR_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(?:script|style)[^>]*?>.*?</(?:script|style)\s*>").expect("static regex")
});
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("static regex"));
static LINE_BREAKS_AND_TABS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\r\n\t ]+").expect("static regex"));
static PERCENT_OCTET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)%[a-f0-9]{2}").expect("static regex"));
static SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" +").expect("static regex"));

static EMAIL_LOCAL_DISALLOWED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^a-zA-Z0-9!#$%&'*+/=?^_`{|}~.\-]").expect("static regex")
});
static EMAIL_LOCAL_VALID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~.\-]+$").expect("static regex")
});
static DOT_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.{2,}").expect("static regex"));
static LABEL_DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[^a-z0-9\-]+").expect("static regex"));
static LABEL_VALID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z0-9\-]+$").expect("static regex"));

const MIN_EMAIL_LEN: usize = 6;

/// Single-line text: tags stripped, whitespace collapsed, trimmed.
pub fn sanitize_text_field(input: &str) -> String {
    sanitize(input, false)
}

/// Multi-line text: like [`sanitize_text_field`] but line breaks survive.
pub fn sanitize_textarea_field(input: &str) -> String {
    sanitize(input, true)
}

fn sanitize(input: &str, keep_newlines: bool) -> String {
    let mut filtered = input.replace("\r\n", "\n");

    if filtered.contains('<') {
        filtered = escape_stray_less_than(&filtered);
        filtered = strip_all_tags(&filtered);
    }

    if !keep_newlines {
        filtered = LINE_BREAKS_AND_TABS.replace_all(&filtered, " ").into_owned();
    }

    let mut filtered = filtered.trim().to_string();

    // Removing one octet can expose another ("%%4141"), so loop until none remain.
    let mut found = false;
    while let Some(octet) = PERCENT_OCTET.find(&filtered) {
        let range = octet.range();
        filtered.replace_range(range, "");
        found = true;
    }
    if found {
        filtered = SPACES.replace_all(filtered.trim(), " ").into_owned();
    }

    filtered
}

/// A `<` only opens a tag when a `>` follows before the next `<`.
/// Every other `<` is turned into `&lt;` so tag stripping leaves the text alone.
fn escape_stray_less_than(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find('<') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        let closes = match (after.find('>'), after.find('<')) {
            (Some(gt), Some(lt)) => gt < lt,
            (Some(_), None) => true,
            _ => false,
        };
        out.push_str(if closes { "<" } else { "&lt;" });
        rest = after;
    }
    out.push_str(rest);
    out
}

/// Removes `<script>`/`<style>` elements including their bodies, then every other tag.
pub fn strip_all_tags(text: &str) -> String {
    let without_code = SCRIPT_OR_STYLE.replace_all(text, "");
    TAG.replace_all(&without_code, "").trim().to_string()
}

/// Drops characters that can never appear in an address.
///
/// Returns an empty string when what is left cannot be an address at all.
pub fn sanitize_email(input: &str) -> String {
    let email = input.trim();

    if email.len() < MIN_EMAIL_LEN {
        return String::new();
    }

    // The '@' must come after at least one local character.
    let Some((local, domain)) = split_address(email) else {
        return String::new();
    };

    let local = EMAIL_LOCAL_DISALLOWED.replace_all(local, "");
    if local.is_empty() {
        return String::new();
    }

    let domain = DOT_RUNS.replace_all(domain, "");
    let domain = domain.trim_matches(|c: char| c.is_whitespace() || c == '.' || c == '\0');
    if domain.is_empty() {
        return String::new();
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return String::new();
    }

    let labels: Vec<String> = labels
        .into_iter()
        .map(|label| {
            let label = label.trim_matches(|c: char| c.is_whitespace() || c == '-' || c == '\0');
            LABEL_DISALLOWED.replace_all(label, "").into_owned()
        })
        .filter(|label| !label.is_empty())
        .collect();

    if labels.len() < 2 {
        return String::new();
    }

    format!("{}@{}", local, labels.join("."))
}

/// Syntactic address check applied to the sanitized value.
pub fn is_email(email: &str) -> bool {
    if email.len() < MIN_EMAIL_LEN {
        return false;
    }

    let Some((local, domain)) = split_address(email) else {
        return false;
    };

    if !EMAIL_LOCAL_VALID.is_match(local) {
        return false;
    }

    if DOT_RUNS.is_match(domain) {
        return false;
    }
    if domain.trim_matches(|c: char| c.is_whitespace() || c == '.' || c == '\0') != domain {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }

    labels.iter().all(|label| {
        label.trim_matches(|c: char| c.is_whitespace() || c == '-' || c == '\0') == *label
            && LABEL_VALID.is_match(label)
    })
}

fn split_address(email: &str) -> Option<(&str, &str)> {
    match email.find('@') {
        Some(at) if at >= 1 => Some((&email[..at], &email[at + 1..])),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_field_strips_tags_and_collapses_whitespace() {
        assert_eq!(sanitize_text_field("  <b>Ann</b>\n\t Smith  "), "Ann Smith");
    }

    #[test]
    fn script_bodies_are_removed_not_just_their_tags() {
        assert_eq!(
            sanitize_text_field("Hi<script>alert('x')</script> there"),
            "Hi there"
        );
        assert_eq!(sanitize_text_field("<STYLE type=\"text/css\">p{}</style>ok"), "ok");
    }

    #[test]
    fn stray_less_than_is_escaped() {
        assert_eq!(sanitize_text_field("1 < 2"), "1 &lt; 2");
        assert_eq!(sanitize_text_field("a <b c < d"), "a &lt;b c &lt; d");
    }

    #[test]
    fn percent_octets_are_removed() {
        assert_eq!(sanitize_text_field("100%25 sure"), "100 sure");
        assert_eq!(sanitize_text_field("%%4141"), "");
    }

    #[test]
    fn textarea_keeps_line_breaks() {
        assert_eq!(
            sanitize_textarea_field("Line one\r\n<i>Line</i> two\n"),
            "Line one\nLine two"
        );
    }

    #[test]
    fn email_is_cleaned_up() {
        assert_eq!(sanitize_email("  ann@example.com "), "ann@example.com");
        assert_eq!(sanitize_email("ann(x)@ex_ample.com"), "annx@example.com");
        assert_eq!(sanitize_email("ann@-example-.com."), "ann@example.com");
        // Dot runs are dropped outright, which can leave a single label.
        assert_eq!(sanitize_email("ann@example..com"), "");
    }

    #[test]
    fn email_without_at_or_domain_is_emptied() {
        assert_eq!(sanitize_email("not-an-email"), "");
        assert_eq!(sanitize_email("@example.com"), "");
        assert_eq!(sanitize_email("ann@localhost"), "");
        assert_eq!(sanitize_email("a@b.c"), "");
    }

    #[test]
    fn is_email_accepts_plain_addresses() {
        assert!(is_email("ann@example.com"));
        assert!(is_email("first.last+tag@mail.example.co.uk"));
    }

    #[test]
    fn is_email_rejects_malformed_addresses() {
        assert!(!is_email("ann@example"));
        assert!(!is_email("ann@.example.com"));
        assert!(!is_email("ann@example..com"));
        assert!(!is_email("ann@-example.com"));
        assert!(!is_email("an n@example.com"));
    }
}
