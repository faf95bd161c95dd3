//! HTML for the two embeddable tags: the form and the list of entries.

use dcfm_core::models::Submission;
use regex::{Captures, Regex};
use std::sync::LazyLock;

pub const FORM_SHORTCODE: &str = "dcfm_display_form";
pub const DATA_SHORTCODE: &str = "dcfm_display_data";

// [tag], [tag /] and the escaped form [[tag]] which renders as literal "[tag]".
static SHORTCODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\[?)\[(dcfm_display_form|dcfm_display_data)\s*/?\](\]?)").expect("static regex")
});

/// What the tags need to render on a given page.
pub struct RenderContext<'a> {
    /// URL the form posts back to (the page itself).
    pub action: &'a str,
    pub nonce: &'a str,
    pub entries: &'a [Submission],
}

pub fn render_form(action: &str, nonce: &str) -> String {
    let mut content = String::new();
    content.push_str(&format!(r#"<form action="{}" method="post">"#, escape_attr(action)));
    content.push_str(&format!(
        r#"<input type="hidden" id="dcfm_nonce" name="dcfm_nonce" value="{}" />"#,
        escape_attr(nonce)
    ));
    content.push_str(r#"<input type="text" name="dcfm_name" placeholder="Your Name" required/><br/>"#);
    content.push_str(r#"<input type="email" name="dcfm_email" placeholder="Your Email" required/><br/>"#);
    content.push_str(r#"<input type="text" name="dcfm_phone" placeholder="Your Phone"/><br/>"#);
    content.push_str(r#"<input type="text" name="dcfm_company" placeholder="Company Name"/><br/>"#);
    content.push_str(r#"<textarea name="dcfm_message" placeholder="Your Message" required></textarea><br/>"#);
    content.push_str(r#"<input type="submit" value="Submit"/>"#);
    content.push_str("</form>");
    content
}

/// Stored values were sanitized on the way in and are emitted as-is.
pub fn render_entries(entries: &[Submission]) -> String {
    let mut content = String::from("<ul>");
    for entry in entries {
        content.push_str(&format!(
            "<li>Name: {}, Email: {}, Phone: {}, Company: {}, Message: {}</li>",
            entry.name, entry.email, entry.phone, entry.company_name, entry.message
        ));
    }
    content.push_str("</ul>");
    content
}

/// Replaces every form/data tag in `content` with its markup.
pub fn expand_shortcodes(content: &str, ctx: &RenderContext<'_>) -> String {
    SHORTCODE
        .replace_all(content, |caps: &Captures<'_>| {
            let tag = &caps[2];
            if !caps[1].is_empty() && !caps[3].is_empty() {
                return format!("[{}]", tag);
            }

            let body = match tag {
                FORM_SHORTCODE => render_form(ctx.action, ctx.nonce),
                _ => render_entries(ctx.entries),
            };
            format!("{}{}{}", &caps[1], body, &caps[3])
        })
        .into_owned()
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}
