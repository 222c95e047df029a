//! Escaping and URL validation applied to all user-authored content.
//!
//! Raw [`ProjectContent`] must never reach string interpolation into HTML;
//! section generators and the document assembler only ever read the
//! [`SanitizedContent`] shadow built here.

use url::Url;

use crate::content::{
    FaqItem, Feature, GalleryImage, Partner, ProjectContent, RoadmapPhase, StatItem, TeamMember,
};

/// Escape text for embedding in HTML element content or quoted attributes.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Stricter variant for attribute values that might otherwise be breakable
/// in unquoted or template contexts.
pub fn escape_attr(text: &str) -> String {
    harden_attr(&escape_html(text))
}

/// Attribute hardening for text that has already been HTML-escaped once.
/// Escapes only backtick and `=` so ampersands are not double-escaped.
pub fn harden_attr(escaped: &str) -> String {
    escaped.replace('`', "&#x60;").replace('=', "&#x3D;")
}

/// Validate a user-entered URL, failing closed.
///
/// Accepts absolute `http`/`https` URLs and site-relative paths. Bare
/// domains ("twitter.com/foo") are repaired by prefixing `https://`.
/// With `allow_data_image`, a `data:image/` payload passes through
/// unchanged; that is the only bypass of the scheme allow-list. Anything
/// else, including `javascript:` and malformed input, resolves to an empty
/// string: ambiguous input becomes "no link" rather than an unsafe link.
pub fn sanitize_url(url: &str, allow_data_image: bool) -> String {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if allow_data_image && trimmed.starts_with("data:image/") {
        return trimmed.to_string();
    }
    if let Some(rest) = trimmed.strip_prefix('/') {
        // Scheme-relative "//host" is not site-relative; reject it.
        if rest.starts_with('/') {
            return String::new();
        }
        return trimmed.to_string();
    }
    match Url::parse(trimmed) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => trimmed.to_string(),
        Ok(_) => String::new(),
        Err(_) => {
            // Bare domain with no scheme: retry as https.
            if trimmed.contains('.') && !trimmed.contains(':') {
                let retried = format!("https://{trimmed}");
                match Url::parse(&retried) {
                    Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => retried,
                    _ => String::new(),
                }
            } else {
                String::new()
            }
        }
    }
}

/// The escaped, URL-validated shadow of [`ProjectContent`].
///
/// A 1:1 mirror where every free-text field has been HTML-escaped exactly
/// once and every URL field has been validated or blanked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SanitizedContent {
    pub coin_name: String,
    pub ticker: String,
    pub tagline: String,
    pub description: String,
    pub logo_url: String,

    pub twitter_url: String,
    pub discord_url: String,
    pub telegram_url: String,

    pub buy_link: String,
    pub buy_label: String,
    pub show_buy_button: bool,
    pub learn_more_link: String,
    pub learn_more_label: String,
    pub show_learn_more: bool,

    pub total_supply: String,
    pub circulating_supply: String,
    pub contract_address: String,

    pub show_roadmap: bool,
    pub show_faq: bool,

    pub faq: Vec<FaqItem>,
    pub roadmap: Vec<RoadmapPhase>,
    pub team: Vec<TeamMember>,
    pub features: Vec<Feature>,
    pub gallery: Vec<GalleryImage>,
    pub partners: Vec<Partner>,
    pub stats: Vec<StatItem>,
}

impl SanitizedContent {
    pub fn from_content(content: &ProjectContent) -> Self {
        Self {
            coin_name: escape_html(&content.coin_name),
            ticker: escape_html(&content.ticker),
            tagline: escape_html(&content.tagline),
            description: escape_html(&content.description),
            logo_url: sanitize_url(&content.logo_url, true),
            twitter_url: sanitize_url(&content.twitter_url, false),
            discord_url: sanitize_url(&content.discord_url, false),
            telegram_url: sanitize_url(&content.telegram_url, false),
            buy_link: sanitize_url(&content.buy_link, false),
            buy_label: escape_html(&content.buy_label),
            show_buy_button: content.show_buy_button,
            learn_more_link: sanitize_url(&content.learn_more_link, false),
            learn_more_label: escape_html(&content.learn_more_label),
            show_learn_more: content.show_learn_more,
            total_supply: escape_html(&content.total_supply),
            circulating_supply: escape_html(&content.circulating_supply),
            contract_address: escape_html(&content.contract_address),
            show_roadmap: content.show_roadmap,
            show_faq: content.show_faq,
            faq: content
                .faq
                .iter()
                .map(|f| FaqItem {
                    question: escape_html(&f.question),
                    answer: escape_html(&f.answer),
                })
                .collect(),
            roadmap: content
                .roadmap
                .iter()
                .map(|p| RoadmapPhase {
                    phase: escape_html(&p.phase),
                    title: escape_html(&p.title),
                    items: p.items.iter().map(|i| escape_html(i)).collect(),
                    completed: p.completed,
                })
                .collect(),
            team: content
                .team
                .iter()
                .map(|m| TeamMember {
                    name: escape_html(&m.name),
                    role: escape_html(&m.role),
                    avatar_url: sanitize_url(&m.avatar_url, true),
                })
                .collect(),
            features: content
                .features
                .iter()
                .map(|f| Feature {
                    title: escape_html(&f.title),
                    description: escape_html(&f.description),
                    icon: escape_html(&f.icon),
                })
                .collect(),
            gallery: content
                .gallery
                .iter()
                .map(|g| GalleryImage {
                    url: sanitize_url(&g.url, true),
                    caption: escape_html(&g.caption),
                })
                .collect(),
            partners: content
                .partners
                .iter()
                .map(|p| Partner {
                    name: escape_html(&p.name),
                    logo_url: sanitize_url(&p.logo_url, true),
                    link: sanitize_url(&p.link, false),
                })
                .collect(),
            stats: content
                .stats
                .iter()
                .map(|s| StatItem {
                    label: escape_html(&s.label),
                    value: escape_html(&s.value),
                })
                .collect(),
        }
    }

    /// True if any social link survived sanitization.
    pub fn has_social_links(&self) -> bool {
        !self.twitter_url.is_empty()
            || !self.discord_url.is_empty()
            || !self.telegram_url.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_entities() {
        assert_eq!(
            escape_html(r#"<b>"Moon" & 'Doge'</b>"#),
            "&lt;b&gt;&quot;Moon&quot; &amp; &#x27;Doge&#x27;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_escape_attr_extends_escape_html() {
        assert_eq!(escape_attr("a=`b`"), "a&#x3D;&#x60;b&#x60;");
    }

    #[test]
    fn test_sanitize_url_accepts_https() {
        assert_eq!(sanitize_url("https://x.com/a", false), "https://x.com/a");
        assert_eq!(sanitize_url("http://x.com/a", false), "http://x.com/a");
    }

    #[test]
    fn test_sanitize_url_repairs_bare_domain() {
        assert_eq!(sanitize_url("x.com/a", false), "https://x.com/a");
        assert_eq!(sanitize_url("twitter.com/foo", false), "https://twitter.com/foo");
    }

    #[test]
    fn test_sanitize_url_site_relative() {
        assert_eq!(sanitize_url("/assets/logo.png", false), "/assets/logo.png");
        assert_eq!(sanitize_url("//evil.com/x", false), "");
    }

    #[test]
    fn test_sanitize_url_rejects_unsafe_schemes() {
        assert_eq!(sanitize_url("javascript:alert(1)", false), "");
        assert_eq!(sanitize_url("vbscript:msgbox", false), "");
        assert_eq!(sanitize_url("data:text/html,<script>", false), "");
        assert_eq!(sanitize_url("data:text/html,<script>", true), "");
        assert_eq!(sanitize_url("ftp://x.com/a", false), "");
    }

    #[test]
    fn test_sanitize_url_data_image_bypass() {
        let data = "data:image/png;base64,iVBORw0KGgo=";
        assert_eq!(sanitize_url(data, true), data);
        assert_eq!(sanitize_url(data, false), "");
    }

    #[test]
    fn test_sanitize_url_malformed_is_blanked() {
        assert_eq!(sanitize_url("", false), "");
        assert_eq!(sanitize_url("   ", false), "");
        assert_eq!(sanitize_url("not a url", false), "");
        assert_eq!(sanitize_url("noscheme-nodot", false), "");
    }

    #[test]
    fn test_shadow_escapes_exactly_once() {
        let content = ProjectContent {
            coin_name: "Moon & Doge".into(),
            ..Default::default()
        };
        let sanitized = SanitizedContent::from_content(&content);
        assert_eq!(sanitized.coin_name, "Moon &amp; Doge");
    }
}
