//! Section generators: one HTML fragment builder per registered kind.
//!
//! Every generator is a pure function of the sanitized content, the resolved
//! theme tokens and the ancillary layout flags. A generator returns an empty
//! string when its section has nothing meaningful to show; when a section is
//! enabled but its collection is empty, it falls back to fixed default items
//! with the coin name interpolated so the page never shows a bare shell.

use std::fmt::Write as _;

use crate::content::{resolve_field, SectionKind};
use crate::sanitize::{harden_attr, SanitizedContent};
use crate::theme::ThemeTokens;

/// Layout sub-choices that arrive from the section config rather than the
/// content itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutFlags {
    /// Hero layout variant ("split"); anything else means centered.
    pub variant: Option<String>,
}

pub const FALLBACK_COIN_NAME: &str = "Your Coin";
pub const FALLBACK_TICKER: &str = "$TICKER";
const FALLBACK_TAGLINE: &str = "The community token everyone will be talking about.";

/// Dispatch a section kind to its registered generator.
///
/// Unknown kinds render nothing; the engine degrades rather than errors on
/// section lists saved by a newer editor.
pub fn render_section(
    kind: SectionKind,
    content: &SanitizedContent,
    theme: &ThemeTokens,
    flags: &LayoutFlags,
) -> String {
    match kind {
        SectionKind::Hero => hero(content, theme, flags),
        SectionKind::About => about(content),
        SectionKind::Tokenomics => tokenomics(content),
        SectionKind::Community => community(content),
        SectionKind::Story => story(content),
        SectionKind::Utility => utility(content),
        SectionKind::Roadmap => roadmap(content),
        SectionKind::Faq => faq(content),
        SectionKind::Team => team(content),
        SectionKind::Features => features(content),
        SectionKind::Gallery => gallery(content),
        SectionKind::Partners => partners(content),
        SectionKind::Metrics => metrics(content),
        SectionKind::Unknown => String::new(),
    }
}

fn hero(content: &SanitizedContent, _theme: &ThemeTokens, flags: &LayoutFlags) -> String {
    let coin = resolve_field(&content.coin_name, FALLBACK_COIN_NAME);
    let ticker = resolve_field(&content.ticker, FALLBACK_TICKER);
    let tagline = resolve_field(&content.tagline, FALLBACK_TAGLINE);
    let split = matches!(flags.variant.as_deref(), Some("split"));

    let mut out = String::new();
    let layout_class = if split { " hero-split" } else { "" };
    let _ = write!(
        out,
        "<section class=\"hero hero-section{layout_class}\" id=\"hero\"><div class=\"hero-inner\">"
    );
    if !content.logo_url.is_empty() {
        let _ = write!(
            out,
            "<img class=\"hero-logo\" src=\"{}\" alt=\"{} logo\">",
            content.logo_url,
            harden_attr(coin)
        );
    }
    let _ = write!(
        out,
        "<h1 class=\"hero-title\">{coin}</h1>\
         <p class=\"hero-ticker\">{ticker}</p>\
         <p class=\"hero-tagline\">{tagline}</p>"
    );

    let mut cta = String::new();
    if content.show_buy_button {
        let label = resolve_field(&content.buy_label, "Buy Now");
        let href = resolve_field(&content.buy_link, "#");
        let _ = write!(
            cta,
            "<a class=\"btn btn-primary\" href=\"{href}\">{label}</a>"
        );
    }
    if content.show_learn_more {
        let label = resolve_field(&content.learn_more_label, "Learn More");
        let href = resolve_field(&content.learn_more_link, "#about");
        let _ = write!(cta, "<a class=\"btn btn-ghost\" href=\"{href}\">{label}</a>");
    }
    if !cta.is_empty() {
        let _ = write!(out, "<div class=\"hero-cta\">{cta}</div>");
    }

    let socials = social_links(content);
    if !socials.is_empty() {
        let _ = write!(out, "<div class=\"hero-socials\">{socials}</div>");
    }
    out.push_str("</div></section>");
    out
}

fn about(content: &SanitizedContent) -> String {
    let coin = resolve_field(&content.coin_name, FALLBACK_COIN_NAME);
    let default_text = format!(
        "{coin} is a community-driven token built by people who actually hold it. \
         No suits, no empty promises, just a fair launch and a community that shows up."
    );
    let text = resolve_field(&content.description, &default_text);
    format!(
        "<section class=\"section about-section\" id=\"about\"><div class=\"section-inner\">\
         <h2 class=\"section-title\">About {coin}</h2>\
         <p class=\"section-lead\">{text}</p>\
         </div></section>"
    )
}

fn tokenomics(content: &SanitizedContent) -> String {
    let mut stats = String::new();
    let supply = resolve_field(&content.total_supply, "1,000,000,000");
    let circulating = resolve_field(&content.circulating_supply, "100%");
    let _ = write!(
        stats,
        "<div class=\"stat\"><div class=\"stat-value\">{supply}</div><div class=\"stat-label\">Total Supply</div></div>\
         <div class=\"stat\"><div class=\"stat-value\">{circulating}</div><div class=\"stat-label\">Circulating</div></div>\
         <div class=\"stat\"><div class=\"stat-value\">0%</div><div class=\"stat-label\">Buy / Sell Tax</div></div>"
    );

    let mut out = String::new();
    let _ = write!(
        out,
        "<section class=\"section tokenomics-section\" id=\"tokenomics\"><div class=\"section-inner\">\
         <h2 class=\"section-title\">Tokenomics</h2>\
         <div class=\"stat-grid\">{stats}</div>"
    );
    if !content.contract_address.is_empty() {
        let _ = write!(
            out,
            "<div class=\"contract-box\"><span class=\"contract-label\">Contract</span>\
             <code class=\"contract-address\">{}</code></div>",
            content.contract_address
        );
    }
    out.push_str("</div></section>");
    out
}

fn community(content: &SanitizedContent) -> String {
    // No resolved social URLs means no community section at all.
    if !content.has_social_links() {
        return String::new();
    }
    let coin = resolve_field(&content.coin_name, FALLBACK_COIN_NAME);
    let mut cards = String::new();
    if !content.twitter_url.is_empty() {
        let _ = write!(
            cards,
            "<a class=\"social-card\" href=\"{}\"><span class=\"social-name\">Twitter / X</span>\
             <span class=\"social-hint\">Catch every announcement first</span></a>",
            content.twitter_url
        );
    }
    if !content.discord_url.is_empty() {
        let _ = write!(
            cards,
            "<a class=\"social-card\" href=\"{}\"><span class=\"social-name\">Discord</span>\
             <span class=\"social-hint\">Hang out with the core community</span></a>",
            content.discord_url
        );
    }
    if !content.telegram_url.is_empty() {
        let _ = write!(
            cards,
            "<a class=\"social-card\" href=\"{}\"><span class=\"social-name\">Telegram</span>\
             <span class=\"social-hint\">Live chat, around the clock</span></a>",
            content.telegram_url
        );
    }
    format!(
        "<section class=\"section community-section\" id=\"community\"><div class=\"section-inner\">\
         <h2 class=\"section-title\">Join the {coin} Community</h2>\
         <div class=\"social-grid\">{cards}</div>\
         </div></section>"
    )
}

fn story(content: &SanitizedContent) -> String {
    let coin = resolve_field(&content.coin_name, FALLBACK_COIN_NAME);
    let ticker = resolve_field(&content.ticker, FALLBACK_TICKER);
    format!(
        "<section class=\"section story-section\" id=\"story\"><div class=\"section-inner\">\
         <h2 class=\"section-title\">The Story</h2>\
         <p class=\"section-lead\">Every great coin starts with a story. {coin} began as an idea \
         shared between friends and grew into something bigger than anyone expected.</p>\
         <p class=\"section-lead\">Today {ticker} belongs to its holders. The community decides \
         where it goes next, and the best chapter is still unwritten.</p>\
         </div></section>"
    )
}

fn utility(content: &SanitizedContent) -> String {
    let coin = resolve_field(&content.coin_name, FALLBACK_COIN_NAME);
    let cards = [
        (
            "Hold",
            format!("Holding {coin} makes you part of the story. Simple as that."),
        ),
        (
            "Community Access",
            "Holders get access to community spaces, votes and events.".to_string(),
        ),
        (
            "What Comes Next",
            "Utility grows with the community. Ideas become features when holders want them."
                .to_string(),
        ),
    ];
    let mut grid = String::new();
    for (title, text) in &cards {
        let _ = write!(
            grid,
            "<div class=\"card\"><h3 class=\"card-title\">{title}</h3>\
             <p class=\"card-text\">{text}</p></div>"
        );
    }
    format!(
        "<section class=\"section utility-section\" id=\"utility\"><div class=\"section-inner\">\
         <h2 class=\"section-title\">Utility</h2>\
         <div class=\"card-grid\">{grid}</div>\
         </div></section>"
    )
}

fn roadmap(content: &SanitizedContent) -> String {
    if !content.show_roadmap {
        return String::new();
    }
    let coin = resolve_field(&content.coin_name, FALLBACK_COIN_NAME);

    let default_phases = [
        (
            "Phase 1",
            "Launch",
            vec![
                format!("Fair launch of {coin}"),
                "Website and socials live".to_string(),
                "First 1,000 holders".to_string(),
            ],
            true,
        ),
        (
            "Phase 2",
            "Growth",
            vec![
                "Community campaigns".to_string(),
                "Listings and partnerships".to_string(),
                "10,000 holders".to_string(),
            ],
            false,
        ),
        (
            "Phase 3",
            "Moon",
            vec![
                "Major exchange listings".to_string(),
                format!("{coin} everywhere"),
                "The rest is history".to_string(),
            ],
            false,
        ),
    ];

    let mut phases = String::new();
    if content.roadmap.is_empty() {
        for (label, title, items, completed) in &default_phases {
            push_phase(&mut phases, label, title, items, *completed);
        }
    } else {
        for phase in &content.roadmap {
            push_phase(
                &mut phases,
                &phase.phase,
                &phase.title,
                &phase.items,
                phase.completed,
            );
        }
    }

    format!(
        "<section class=\"section roadmap-section\" id=\"roadmap\"><div class=\"section-inner\">\
         <h2 class=\"section-title\">Roadmap</h2>\
         <div class=\"roadmap\">{phases}</div>\
         </div></section>"
    )
}

fn push_phase(out: &mut String, label: &str, title: &str, items: &[String], completed: bool) {
    let done_class = if completed { " phase-done" } else { "" };
    let _ = write!(
        out,
        "<div class=\"roadmap-phase{done_class}\">\
         <span class=\"phase-label\">{label}</span>\
         <h3 class=\"phase-title\">{title}</h3><ul class=\"phase-items\">"
    );
    for item in items {
        let _ = write!(out, "<li>{item}</li>");
    }
    out.push_str("</ul></div>");
}

fn faq(content: &SanitizedContent) -> String {
    if !content.show_faq {
        return String::new();
    }
    let coin = resolve_field(&content.coin_name, FALLBACK_COIN_NAME);
    let ticker = resolve_field(&content.ticker, FALLBACK_TICKER);

    let default_items = [
        (
            format!("What is {coin}?"),
            format!(
                "{coin} is a community token. It exists because its holders want it to, \
                 and that is the whole point."
            ),
        ),
        (
            format!("How do I buy {ticker}?"),
            "Connect your wallet on a supported exchange, swap for the token using the \
             contract address on this page, and you are in."
                .to_string(),
        ),
        (
            "Is the liquidity locked?".to_string(),
            "Check the contract and liquidity details yourself before buying. \
             Never invest more than you can afford to lose."
                .to_string(),
        ),
        (
            "Where can I follow the project?".to_string(),
            "All official links live on this site. Anything else claiming to be us is not us."
                .to_string(),
        ),
    ];

    let mut items = String::new();
    if content.faq.is_empty() {
        for (question, answer) in &default_items {
            push_faq_item(&mut items, question, answer);
        }
    } else {
        for item in &content.faq {
            push_faq_item(&mut items, &item.question, &item.answer);
        }
    }

    format!(
        "<section class=\"section faq-section\" id=\"faq\"><div class=\"section-inner\">\
         <h2 class=\"section-title\">FAQ</h2>\
         <div class=\"faq-list\">{items}</div>\
         </div></section>"
    )
}

fn push_faq_item(out: &mut String, question: &str, answer: &str) {
    let _ = write!(
        out,
        "<details class=\"faq-item\"><summary class=\"faq-question\">{question}</summary>\
         <p class=\"faq-answer\">{answer}</p></details>"
    );
}

fn team(content: &SanitizedContent) -> String {
    let default_members = [
        ("Chef", "Founder"),
        ("Pixel", "Design and Memes"),
        ("Anchor", "Community Lead"),
    ];

    let mut cards = String::new();
    if content.team.is_empty() {
        for (name, role) in &default_members {
            push_team_card(&mut cards, name, role, "");
        }
    } else {
        for member in &content.team {
            push_team_card(&mut cards, &member.name, &member.role, &member.avatar_url);
        }
    }

    format!(
        "<section class=\"section team-section\" id=\"team\"><div class=\"section-inner\">\
         <h2 class=\"section-title\">The Team</h2>\
         <div class=\"team-grid\">{cards}</div>\
         </div></section>"
    )
}

fn push_team_card(out: &mut String, name: &str, role: &str, avatar_url: &str) {
    let avatar = if avatar_url.is_empty() {
        let initial = name.chars().next().unwrap_or('?');
        format!("<div class=\"team-avatar avatar-fallback\">{initial}</div>")
    } else {
        format!(
            "<img class=\"team-avatar\" src=\"{avatar_url}\" alt=\"{}\">",
            harden_attr(name)
        )
    };
    let _ = write!(
        out,
        "<div class=\"team-card\">{avatar}\
         <h3 class=\"team-name\">{name}</h3>\
         <p class=\"team-role\">{role}</p></div>"
    );
}

fn features(content: &SanitizedContent) -> String {
    let coin = resolve_field(&content.coin_name, FALLBACK_COIN_NAME);
    let default_features = [
        (
            "🔒",
            "Safe by Design",
            "Renounced contract, locked liquidity, no hidden switches.".to_string(),
        ),
        (
            "⚡",
            "Instant Swaps",
            format!("Trade {coin} on any major decentralized exchange in seconds."),
        ),
        (
            "🌍",
            "Global Community",
            "Holders in every timezone keep the conversation going day and night.".to_string(),
        ),
    ];

    let mut grid = String::new();
    if content.features.is_empty() {
        for (icon, title, text) in &default_features {
            push_feature_card(&mut grid, icon, title, text);
        }
    } else {
        for feature in &content.features {
            push_feature_card(&mut grid, &feature.icon, &feature.title, &feature.description);
        }
    }

    format!(
        "<section class=\"section features-section\" id=\"features\"><div class=\"section-inner\">\
         <h2 class=\"section-title\">Why {coin}?</h2>\
         <div class=\"card-grid\">{grid}</div>\
         </div></section>"
    )
}

fn push_feature_card(out: &mut String, icon: &str, title: &str, text: &str) {
    let _ = write!(out, "<div class=\"card\">");
    if !icon.is_empty() {
        let _ = write!(out, "<div class=\"card-icon\">{icon}</div>");
    }
    let _ = write!(
        out,
        "<h3 class=\"card-title\">{title}</h3><p class=\"card-text\">{text}</p></div>"
    );
}

fn gallery(content: &SanitizedContent) -> String {
    // Image sections have no meaningful default content.
    let images: Vec<_> = content
        .gallery
        .iter()
        .filter(|g| !g.url.is_empty())
        .collect();
    if images.is_empty() {
        return String::new();
    }
    let mut grid = String::new();
    for image in images {
        let _ = write!(
            grid,
            "<figure class=\"gallery-item\"><img src=\"{}\" alt=\"{}\">",
            image.url,
            harden_attr(&image.caption)
        );
        if !image.caption.is_empty() {
            let _ = write!(grid, "<figcaption class=\"gallery-caption\">{}</figcaption>", image.caption);
        }
        grid.push_str("</figure>");
    }
    format!(
        "<section class=\"section gallery-section\" id=\"gallery\"><div class=\"section-inner\">\
         <h2 class=\"section-title\">Gallery</h2>\
         <div class=\"gallery-grid\">{grid}</div>\
         </div></section>"
    )
}

fn partners(content: &SanitizedContent) -> String {
    let visible: Vec<_> = content
        .partners
        .iter()
        .filter(|p| !p.name.is_empty() || !p.logo_url.is_empty())
        .collect();
    if visible.is_empty() {
        return String::new();
    }
    let mut row = String::new();
    for partner in visible {
        let inner = if partner.logo_url.is_empty() {
            format!("<span class=\"partner-name\">{}</span>", partner.name)
        } else {
            format!(
                "<img class=\"partner-logo\" src=\"{}\" alt=\"{}\">",
                partner.logo_url,
                harden_attr(&partner.name)
            )
        };
        if partner.link.is_empty() {
            let _ = write!(row, "<div class=\"partner\">{inner}</div>");
        } else {
            let _ = write!(row, "<a class=\"partner\" href=\"{}\">{inner}</a>", partner.link);
        }
    }
    format!(
        "<section class=\"section partners-section\" id=\"partners\"><div class=\"section-inner\">\
         <h2 class=\"section-title\">Partners</h2>\
         <div class=\"partner-row\">{row}</div>\
         </div></section>"
    )
}

fn metrics(content: &SanitizedContent) -> String {
    let default_stats = [
        ("Holders", "10,000+"),
        ("Market Cap", "$1M+"),
        ("Community", "50K strong"),
    ];
    let mut grid = String::new();
    if content.stats.is_empty() {
        for (label, value) in &default_stats {
            let _ = write!(
                grid,
                "<div class=\"stat\"><div class=\"stat-value\">{value}</div>\
                 <div class=\"stat-label\">{label}</div></div>"
            );
        }
    } else {
        for stat in &content.stats {
            let _ = write!(
                grid,
                "<div class=\"stat\"><div class=\"stat-value\">{}</div>\
                 <div class=\"stat-label\">{}</div></div>",
                stat.value, stat.label
            );
        }
    }
    format!(
        "<section class=\"section metrics-section\" id=\"metrics\"><div class=\"section-inner\">\
         <h2 class=\"section-title\">By the Numbers</h2>\
         <div class=\"stat-grid\">{grid}</div>\
         </div></section>"
    )
}

/// Inline social icon links shared by the hero and the footer.
pub fn social_links(content: &SanitizedContent) -> String {
    let mut out = String::new();
    for (url, label) in [
        (&content.twitter_url, "Twitter"),
        (&content.discord_url, "Discord"),
        (&content.telegram_url, "Telegram"),
    ] {
        if !url.is_empty() {
            let _ = write!(out, "<a class=\"social-link\" href=\"{url}\">{label}</a>");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ProjectContent;
    use crate::theme::DEFAULT_THEME;

    fn sanitized(content: &ProjectContent) -> SanitizedContent {
        SanitizedContent::from_content(content)
    }

    #[test]
    fn test_hero_renders_with_only_coin_name() {
        let content = ProjectContent {
            coin_name: "Foo".into(),
            ..Default::default()
        };
        let html = hero(&sanitized(&content), &DEFAULT_THEME, &LayoutFlags::default());
        assert!(html.contains("Foo"));
        assert!(html.contains(FALLBACK_TICKER));
    }

    #[test]
    fn test_hero_split_variant() {
        let content = ProjectContent::default();
        let flags = LayoutFlags {
            variant: Some("split".into()),
        };
        let html = hero(&sanitized(&content), &DEFAULT_THEME, &flags);
        assert!(html.contains("hero-split"));
    }

    #[test]
    fn test_community_empty_without_socials() {
        let content = ProjectContent::default();
        assert_eq!(community(&sanitized(&content)), "");
    }

    #[test]
    fn test_community_renders_sanitized_links() {
        let content = ProjectContent {
            twitter_url: "twitter.com/foo".into(),
            ..Default::default()
        };
        let html = community(&sanitized(&content));
        assert!(html.contains("https://twitter.com/foo"));
        assert!(!html.contains("Discord"));
    }

    #[test]
    fn test_roadmap_respects_feature_flag() {
        let content = ProjectContent {
            show_roadmap: false,
            ..Default::default()
        };
        assert_eq!(roadmap(&sanitized(&content)), "");
    }

    #[test]
    fn test_faq_defaults_interpolate_coin_name() {
        let content = ProjectContent {
            coin_name: "MoonDoge".into(),
            ..Default::default()
        };
        let html = faq(&sanitized(&content));
        assert!(html.contains("What is MoonDoge?"));
    }

    #[test]
    fn test_faq_custom_items_win_over_defaults() {
        let content = ProjectContent {
            faq: vec![crate::content::FaqItem {
                question: "Custom?".into(),
                answer: "Yes.".into(),
            }],
            ..Default::default()
        };
        let html = faq(&sanitized(&content));
        assert!(html.contains("Custom?"));
        assert!(!html.contains("What is"));
    }

    #[test]
    fn test_alt_attributes_get_hardened() {
        let content = ProjectContent {
            team: vec![crate::content::TeamMember {
                name: "Mr = `Doge`".into(),
                role: "Founder".into(),
                avatar_url: "https://cdn.example.com/doge.png".into(),
            }],
            gallery: vec![crate::content::GalleryImage {
                url: "https://cdn.example.com/a.png".into(),
                caption: "art=best".into(),
            }],
            ..Default::default()
        };
        let sanitized = sanitized(&content);

        let team_html = team(&sanitized);
        assert!(team_html.contains("alt=\"Mr &#x3D; &#x60;Doge&#x60;\""));
        // Element content keeps the plain escaped form.
        assert!(team_html.contains("<h3 class=\"team-name\">Mr = `Doge`</h3>"));

        let gallery_html = gallery(&sanitized);
        assert!(gallery_html.contains("alt=\"art&#x3D;best\""));
        assert!(gallery_html.contains("<figcaption class=\"gallery-caption\">art=best</figcaption>"));
    }

    #[test]
    fn test_gallery_empty_without_images() {
        assert_eq!(gallery(&sanitized(&ProjectContent::default())), "");
    }

    #[test]
    fn test_unknown_kind_renders_nothing() {
        let html = render_section(
            SectionKind::Unknown,
            &sanitized(&ProjectContent::default()),
            &DEFAULT_THEME,
            &LayoutFlags::default(),
        );
        assert_eq!(html, "");
    }
}
