//! Document assembly: header, ordered sections, footer, metadata and the
//! generated stylesheet, combined into one standalone HTML string.

use std::fmt::Write as _;

use crate::content::{resolve_field, SectionKind};
use crate::sanitize::{harden_attr, SanitizedContent};
use crate::sections::{
    render_section, social_links, LayoutFlags, FALLBACK_COIN_NAME, FALLBACK_TICKER,
};
use crate::theme::ThemeTokens;

const GENERIC_DESCRIPTION: &str = "The official website. Charts, community and everything else.";
const DEFAULT_FAVICON: &str = "/favicon.ico";

/// Assemble the complete document for an already-sanitized project.
///
/// Sections render in the given order; empty fragments are dropped. The
/// result is self-contained: inline stylesheet, no scripts required.
pub fn assemble(
    content: &SanitizedContent,
    theme: &ThemeTokens,
    section_kinds: &[SectionKind],
    flags: &LayoutFlags,
) -> String {
    let coin = resolve_field(&content.coin_name, FALLBACK_COIN_NAME);
    let ticker = resolve_field(&content.ticker, FALLBACK_TICKER);

    let mut body = String::new();
    body.push_str(&header(content, coin, ticker));
    for &kind in section_kinds {
        let fragment = render_section(kind, content, theme, flags);
        if !fragment.is_empty() {
            body.push_str(&fragment);
        }
    }
    body.push_str(&footer(content, coin, ticker));

    let title = format!("{coin} ({ticker}) - Official Website");
    // Meta description preference: tagline, then description, then generic.
    let description = harden_attr(resolve_field(
        &content.tagline,
        resolve_field(&content.description, GENERIC_DESCRIPTION),
    ));
    let favicon = if content.logo_url.is_empty() {
        DEFAULT_FAVICON
    } else {
        content.logo_url.as_str()
    };

    let mut head_meta = String::new();
    let _ = write!(
        head_meta,
        "<meta name=\"description\" content=\"{description}\">\n\
         <meta property=\"og:title\" content=\"{title}\">\n\
         <meta property=\"og:description\" content=\"{description}\">\n\
         <meta property=\"og:type\" content=\"website\">\n\
         <meta name=\"twitter:card\" content=\"summary_large_image\">\n\
         <meta name=\"twitter:title\" content=\"{title}\">\n\
         <meta name=\"twitter:description\" content=\"{description}\">"
    );
    if !content.logo_url.is_empty() {
        let _ = write!(
            head_meta,
            "\n<meta property=\"og:image\" content=\"{}\">\n\
             <meta name=\"twitter:image\" content=\"{}\">",
            content.logo_url, content.logo_url
        );
    }

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n\
         {head_meta}\n\
         <link rel=\"icon\" href=\"{favicon}\">\n\
         <style>{css}</style>\n\
         </head>\n\
         <body>\n{body}\n</body>\n\
         </html>\n",
        css = stylesheet(theme),
    )
}

fn header(content: &SanitizedContent, coin: &str, ticker: &str) -> String {
    let mut out = String::new();
    let _ = write!(out, "<header class=\"site-header\"><div class=\"header-inner\">");
    if content.logo_url.is_empty() {
        let _ = write!(out, "<a class=\"brand\" href=\"#hero\">{coin}</a>");
    } else {
        let _ = write!(
            out,
            "<a class=\"brand\" href=\"#hero\"><img class=\"brand-logo\" src=\"{}\" alt=\"{}\">{coin}</a>",
            content.logo_url,
            harden_attr(coin)
        );
    }
    let _ = write!(out, "<span class=\"brand-ticker\">{ticker}</span>");
    if content.show_buy_button {
        let label = resolve_field(&content.buy_label, "Buy Now");
        let href = resolve_field(&content.buy_link, "#");
        let _ = write!(
            out,
            "<a class=\"btn btn-primary header-cta\" href=\"{href}\">{label}</a>"
        );
    }
    out.push_str("</div></header>");
    out
}

fn footer(content: &SanitizedContent, coin: &str, ticker: &str) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "<footer class=\"site-footer\"><div class=\"footer-inner\">\
         <p class=\"footer-brand\">{coin} ({ticker})</p>"
    );
    let socials = social_links(content);
    if !socials.is_empty() {
        let _ = write!(out, "<div class=\"footer-socials\">{socials}</div>");
    }
    out.push_str(
        "<p class=\"footer-note\">This site is for entertainment purposes. \
         Nothing here is financial advice.</p></div></footer>",
    );
    out
}

/// Generate the inline stylesheet for a theme.
///
/// CSS custom properties carry the tokens; the class rules below are the
/// shared vocabulary every section generator's markup assumes. Adding a new
/// section kind means adding matching rules here.
pub fn stylesheet(theme: &ThemeTokens) -> String {
    format!(
        ":root{{--primary:{primary};--accent:{accent};--bg:{bg};--text:{text};--muted:{muted};}}\
*{{margin:0;padding:0;box-sizing:border-box;}}\
html{{scroll-behavior:smooth;}}\
body{{background:{gradient};background-color:var(--bg);background-attachment:fixed;color:var(--text);font-family:{body_font};line-height:1.6;}}\
h1,h2,h3{{font-family:{heading_font};}}\
a{{color:var(--accent);text-decoration:none;}}\
.site-header{{position:sticky;top:0;z-index:10;backdrop-filter:blur(12px);background:color-mix(in srgb,var(--bg) 75%,transparent);border-bottom:1px solid color-mix(in srgb,var(--text) 12%,transparent);}}\
.header-inner{{max-width:1080px;margin:0 auto;padding:0.75rem 1.5rem;display:flex;align-items:center;gap:0.75rem;}}\
.brand{{display:flex;align-items:center;gap:0.5rem;font-family:{heading_font};font-size:1.25rem;font-weight:700;color:var(--text);}}\
.brand-logo{{width:32px;height:32px;border-radius:50%;object-fit:cover;}}\
.brand-ticker{{color:var(--primary);font-weight:600;margin-right:auto;}}\
.header-cta{{margin-left:auto;}}\
.btn{{display:inline-block;padding:0.7rem 1.6rem;border-radius:999px;font-weight:700;transition:transform 0.15s ease,opacity 0.15s ease;}}\
.btn:hover{{transform:translateY(-2px);opacity:0.92;}}\
.btn-primary{{background:var(--primary);color:var(--bg);}}\
.btn-ghost{{border:2px solid var(--primary);color:var(--primary);}}\
.hero{{padding:6rem 1.5rem 5rem;text-align:center;}}\
.hero-inner{{max-width:820px;margin:0 auto;display:flex;flex-direction:column;align-items:center;gap:1.1rem;}}\
.hero-split .hero-inner{{flex-direction:row;flex-wrap:wrap;text-align:left;justify-content:space-between;max-width:1080px;}}\
.hero-logo{{width:140px;height:140px;border-radius:50%;object-fit:cover;border:4px solid var(--primary);}}\
.hero-title{{font-size:clamp(2.5rem,7vw,4.5rem);color:var(--text);}}\
.hero-ticker{{font-size:1.5rem;font-weight:700;color:var(--primary);letter-spacing:0.08em;}}\
.hero-tagline{{font-size:1.25rem;color:var(--muted);max-width:36rem;}}\
.hero-cta{{display:flex;gap:1rem;flex-wrap:wrap;justify-content:center;margin-top:0.5rem;}}\
.hero-socials{{display:flex;gap:1.25rem;margin-top:0.75rem;}}\
.social-link{{color:var(--muted);font-weight:600;}}\
.social-link:hover{{color:var(--accent);}}\
.section{{padding:4.5rem 1.5rem;}}\
.section-inner{{max-width:1080px;margin:0 auto;}}\
.section-title{{font-size:clamp(1.8rem,4vw,2.6rem);margin-bottom:1.5rem;color:var(--text);text-align:center;}}\
.section-lead{{color:var(--muted);font-size:1.1rem;max-width:44rem;margin:0 auto 1rem;text-align:center;}}\
.card-grid{{display:grid;grid-template-columns:repeat(auto-fit,minmax(240px,1fr));gap:1.25rem;margin-top:2rem;}}\
.card{{background:color-mix(in srgb,var(--text) 6%,transparent);border:1px solid color-mix(in srgb,var(--text) 12%,transparent);border-radius:16px;padding:1.75rem;}}\
.card-icon{{font-size:2rem;margin-bottom:0.75rem;}}\
.card-title{{font-size:1.2rem;margin-bottom:0.5rem;color:var(--text);}}\
.card-text{{color:var(--muted);}}\
.stat-grid{{display:grid;grid-template-columns:repeat(auto-fit,minmax(180px,1fr));gap:1.25rem;margin-top:2rem;text-align:center;}}\
.stat{{background:color-mix(in srgb,var(--text) 6%,transparent);border-radius:16px;padding:1.5rem;}}\
.stat-value{{font-size:1.8rem;font-weight:800;color:var(--primary);font-family:{heading_font};}}\
.stat-label{{color:var(--muted);margin-top:0.25rem;text-transform:uppercase;font-size:0.8rem;letter-spacing:0.08em;}}\
.contract-box{{margin-top:2rem;display:flex;flex-direction:column;align-items:center;gap:0.4rem;}}\
.contract-label{{color:var(--muted);text-transform:uppercase;font-size:0.75rem;letter-spacing:0.1em;}}\
.contract-address{{background:color-mix(in srgb,var(--text) 8%,transparent);border-radius:8px;padding:0.6rem 1rem;font-family:monospace;word-break:break-all;color:var(--accent);}}\
.social-grid{{display:grid;grid-template-columns:repeat(auto-fit,minmax(220px,1fr));gap:1.25rem;margin-top:2rem;}}\
.social-card{{display:flex;flex-direction:column;gap:0.3rem;background:color-mix(in srgb,var(--text) 6%,transparent);border:1px solid color-mix(in srgb,var(--text) 12%,transparent);border-radius:16px;padding:1.5rem;transition:border-color 0.15s ease;}}\
.social-card:hover{{border-color:var(--primary);}}\
.social-name{{font-weight:700;color:var(--text);}}\
.social-hint{{color:var(--muted);font-size:0.9rem;}}\
.roadmap{{display:grid;grid-template-columns:repeat(auto-fit,minmax(240px,1fr));gap:1.25rem;margin-top:2rem;}}\
.roadmap-phase{{background:color-mix(in srgb,var(--text) 6%,transparent);border-left:4px solid var(--muted);border-radius:12px;padding:1.5rem;}}\
.roadmap-phase.phase-done{{border-left-color:var(--primary);}}\
.phase-label{{color:var(--primary);font-weight:700;font-size:0.85rem;text-transform:uppercase;letter-spacing:0.08em;}}\
.phase-title{{margin:0.4rem 0 0.75rem;color:var(--text);}}\
.phase-items{{list-style:none;}}\
.phase-items li{{color:var(--muted);padding:0.25rem 0 0.25rem 1.25rem;position:relative;}}\
.phase-items li::before{{content:\"\\2022\";color:var(--primary);position:absolute;left:0;}}\
.faq-list{{max-width:44rem;margin:2rem auto 0;display:flex;flex-direction:column;gap:0.75rem;}}\
.faq-item{{background:color-mix(in srgb,var(--text) 6%,transparent);border-radius:12px;padding:1rem 1.25rem;}}\
.faq-question{{cursor:pointer;font-weight:700;color:var(--text);}}\
.faq-answer{{margin-top:0.75rem;color:var(--muted);}}\
.team-grid{{display:grid;grid-template-columns:repeat(auto-fit,minmax(200px,1fr));gap:1.25rem;margin-top:2rem;text-align:center;}}\
.team-card{{background:color-mix(in srgb,var(--text) 6%,transparent);border-radius:16px;padding:1.75rem;}}\
.team-avatar{{width:88px;height:88px;border-radius:50%;object-fit:cover;margin:0 auto 1rem;border:3px solid var(--primary);}}\
.avatar-fallback{{display:flex;align-items:center;justify-content:center;font-size:2rem;font-weight:800;color:var(--bg);background:var(--primary);}}\
.team-name{{color:var(--text);}}\
.team-role{{color:var(--muted);font-size:0.9rem;margin-top:0.25rem;}}\
.gallery-grid{{display:grid;grid-template-columns:repeat(auto-fit,minmax(220px,1fr));gap:1rem;margin-top:2rem;}}\
.gallery-item img{{width:100%;border-radius:12px;display:block;}}\
.gallery-caption{{color:var(--muted);font-size:0.85rem;margin-top:0.4rem;text-align:center;}}\
.partner-row{{display:flex;flex-wrap:wrap;gap:2rem;justify-content:center;align-items:center;margin-top:2rem;}}\
.partner{{opacity:0.8;transition:opacity 0.15s ease;}}\
.partner:hover{{opacity:1;}}\
.partner-logo{{height:44px;display:block;}}\
.partner-name{{font-weight:700;color:var(--muted);}}\
.site-footer{{border-top:1px solid color-mix(in srgb,var(--text) 12%,transparent);padding:3rem 1.5rem;text-align:center;}}\
.footer-inner{{max-width:1080px;margin:0 auto;display:flex;flex-direction:column;gap:0.75rem;align-items:center;}}\
.footer-brand{{font-family:{heading_font};font-weight:700;color:var(--text);}}\
.footer-socials{{display:flex;gap:1.25rem;}}\
.footer-note{{color:var(--muted);font-size:0.85rem;}}",
        primary = theme.primary,
        accent = theme.accent,
        bg = theme.bg_color,
        text = theme.text_color,
        muted = theme.text_muted,
        gradient = theme.bg_gradient,
        heading_font = theme.heading_font,
        body_font = theme.body_font,
    )
}

/// Fixed document served when a site cannot be resolved.
///
/// Visitors never see a raw error payload; an unknown or failed lookup
/// yields this page with a 404 status.
pub fn not_found_page() -> String {
    "<!DOCTYPE html>\n\
     <html lang=\"en\">\n\
     <head>\n\
     <meta charset=\"UTF-8\">\n\
     <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
     <title>Site Not Found</title>\n\
     <style>body{background:#09090b;color:#e4e4e7;font-family:'Inter','Segoe UI',sans-serif;\
display:flex;align-items:center;justify-content:center;min-height:100vh;margin:0;text-align:center;}\
h1{font-size:3rem;margin-bottom:0.5rem;}p{color:#a1a1aa;}</style>\n\
     </head>\n\
     <body>\n<div><h1>404</h1><p>This site does not exist or is no longer published.</p></div>\n</body>\n\
     </html>\n"
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ProjectContent;
    use crate::sanitize::SanitizedContent;
    use crate::theme::DEFAULT_THEME;

    #[test]
    fn test_title_format() {
        let content = SanitizedContent::from_content(&ProjectContent {
            coin_name: "MoonDoge".into(),
            ticker: "$MDOGE".into(),
            ..Default::default()
        });
        let html = assemble(
            &content,
            &DEFAULT_THEME,
            &[SectionKind::Hero],
            &LayoutFlags::default(),
        );
        assert!(html.contains("<title>MoonDoge ($MDOGE) - Official Website</title>"));
    }

    #[test]
    fn test_description_prefers_tagline() {
        let content = SanitizedContent::from_content(&ProjectContent {
            tagline: "To the moon".into(),
            description: "Longer text".into(),
            ..Default::default()
        });
        let html = assemble(
            &content,
            &DEFAULT_THEME,
            &[SectionKind::Hero],
            &LayoutFlags::default(),
        );
        assert!(html.contains("<meta name=\"description\" content=\"To the moon\">"));
    }

    #[test]
    fn test_default_favicon_when_no_logo() {
        let content = SanitizedContent::from_content(&ProjectContent::default());
        let html = assemble(
            &content,
            &DEFAULT_THEME,
            &[SectionKind::Hero],
            &LayoutFlags::default(),
        );
        assert!(html.contains("<link rel=\"icon\" href=\"/favicon.ico\">"));
    }

    #[test]
    fn test_stylesheet_embeds_tokens() {
        let css = stylesheet(&DEFAULT_THEME);
        assert!(css.contains("--primary:#f59e0b"));
        assert!(css.contains(DEFAULT_THEME.bg_gradient));
    }

    #[test]
    fn test_no_script_tags_in_output() {
        let content = SanitizedContent::from_content(&ProjectContent::default());
        let html = assemble(
            &content,
            &DEFAULT_THEME,
            &crate::content::DEFAULT_SECTIONS,
            &LayoutFlags::default(),
        );
        assert!(!html.contains("<script"));
    }
}
