//! # coinpress-render
//!
//! Pure rendering engine that turns a structured token-project description
//! into a complete, self-contained marketing site as a single HTML string.
//!
//! ## Pipeline
//! - Sanitize: escape all user text, validate all URLs ([`sanitize`])
//! - Resolve a theme from a template or personality id ([`theme`])
//! - Resolve the ordered, visible section list ([`content::resolve_sections`])
//! - Generate one fragment per section ([`sections`]) and assemble the
//!   document around them ([`document`])
//!
//! The engine is synchronous, stateless and deterministic: identical inputs
//! produce identical output, which is what lets the live-preview call site
//! and the publish-time server share it byte for byte.
//!
//! ## Example
//! ```
//! use coinpress_render::{generate_html, ProjectContent, RenderOptions};
//!
//! let content = ProjectContent {
//!     coin_name: "MoonDoge".into(),
//!     ticker: "$MDOGE".into(),
//!     ..Default::default()
//! };
//! let html = generate_html(&content, &RenderOptions::default());
//! assert!(html.contains("MoonDoge"));
//! ```

pub mod cache;
pub mod content;
pub mod document;
pub mod error;
pub mod sanitize;
pub mod sections;
pub mod theme;

// --- Core types ---
pub use cache::{CacheKey, MemoryCache, PreviewCache};
pub use content::{
    resolve_field, resolve_sections, FaqItem, Feature, GalleryImage, Partner, ProjectContent,
    RoadmapPhase, SectionConfig, SectionKind, StatItem, TeamMember, DEFAULT_SECTIONS,
};
pub use document::{assemble, not_found_page};
pub use error::{ContentError, ContentResult};
pub use sanitize::{escape_attr, escape_html, harden_attr, sanitize_url, SanitizedContent};
pub use sections::LayoutFlags;
pub use theme::{resolve_theme, ThemeTokens, DEFAULT_THEME};

/// Options selecting the visual treatment for one render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderOptions {
    /// Specific template id; wins over the personality when it matches
    pub template_id: Option<String>,
    /// Coarse personality id used when no template matches
    pub personality_id: Option<String>,
    /// Hero layout variant ("split")
    pub layout_variant: Option<String>,
}

/// Render a complete site document. Pure and synchronous, no I/O.
///
/// This is the client/preview entrypoint; the server's request handler wraps
/// the same call, so the two call sites cannot drift apart.
pub fn generate_html(content: &ProjectContent, options: &RenderOptions) -> String {
    let sanitized = SanitizedContent::from_content(content);
    let theme = resolve_theme(
        options.template_id.as_deref(),
        options.personality_id.as_deref(),
    );
    let kinds = resolve_sections(&content.sections);
    // An explicit option wins; otherwise the hero section's configured
    // variant applies.
    let variant = options.layout_variant.clone().or_else(|| {
        content
            .sections
            .iter()
            .find(|s| s.kind == SectionKind::Hero)
            .and_then(|s| s.variant.clone())
    });
    let flags = LayoutFlags { variant };
    document::assemble(&sanitized, &theme, &kinds, &flags)
}
