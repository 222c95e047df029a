//! Template and personality lookup tables producing immutable theme tokens.

/// Concrete visual theme resolved for one render.
///
/// Immutable once resolved; every section generator and the stylesheet read
/// the same token set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeTokens {
    pub primary: &'static str,
    pub accent: &'static str,
    pub bg_gradient: &'static str,
    pub bg_color: &'static str,
    pub text_color: &'static str,
    pub text_muted: &'static str,
    pub heading_font: &'static str,
    pub body_font: &'static str,
}

/// Theme used when neither a template nor a personality matches.
pub const DEFAULT_THEME: ThemeTokens = ThemeTokens {
    primary: "#f59e0b",
    accent: "#fbbf24",
    bg_gradient: "linear-gradient(160deg,#09090b 0%,#1c1917 100%)",
    bg_color: "#09090b",
    text_color: "#e4e4e7",
    text_muted: "#a1a1aa",
    heading_font: "'Space Grotesk','Segoe UI',sans-serif",
    body_font: "'Inter','Segoe UI',sans-serif",
};

/// Resolve a theme from a template id and/or a coarser personality id.
///
/// Lookup order: exact template match, exact personality match, hard
/// default. Each tier returns a complete token set; there is no merging
/// between tiers.
pub fn resolve_theme(template_id: Option<&str>, personality_id: Option<&str>) -> ThemeTokens {
    if let Some(theme) = template_id.and_then(template_theme) {
        return theme;
    }
    if let Some(theme) = personality_id.and_then(personality_theme) {
        return theme;
    }
    DEFAULT_THEME
}

fn template_theme(id: &str) -> Option<ThemeTokens> {
    let theme = match id {
        "cosmic" => ThemeTokens {
            primary: "#8b5cf6",
            accent: "#c4b5fd",
            bg_gradient: "linear-gradient(180deg,#0f0a1e 0%,#2e1065 100%)",
            bg_color: "#0f0a1e",
            text_color: "#ede9fe",
            text_muted: "#a78bfa",
            heading_font: "'Space Grotesk','Segoe UI',sans-serif",
            body_font: "'Inter','Segoe UI',sans-serif",
        },
        "neon-nights" => ThemeTokens {
            primary: "#22d3ee",
            accent: "#f472b6",
            bg_gradient: "linear-gradient(135deg,#030712 0%,#164e63 100%)",
            bg_color: "#030712",
            text_color: "#ecfeff",
            text_muted: "#67e8f9",
            heading_font: "'Orbitron','Segoe UI',sans-serif",
            body_font: "'Rajdhani','Segoe UI',sans-serif",
        },
        "mint-fresh" => ThemeTokens {
            primary: "#10b981",
            accent: "#6ee7b7",
            bg_gradient: "linear-gradient(160deg,#022c22 0%,#064e3b 100%)",
            bg_color: "#022c22",
            text_color: "#ecfdf5",
            text_muted: "#6ee7b7",
            heading_font: "'Poppins','Segoe UI',sans-serif",
            body_font: "'Inter','Segoe UI',sans-serif",
        },
        "royal-gold" => ThemeTokens {
            primary: "#eab308",
            accent: "#fde047",
            bg_gradient: "linear-gradient(180deg,#1c1917 0%,#422006 100%)",
            bg_color: "#1c1917",
            text_color: "#fefce8",
            text_muted: "#ca8a04",
            heading_font: "'Playfair Display',Georgia,serif",
            body_font: "'Lato','Segoe UI',sans-serif",
        },
        "crimson-pump" => ThemeTokens {
            primary: "#ef4444",
            accent: "#fca5a5",
            bg_gradient: "linear-gradient(150deg,#0c0a09 0%,#450a0a 100%)",
            bg_color: "#0c0a09",
            text_color: "#fef2f2",
            text_muted: "#f87171",
            heading_font: "'Bebas Neue','Segoe UI',sans-serif",
            body_font: "'Inter','Segoe UI',sans-serif",
        },
        "ocean-depth" => ThemeTokens {
            primary: "#3b82f6",
            accent: "#93c5fd",
            bg_gradient: "linear-gradient(180deg,#0c1222 0%,#1e3a8a 100%)",
            bg_color: "#0c1222",
            text_color: "#eff6ff",
            text_muted: "#93c5fd",
            heading_font: "'Space Grotesk','Segoe UI',sans-serif",
            body_font: "'Inter','Segoe UI',sans-serif",
        },
        "retro-arcade" => ThemeTokens {
            primary: "#f472b6",
            accent: "#a3e635",
            bg_gradient: "linear-gradient(135deg,#1e1b4b 0%,#4c1d95 50%,#831843 100%)",
            bg_color: "#1e1b4b",
            text_color: "#fdf4ff",
            text_muted: "#d8b4fe",
            heading_font: "'Press Start 2P',monospace",
            body_font: "'VT323',monospace",
        },
        "paper-light" => ThemeTokens {
            primary: "#0f766e",
            accent: "#f59e0b",
            bg_gradient: "linear-gradient(180deg,#fafaf9 0%,#f5f5f4 100%)",
            bg_color: "#fafaf9",
            text_color: "#1c1917",
            text_muted: "#57534e",
            heading_font: "'Fraunces',Georgia,serif",
            body_font: "'Inter','Segoe UI',sans-serif",
        },
        "midnight-premium" => ThemeTokens {
            primary: "#d4af37",
            accent: "#f5e7a3",
            bg_gradient: "linear-gradient(170deg,#0a0a0a 0%,#18181b 100%)",
            bg_color: "#0a0a0a",
            text_color: "#fafafa",
            text_muted: "#a1a1aa",
            heading_font: "'Cormorant Garamond',Georgia,serif",
            body_font: "'Lato','Segoe UI',sans-serif",
        },
        "degen-classic" => ThemeTokens {
            primary: "#84cc16",
            accent: "#fde047",
            bg_gradient: "linear-gradient(145deg,#052e16 0%,#14532d 100%)",
            bg_color: "#052e16",
            text_color: "#f7fee7",
            text_muted: "#a3e635",
            heading_font: "'Luckiest Guy','Comic Sans MS',cursive",
            body_font: "'Nunito','Segoe UI',sans-serif",
        },
        _ => return None,
    };
    Some(theme)
}

fn personality_theme(id: &str) -> Option<ThemeTokens> {
    let theme = match id {
        "degen" => ThemeTokens {
            primary: "#84cc16",
            accent: "#fde047",
            bg_gradient: "linear-gradient(145deg,#052e16 0%,#14532d 100%)",
            bg_color: "#052e16",
            text_color: "#f7fee7",
            text_muted: "#a3e635",
            heading_font: "'Luckiest Guy','Comic Sans MS',cursive",
            body_font: "'Nunito','Segoe UI',sans-serif",
        },
        "premium" => ThemeTokens {
            primary: "#d4af37",
            accent: "#f5e7a3",
            bg_gradient: "linear-gradient(170deg,#0a0a0a 0%,#18181b 100%)",
            bg_color: "#0a0a0a",
            text_color: "#fafafa",
            text_muted: "#a1a1aa",
            heading_font: "'Cormorant Garamond',Georgia,serif",
            body_font: "'Lato','Segoe UI',sans-serif",
        },
        "playful" => ThemeTokens {
            primary: "#f472b6",
            accent: "#a3e635",
            bg_gradient: "linear-gradient(135deg,#4c1d95 0%,#831843 100%)",
            bg_color: "#4c1d95",
            text_color: "#fdf4ff",
            text_muted: "#d8b4fe",
            heading_font: "'Baloo 2','Comic Sans MS',cursive",
            body_font: "'Nunito','Segoe UI',sans-serif",
        },
        "technical" => ThemeTokens {
            primary: "#22d3ee",
            accent: "#a5f3fc",
            bg_gradient: "linear-gradient(180deg,#030712 0%,#111827 100%)",
            bg_color: "#030712",
            text_color: "#f9fafb",
            text_muted: "#9ca3af",
            heading_font: "'JetBrains Mono',monospace",
            body_font: "'IBM Plex Sans','Segoe UI',sans-serif",
        },
        "minimal" => ThemeTokens {
            primary: "#18181b",
            accent: "#71717a",
            bg_gradient: "linear-gradient(180deg,#ffffff 0%,#fafafa 100%)",
            bg_color: "#ffffff",
            text_color: "#18181b",
            text_muted: "#71717a",
            heading_font: "'Inter','Segoe UI',sans-serif",
            body_font: "'Inter','Segoe UI',sans-serif",
        },
        _ => return None,
    };
    Some(theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_match_wins() {
        let theme = resolve_theme(Some("cosmic"), Some("degen"));
        assert_eq!(theme.primary, "#8b5cf6");
    }

    #[test]
    fn test_unknown_template_falls_back_to_personality() {
        let theme = resolve_theme(Some("unknown-template"), Some("degen"));
        assert_eq!(theme, personality_theme("degen").unwrap());
        assert_ne!(theme, DEFAULT_THEME);
    }

    #[test]
    fn test_no_identifiers_yields_default() {
        assert_eq!(resolve_theme(None, None), DEFAULT_THEME);
    }

    #[test]
    fn test_unknown_everything_yields_default() {
        assert_eq!(resolve_theme(Some("nope"), Some("nope")), DEFAULT_THEME);
    }
}
