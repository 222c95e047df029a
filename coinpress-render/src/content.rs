use serde::{Deserialize, Serialize};

use crate::error::{ContentError, ContentResult};

/// Canonical, unsanitized project description as produced by the editor.
///
/// Every field is optional from the user's point of view: empty strings and
/// empty collections are valid and resolve to fallbacks at render time.
/// Field names follow the editor's camelCase wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectContent {
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

    /// Tokenomics figures are opaque display strings ("1,000,000,000",
    /// "$100K+"), never parsed numerics.
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

    /// Explicit section layout. Empty means "never customized" and the
    /// fixed default ordering applies.
    pub sections: Vec<SectionConfig>,
}

impl Default for ProjectContent {
    fn default() -> Self {
        Self {
            coin_name: String::new(),
            ticker: String::new(),
            tagline: String::new(),
            description: String::new(),
            logo_url: String::new(),
            twitter_url: String::new(),
            discord_url: String::new(),
            telegram_url: String::new(),
            buy_link: String::new(),
            buy_label: String::new(),
            show_buy_button: true,
            learn_more_link: String::new(),
            learn_more_label: String::new(),
            show_learn_more: true,
            total_supply: String::new(),
            circulating_supply: String::new(),
            contract_address: String::new(),
            show_roadmap: true,
            show_faq: true,
            faq: Vec::new(),
            roadmap: Vec::new(),
            team: Vec::new(),
            features: Vec::new(),
            gallery: Vec::new(),
            partners: Vec::new(),
            stats: Vec::new(),
            sections: Vec::new(),
        }
    }
}

impl ProjectContent {
    /// Decode a persisted content blob.
    ///
    /// The editor stores the full model as one JSON document alongside a few
    /// flat columns; unknown fields saved by a newer editor are ignored.
    pub fn from_json(blob: &str) -> ContentResult<Self> {
        if blob.trim().is_empty() {
            return Err(ContentError::EmptyContent);
        }
        Ok(serde_json::from_str(blob)?)
    }
}

/// A single FAQ entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

/// One roadmap phase with its ordered milestone list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoadmapPhase {
    /// Display label for the phase ("Phase 1", "Q3 2026")
    pub phase: String,
    pub title: String,
    pub items: Vec<String>,
    pub completed: bool,
}

/// A team member card
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub avatar_url: String,
}

/// A product feature highlight
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Feature {
    pub title: String,
    pub description: String,
    /// Short decorative glyph or emoji shown on the card
    pub icon: String,
}

/// A gallery image with optional caption
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryImage {
    pub url: String,
    pub caption: String,
}

/// A partner/backer logo with optional outbound link
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Partner {
    pub name: String,
    pub logo_url: String,
    pub link: String,
}

/// An arbitrary labeled figure ("Holders" / "12,000+")
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatItem {
    pub label: String,
    pub value: String,
}

/// Closed set of registered section kinds.
///
/// Unrecognized kind strings saved by a newer editor deserialize to
/// [`SectionKind::Unknown`], which renders nothing: the engine degrades
/// rather than errors on forward version mismatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Hero,
    About,
    Tokenomics,
    Community,
    Story,
    Utility,
    Roadmap,
    Faq,
    Team,
    Features,
    Gallery,
    Partners,
    Metrics,
    #[serde(other)]
    Unknown,
}

/// Placement and visibility of one section within a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionConfig {
    /// Stable identifier generated once by the editor
    pub id: String,
    #[serde(rename = "type")]
    pub kind: SectionKind,
    /// Layout sub-choice within a kind; only meaningful for some kinds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    pub visible: bool,
    /// Relative position; values need not be contiguous
    pub order: i32,
}

impl Default for SectionConfig {
    fn default() -> Self {
        Self {
            id: String::new(),
            kind: SectionKind::Unknown,
            variant: None,
            visible: true,
            order: 0,
        }
    }
}

/// Section ordering a project gets before the user ever touches section
/// management.
pub const DEFAULT_SECTIONS: [SectionKind; 9] = [
    SectionKind::Hero,
    SectionKind::About,
    SectionKind::Tokenomics,
    SectionKind::Team,
    SectionKind::Community,
    SectionKind::Story,
    SectionKind::Utility,
    SectionKind::Roadmap,
    SectionKind::Faq,
];

/// Resolve the ordered list of section kinds to render.
///
/// With an explicit config list: keep `visible` entries, stable-sort
/// ascending by `order` (ties keep their original array position), map to
/// kind. Without one: the fixed default set.
pub fn resolve_sections(sections: &[SectionConfig]) -> Vec<SectionKind> {
    if sections.is_empty() {
        return DEFAULT_SECTIONS.to_vec();
    }
    let mut visible: Vec<&SectionConfig> = sections.iter().filter(|s| s.visible).collect();
    visible.sort_by_key(|s| s.order);
    visible.into_iter().map(|s| s.kind).collect()
}

/// Falsy-to-default resolution used for every optional textual field.
///
/// Blank (empty or whitespace-only) values resolve to the given default.
pub fn resolve_field<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.trim().is_empty() {
        default
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_section_kind_deserializes() {
        let json = r#"{"id":"s1","type":"hologram","visible":true,"order":3}"#;
        let config: SectionConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.kind, SectionKind::Unknown);
    }

    #[test]
    fn test_resolve_sections_default_when_empty() {
        assert_eq!(resolve_sections(&[]), DEFAULT_SECTIONS.to_vec());
    }

    #[test]
    fn test_resolve_sections_filters_and_sorts() {
        let sections = vec![
            SectionConfig {
                id: "a".into(),
                kind: SectionKind::Faq,
                order: 2,
                ..Default::default()
            },
            SectionConfig {
                id: "b".into(),
                kind: SectionKind::Hero,
                order: 1,
                ..Default::default()
            },
            SectionConfig {
                id: "c".into(),
                kind: SectionKind::Team,
                visible: false,
                order: 0,
                ..Default::default()
            },
        ];
        assert_eq!(
            resolve_sections(&sections),
            vec![SectionKind::Hero, SectionKind::Faq]
        );
    }

    #[test]
    fn test_resolve_sections_stable_on_ties() {
        let sections = vec![
            SectionConfig {
                id: "a".into(),
                kind: SectionKind::Story,
                order: 5,
                ..Default::default()
            },
            SectionConfig {
                id: "b".into(),
                kind: SectionKind::Utility,
                order: 5,
                ..Default::default()
            },
            SectionConfig {
                id: "c".into(),
                kind: SectionKind::About,
                order: 5,
                ..Default::default()
            },
        ];
        assert_eq!(
            resolve_sections(&sections),
            vec![SectionKind::Story, SectionKind::Utility, SectionKind::About]
        );
    }

    #[test]
    fn test_resolve_field() {
        assert_eq!(resolve_field("Moon", "Your Coin"), "Moon");
        assert_eq!(resolve_field("", "Your Coin"), "Your Coin");
        assert_eq!(resolve_field("   ", "Your Coin"), "Your Coin");
    }

    #[test]
    fn test_from_json_rejects_empty_blob() {
        assert!(matches!(
            ProjectContent::from_json("  "),
            Err(ContentError::EmptyContent)
        ));
    }

    #[test]
    fn test_from_json_ignores_unknown_fields() {
        let content =
            ProjectContent::from_json(r#"{"coinName":"Foo","futureField":42}"#).unwrap();
        assert_eq!(content.coin_name, "Foo");
        assert!(content.show_faq);
    }
}
