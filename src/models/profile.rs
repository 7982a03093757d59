//! Content model for the portfolio page.
//!
//! These are plain data structures: the page renders them but never mutates
//! them. The concrete values live in [`crate::content`], created once at
//! startup from a fixed list and held for the page lifetime.

use serde::{Deserialize, Serialize};

/// Hero banner content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroContent {
    /// Highlighted part of the headline (rendered in the accent color).
    pub headline_accent: String,
    /// Remainder of the headline.
    pub headline_rest: String,
    /// Second headline line.
    pub headline_sub: String,
    /// Tagline paragraph under the headline.
    pub tagline: String,
}

/// A short badge-style highlight shown in the about section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    /// Icon name from the inline icon set.
    pub icon: String,
    /// Badge text (e.g., "8+ Years Experience").
    pub text: String,
}

/// About section content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutContent {
    /// Leading paragraphs, rendered in order.
    pub paragraphs: Vec<String>,
    /// Badge-style highlights under the paragraphs.
    pub highlights: Vec<Highlight>,
    /// URL of the portrait/workspace image.
    pub image_url: String,
}

/// A group of related skills with an icon and tag list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    /// Icon name from the inline icon set.
    pub icon: String,
    /// Group title (e.g., "Cloud Platforms").
    pub title: String,
    /// Individual skill tags.
    pub skills: Vec<String>,
}

/// A service offering card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// Icon name from the inline icon set.
    pub icon: String,
    /// Service title.
    pub title: String,
    /// Short description of the offering.
    pub description: String,
}

/// A recent project or engagement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Project title.
    pub title: String,
    /// Client or company descriptor.
    pub company: String,
    /// Engagement period (e.g., "2023 - 2024").
    pub duration: String,
    /// Outcome-focused description.
    pub description: String,
    /// Technology tags.
    pub technologies: Vec<String>,
}

/// A certification or professional achievement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    /// Certification title.
    pub title: String,
    /// Level or grade (e.g., "Professional").
    pub level: String,
    /// Issuing organization.
    pub provider: String,
    /// Year obtained.
    pub year: String,
    /// CSS class selecting the badge accent color.
    pub accent_class: String,
}

/// A direct contact channel (email, phone, location).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactChannel {
    /// Icon name from the inline icon set.
    pub icon: String,
    /// Channel label (e.g., "Email").
    pub label: String,
    /// Channel value (e.g., the address itself).
    pub value: String,
}

/// An external profile link rendered as an icon button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Icon name from the inline icon set.
    pub icon: String,
    /// Accessible label for the link.
    pub label: String,
    /// Target URL.
    pub href: String,
}

/// The complete, immutable content of the portfolio page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Brand mark accent text (e.g., "Cloud").
    pub brand_accent: String,
    /// Brand mark remainder (e.g., "Architect").
    pub brand_rest: String,
    /// Hero banner content.
    pub hero: HeroContent,
    /// About section content.
    pub about: AboutContent,
    /// Skill groups, rendered as a card grid.
    pub skill_groups: Vec<SkillGroup>,
    /// Service offerings, rendered as a card grid.
    pub services: Vec<Service>,
    /// Recent projects, rendered as a two-column grid.
    pub projects: Vec<Project>,
    /// Certifications, rendered as a card grid.
    pub certifications: Vec<Certification>,
    /// Direct contact channels.
    pub contact_channels: Vec<ContactChannel>,
    /// External profile links.
    pub social_links: Vec<SocialLink>,
    /// Footer copyright line.
    pub footer_line: String,
}
