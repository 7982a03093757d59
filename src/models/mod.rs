//! Data models for page sections and portfolio content.
//!
//! This module contains the core data structures used throughout the
//! application. Models are designed to be independent of UI and rendering
//! concerns.

pub mod profile;
pub mod section;

// Re-export all model types
pub use profile::{
    AboutContent, Certification, ContactChannel, HeroContent, Highlight, Profile, Project,
    Service, SkillGroup, SocialLink,
};
pub use section::SectionId;
