//! Display strings for the two supported locales

use std::fmt;

use clap::ValueEnum;

/// Output language of the rendered document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Locale {
    #[default]
    En,
    Fr,
}

/// Body sections of a CV, in rendering order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKey {
    Experience,
    Education,
    Qualities,
    Skills,
    Interests,
}

impl SectionKey {
    pub const ALL: [SectionKey; 5] = [
        SectionKey::Experience,
        SectionKey::Education,
        SectionKey::Qualities,
        SectionKey::Skills,
        SectionKey::Interests,
    ];
}

/// Labels used inline in the personal header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactLabel {
    Phone,
    Age,
    Nationality,
    Website,
    Linkedin,
}

impl Locale {
    /// Section heading before uppercasing
    pub fn section_title(self, key: SectionKey) -> &'static str {
        match (self, key) {
            (Locale::En, SectionKey::Experience) => "Professional Experience",
            (Locale::En, SectionKey::Education) => "Education",
            (Locale::En, SectionKey::Qualities) => "Qualities",
            (Locale::En, SectionKey::Skills) => "Skills",
            (Locale::En, SectionKey::Interests) => "Interests",
            (Locale::Fr, SectionKey::Experience) => "Expérience Professionnelle",
            (Locale::Fr, SectionKey::Education) => "Formation",
            (Locale::Fr, SectionKey::Qualities) => "Qualités",
            (Locale::Fr, SectionKey::Skills) => "Compétences",
            (Locale::Fr, SectionKey::Interests) => "Centres d'intérêt",
        }
    }

    pub fn label(self, label: ContactLabel) -> &'static str {
        match (self, label) {
            (Locale::En, ContactLabel::Phone) => "Phone",
            (Locale::En, ContactLabel::Age) => "Age",
            (Locale::En, ContactLabel::Nationality) => "Nationality",
            (Locale::Fr, ContactLabel::Phone) => "Tél",
            (Locale::Fr, ContactLabel::Age) => "Âge",
            (Locale::Fr, ContactLabel::Nationality) => "Nationalité",
            (_, ContactLabel::Website) => "Web",
            (_, ContactLabel::Linkedin) => "LinkedIn",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => f.write_str("en"),
            Locale::Fr => f.write_str("fr"),
        }
    }
}
