//! The CV record consumed by the renderer
//!
//! Field names follow the JSON the editor exports (camelCase keys). Every
//! field is optional on the wire; missing strings become empty and missing
//! lists become empty so that half-filled records still render.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LoadError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CvData {
    pub personal: PersonalInfo,
    pub experience: Vec<ExperienceBlock>,
    pub education: Vec<EducationBlock>,
    pub qualities: String,
    pub skills: String,
    pub interests: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub divider_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    /// Embedded raster image as a `data:image/...;base64,` URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperienceBlock {
    /// Editor bookkeeping, never rendered
    pub id: String,
    pub title: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationBlock {
    /// Editor bookkeeping, never rendered
    pub id: String,
    pub degree: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The fields an experience or education entry is rendered from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntryView<'a> {
    pub heading: &'a str,
    pub start_date: &'a str,
    pub end_date: &'a str,
    pub location: Option<&'a str>,
    pub description: Option<&'a str>,
}

impl ExperienceBlock {
    pub fn view(&self) -> EntryView<'_> {
        EntryView {
            heading: &self.title,
            start_date: &self.start_date,
            end_date: &self.end_date,
            location: present(&self.location),
            description: present(&self.description),
        }
    }
}

impl EducationBlock {
    pub fn view(&self) -> EntryView<'_> {
        EntryView {
            heading: &self.degree,
            start_date: &self.start_date,
            end_date: &self.end_date,
            location: present(&self.location),
            description: present(&self.description),
        }
    }
}

/// An optional field that actually carries something besides whitespace
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

impl CvData {
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_editor_export() {
        let json = r##"{
            "personal": {"name": "Ada Lovelace", "email": "ada@example.com", "phone": ""},
            "experience": [{
                "id": "1700000000000",
                "title": "Engineer",
                "startDate": "2020",
                "endDate": "2023",
                "description": "- Built X"
            }],
            "education": [],
            "qualities": "",
            "skills": "",
            "interests": "",
            "linkColor": "#336699"
        }"##;
        let cv = CvData::from_json_str(json).expect("Should parse");
        assert_eq!(cv.personal.name, "Ada Lovelace");
        assert_eq!(cv.experience[0].start_date, "2020");
        assert_eq!(cv.link_color.as_deref(), Some("#336699"));
        assert_eq!(cv.divider_color, None);
        assert_eq!(present(&cv.personal.phone), None);
    }

    #[test]
    fn test_missing_fields_default() {
        let cv = CvData::from_json_str(r#"{"personal": {"name": "X"}}"#).expect("Should parse");
        assert!(cv.experience.is_empty());
        assert!(cv.education.is_empty());
        assert_eq!(cv.interests, "");
        assert_eq!(cv.personal.email, "");
    }

    #[test]
    fn test_entry_view_ignores_blank_optionals() {
        let edu = EducationBlock {
            degree: "MSc".into(),
            start_date: "2015".into(),
            end_date: "2017".into(),
            location: Some("  ".into()),
            description: Some("Thesis".into()),
            ..Default::default()
        };
        let view = edu.view();
        assert_eq!(view.heading, "MSc");
        assert_eq!(view.location, None);
        assert_eq!(view.description, Some("Thesis"));
    }

    #[test]
    fn test_json_round_trip_keeps_camel_case() {
        let mut cv = CvData::default();
        cv.divider_color = Some("#ff0000".into());
        let json = cv.to_json_pretty().expect("Should serialize");
        assert!(json.contains("dividerColor"));
        assert_eq!(CvData::from_json_str(&json).expect("Should parse"), cv);
    }

    #[test]
    fn test_invalid_json_reports_position() {
        let err = CvData::from_json_str("{\"personal\": [}").unwrap_err();
        assert!(err.position().is_some());
    }
}
