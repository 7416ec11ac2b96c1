//! Form state submitted by the frontend with each generation request.

use serde::{Deserialize, Serialize};

/// Experience level offered by the frontend form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    #[default]
    Fresher,
    Experienced,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Fresher => "Fresher",
            ExperienceLevel::Experienced => "Experienced",
        }
    }
}

/// Requested cover letter tone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoverLetterTone {
    #[default]
    Formal,
    Informal,
    Casual,
}

impl CoverLetterTone {
    pub fn as_str(&self) -> &'static str {
        match self {
            CoverLetterTone::Formal => "Formal",
            CoverLetterTone::Informal => "Informal",
            CoverLetterTone::Casual => "Casual",
        }
    }
}

/// The five form fields interpolated into the generation prompt.
/// Field names mirror the frontend form state, so every field is optional
/// on the wire and defaults to the form's initial value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationForm {
    pub company_name: String,
    pub applying_as: ExperienceLevel,
    pub cover_letter_tone: CoverLetterTone,
    pub job_description: String,
    pub current_resume: String,
}
