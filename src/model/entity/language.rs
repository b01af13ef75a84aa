use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::repo::{ResourceType, ResourceTyped};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema,
)]
pub enum Language {
    Spanish,
    French,
    Japanese,
    German,
    Korean,
    English,
}

#[derive(Debug, Error)]
#[error("unknown language `{0}`")]
pub struct UnknownLanguage(pub String);

impl Language {
    pub const ALL: [Language; 6] = [
        Language::Spanish,
        Language::French,
        Language::Japanese,
        Language::German,
        Language::Korean,
        Language::English,
    ];

    pub const DEFAULT: Language = Language::English;

    pub fn name(self) -> &'static str {
        match self {
            Self::Spanish => "Spanish",
            Self::French => "French",
            Self::Japanese => "Japanese",
            Self::German => "German",
            Self::Korean => "Korean",
            Self::English => "English",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ResourceTyped for Language {
    fn get_resource_type() -> ResourceType {
        ResourceType::Language
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|lang| lang.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}
