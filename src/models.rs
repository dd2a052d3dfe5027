//! Shared domain enums and response records
//!
//! Endpoint-specific payloads live next to their queries under
//! `content::*`; the types here are shared across several endpoints.

use serde::{Deserialize, Serialize};

/// Constitutional category of an article
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    FundamentalRight,
    DirectivePrinciple,
    FundamentalDuty,
    Other,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FundamentalRight => write!(f, "fundamental_right"),
            Self::DirectivePrinciple => write!(f, "directive_principle"),
            Self::FundamentalDuty => write!(f, "fundamental_duty"),
            Self::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fundamental_right" => Ok(Self::FundamentalRight),
            "directive_principle" => Ok(Self::DirectivePrinciple),
            "fundamental_duty" => Ok(Self::FundamentalDuty),
            "other" => Ok(Self::Other),
            _ => Err(()),
        }
    }
}

/// Quiz question difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Easy => write!(f, "easy"),
            Self::Medium => write!(f, "medium"),
            Self::Hard => write!(f, "hard"),
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(()),
        }
    }
}

/// One of the four MCQ option keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Answer {
    A,
    B,
    C,
    D,
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
            Self::C => write!(f, "C"),
            Self::D => write!(f, "D"),
        }
    }
}

impl std::str::FromStr for Answer {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            _ => Err(()),
        }
    }
}

/// Compact article record used by list views, rights grouping, and search.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSummary {
    pub id: i64,
    pub number: String,
    pub title: String,
    pub category: Category,
    pub importance: i64,
}

/// Localized part header embedded in article payloads.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartHeader {
    pub number: i64,
    pub title: String,
}

/// Localized amendment record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AmendmentView {
    pub id: i64,
    pub number: i64,
    pub year: i64,
    pub title: String,
    pub description: String,
    pub act_name: String,
}

/// Localized case law record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseLawView {
    pub id: i64,
    pub title: String,
    pub citation: String,
    pub court: String,
    pub year: i64,
    pub summary: String,
    pub landmark: bool,
}

/// Localized emergency guide record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyGuideView {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub content: String,
    pub helpline: String,
    pub legal_aid: String,
}

/// One row of the per-user assistant history.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AiQueryView {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub context: Option<String>,
    pub created_at: String,
}

/// One row of the per-user quiz attempt history.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAttemptView {
    pub id: String,
    pub score: i64,
    pub total: i64,
    pub time_spent: Option<i64>,
    pub category: Option<String>,
    pub created_at: String,
}
