//! Templated guidance bundles: the RTI generator and the sector guides.
//!
//! Everything here is static content plus string interpolation. No
//! persistence and no external calls; the only failure mode is a request
//! with missing fields.

pub mod rti;
pub mod sectors;

use serde::Serialize;

use crate::error::ApiError;

/// A contactable office or officer.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Authority {
    pub name: &'static str,
    pub role: &'static str,
    pub contact: &'static str,
}

/// One line of a fee table. Amounts stay strings ("₹10", "Free") since
/// several are conditional rather than numeric.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeRow {
    pub item: &'static str,
    pub amount: &'static str,
    pub notes: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineRow {
    pub stage: &'static str,
    pub duration: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EscalationStep {
    pub level: u8,
    pub authority: &'static str,
    pub when: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Helpline {
    pub name: &'static str,
    pub number: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessStory {
    pub title: &'static str,
    pub summary: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistic {
    pub label: &'static str,
    pub value: &'static str,
}

/// Reject a form when any required field is blank, naming all of them at
/// once so the caller can fix the form in one pass.
pub(crate) fn require_fields(missing: Vec<&'static str>) -> Result<(), ApiError> {
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ApiError::bad_request(format!(
            "missing required fields: {}",
            missing.join(", ")
        )))
    }
}
