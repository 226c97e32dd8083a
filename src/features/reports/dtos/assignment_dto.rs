use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::reports::models::{Assignment, Remediation};

/// Request DTO for assigning quality officers to a report
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AssignReportDto {
    /// User ids of the quality officers to assign
    #[serde(default)]
    pub responsible_ids: Vec<i64>,
    /// ISO-8601 date (YYYY-MM-DD)
    pub assignment_date: Option<String>,
}

/// Request DTO for an officer's validation of a report
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ValidateItemsDto {
    /// Complaint ids the officer confirms as reviewed
    #[serde(default)]
    pub items: Vec<i64>,
    /// ISO-8601 date (YYYY-MM-DD)
    pub examination_date: Option<String>,
    pub replacement: Option<String>,
    pub awareness: Option<String>,
    pub assistance: Option<String>,
    pub other: Option<String>,
}

impl ValidateItemsDto {
    pub fn remediation(&self) -> Remediation {
        Remediation {
            replacement: self.replacement.clone(),
            awareness: self.awareness.clone(),
            assistance: self.assistance.clone(),
            other: self.other.clone(),
        }
    }
}

/// Result of an assign call
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssignmentOutcomeDto {
    pub report_id: i64,
    /// Number of distinct officers written
    pub assigned: u64,
}

/// Response DTO for one report/officer pivot row
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssignmentResponseDto {
    pub report_id: i64,
    pub responsible_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsible_name: Option<String>,
    pub assignment_date: NaiveDate,
    pub validated: bool,
    pub examination_date: Option<NaiveDate>,
    pub validated_items: Vec<i64>,
    pub remediation: Remediation,
}

impl From<Assignment> for AssignmentResponseDto {
    fn from(a: Assignment) -> Self {
        Self {
            report_id: a.report_id,
            responsible_id: a.responsible_id,
            responsible_name: None,
            assignment_date: a.assignment_date,
            validated: a.validated,
            examination_date: a.examination_date,
            validated_items: a.validated_items.to_vec(),
            remediation: a.remediation,
        }
    }
}

impl AssignmentResponseDto {
    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.responsible_name = name;
        self
    }
}
