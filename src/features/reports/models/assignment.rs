use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::ValidatedItems;
use crate::core::error::{AppError, Result};

/// Free-text remediation actions recorded with a validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Remediation {
    pub replacement: Option<String>,
    pub awareness: Option<String>,
    pub assistance: Option<String>,
    pub other: Option<String>,
}

impl Remediation {
    /// Unchecked remediation boxes are stored as empty strings
    pub fn or_empty(self) -> Self {
        Self {
            replacement: Some(self.replacement.unwrap_or_default()),
            awareness: Some(self.awareness.unwrap_or_default()),
            assistance: Some(self.assistance.unwrap_or_default()),
            other: Some(self.other.unwrap_or_default()),
        }
    }
}

/// Pivot state linking a report to a quality officer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub report_id: i64,
    pub responsible_id: i64,
    pub assignment_date: NaiveDate,
    pub validated: bool,
    pub examination_date: Option<NaiveDate>,
    pub validated_items: ValidatedItems,
    pub remediation: Remediation,
}

impl Assignment {
    /// A fresh, unvalidated assignment
    #[cfg(test)]
    pub fn new(report_id: i64, responsible_id: i64, assignment_date: NaiveDate) -> Self {
        Self {
            report_id,
            responsible_id,
            assignment_date,
            validated: false,
            examination_date: None,
            validated_items: ValidatedItems::default(),
            remediation: Remediation::default(),
        }
    }

    /// Overwrite the validation state with `record`
    pub fn apply(&mut self, record: &ValidationRecord) {
        self.validated = true;
        self.examination_date = Some(record.examination_date);
        self.validated_items = record.items.clone();
        self.remediation = record.remediation.clone();
    }
}

/// Row of `report_assignments`
#[derive(Debug, Clone, FromRow)]
pub struct AssignmentRow {
    pub report_id: i64,
    pub responsible_id: i64,
    pub assignment_date: NaiveDate,
    pub validated: bool,
    pub examination_date: Option<NaiveDate>,
    pub validated_items: Option<String>,
    pub remediation_replacement: Option<String>,
    pub remediation_awareness: Option<String>,
    pub remediation_assistance: Option<String>,
    pub remediation_other: Option<String>,
}

impl From<AssignmentRow> for Assignment {
    fn from(row: AssignmentRow) -> Self {
        Self {
            report_id: row.report_id,
            responsible_id: row.responsible_id,
            assignment_date: row.assignment_date,
            validated: row.validated,
            examination_date: row.examination_date,
            validated_items: ValidatedItems::from_json(row.validated_items.as_deref()),
            remediation: Remediation {
                replacement: row.remediation_replacement,
                awareness: row.remediation_awareness,
                assistance: row.remediation_assistance,
                other: row.remediation_other,
            },
        }
    }
}

/// A complete validation, ready to be stored.
///
/// Only constructible with a non-empty item set, so a stored
/// `validated = true` always comes with items and an examination date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRecord {
    items: ValidatedItems,
    examination_date: NaiveDate,
    remediation: Remediation,
}

impl ValidationRecord {
    pub fn new(
        items: ValidatedItems,
        examination_date: NaiveDate,
        remediation: Remediation,
    ) -> Result<Self> {
        if items.is_empty() {
            return Err(AppError::Validation("No valid item selected".to_string()));
        }

        Ok(Self {
            items,
            examination_date,
            remediation: remediation.or_empty(),
        })
    }

    pub fn items(&self) -> &ValidatedItems {
        &self.items
    }

    pub fn examination_date(&self) -> NaiveDate {
        self.examination_date
    }

    pub fn remediation(&self) -> &Remediation {
        &self.remediation
    }
}
