//! Assignment (person ↔ profession relationship) types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::validation::{present, ValidationError};

/// Status written by a soft delete.
pub const INACTIVE_STATUS_ID: &str = "cc3d83a6-71b9-4b2e-acdc-f05d663e7cc7";

/// Wire format for assignment dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A persisted assignment row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub person_id: String,
    pub profession_id: String,
    pub assigned_on: NaiveDate,
    pub status_id: String,
}

impl Assignment {
    pub fn is_inactive(&self) -> bool {
        self.status_id == INACTIVE_STATUS_ID
    }
}

/// A validated assignment ready to be inserted.
///
/// Can only be built through [`NewAssignment::new`], so holding one means
/// every field was supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAssignment(Assignment);

impl NewAssignment {
    /// Validate raw request fields.
    ///
    /// All absent fields are reported at once. The date is parsed only after
    /// every field is known to be present.
    pub fn new(
        person_id: Option<String>,
        profession_id: Option<String>,
        assigned_on: Option<String>,
        status_id: Option<String>,
    ) -> Result<Self, ValidationError> {
        let person_id = present(person_id);
        let profession_id = present(profession_id);
        let assigned_on = present(assigned_on);
        let status_id = present(status_id);

        let missing: Vec<&'static str> = [
            ("persona_id", person_id.is_none()),
            ("profesion_id", profession_id.is_none()),
            ("fecha_asignacion", assigned_on.is_none()),
            ("estatus_id", status_id.is_none()),
        ]
        .into_iter()
        .filter_map(|(field, absent)| absent.then_some(field))
        .collect();

        match (person_id, profession_id, assigned_on, status_id) {
            (Some(person_id), Some(profession_id), Some(assigned_on), Some(status_id)) => {
                let assigned_on = parse_date(&assigned_on)?;
                Ok(Self(Assignment {
                    person_id,
                    profession_id,
                    assigned_on,
                    status_id,
                }))
            }
            _ => Err(ValidationError::Missing { fields: missing }),
        }
    }

    pub fn into_assignment(self) -> Assignment {
        self.0
    }
}

/// Identifies the assignment(s) targeted by a soft delete
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentKey {
    person_id: String,
    profession_id: String,
}

impl AssignmentKey {
    pub fn new(
        person_id: Option<String>,
        profession_id: Option<String>,
    ) -> Result<Self, ValidationError> {
        match (present(person_id), present(profession_id)) {
            (Some(person_id), Some(profession_id)) => Ok(Self {
                person_id,
                profession_id,
            }),
            (person_id, profession_id) => {
                let mut fields = Vec::new();
                if person_id.is_none() {
                    fields.push("persona_id");
                }
                if profession_id.is_none() {
                    fields.push("profesion_id");
                }
                Err(ValidationError::Missing { fields })
            }
        }
    }

    pub fn person_id(&self) -> &str {
        &self.person_id
    }

    pub fn profession_id(&self) -> &str {
        &self.profession_id
    }

    pub fn matches(&self, assignment: &Assignment) -> bool {
        assignment.person_id == self.person_id && assignment.profession_id == self.profession_id
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| {
        ValidationError::InvalidFormat {
            field: "fecha_asignacion",
            reason: "se esperaba una fecha con formato YYYY-MM-DD",
        }
    })
}
