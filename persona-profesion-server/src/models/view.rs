//! Read-side projections produced by the join engine

use chrono::NaiveDate;
use serde::Serialize;

use super::directory::{Person, Profession, Status};

/// Assignment with the full upstream records embedded
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompositeView {
    #[serde(rename = "persona")]
    pub person: Person,
    #[serde(rename = "profesion")]
    pub profession: Profession,
    #[serde(rename = "fecha_asignacion")]
    pub assigned_on: NaiveDate,
    #[serde(rename = "estatus")]
    pub status: Status,
}

/// Flattened assignment with display names
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryView {
    #[serde(rename = "persona_id")]
    pub person_id: String,
    #[serde(rename = "persona_nombre")]
    pub person_name: String,
    #[serde(rename = "profesion_id")]
    pub profession_id: String,
    #[serde(rename = "profesion_nombre")]
    pub profession_name: String,
    #[serde(rename = "fecha_asignacion")]
    pub assigned_on: NaiveDate,
    #[serde(rename = "estatus_id")]
    pub status_id: String,
    #[serde(rename = "estatus_nombre")]
    pub status_name: String,
}
