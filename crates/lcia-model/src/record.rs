//! Canonical characterization-factor record.
//!
//! Every source adapter produces rows of this shape and every downstream stage
//! (flow mapping, consolidation, serialization) consumes it. Column headers
//! follow the published LCIA formatter table layout so CSV files written by
//! other tools load without renaming.

use serde::{Deserialize, Serialize};

/// Column headers of the canonical table, in canonical order.
pub mod columns {
    pub const METHOD: &str = "Method";
    pub const METHOD_UUID: &str = "Method UUID";
    pub const INDICATOR: &str = "Indicator";
    pub const INDICATOR_UUID: &str = "Indicator UUID";
    pub const INDICATOR_UNIT: &str = "Indicator unit";
    pub const FLOWABLE: &str = "Flowable";
    pub const FLOW_UUID: &str = "Flow UUID";
    pub const CONTEXT: &str = "Context";
    pub const UNIT: &str = "Unit";
    pub const CAS_NO: &str = "CAS No";
    pub const LOCATION: &str = "Location";
    pub const LOCATION_UUID: &str = "Location UUID";
    pub const CHARACTERIZATION_FACTOR: &str = "Characterization Factor";

    /// All canonical columns in table order.
    pub const ALL: [&str; 13] = [
        METHOD,
        METHOD_UUID,
        INDICATOR,
        INDICATOR_UUID,
        INDICATOR_UNIT,
        FLOWABLE,
        FLOW_UUID,
        CONTEXT,
        UNIT,
        CAS_NO,
        LOCATION,
        LOCATION_UUID,
        CHARACTERIZATION_FACTOR,
    ];

    /// Columns a custom method file must provide; the rest default to empty.
    pub const REQUIRED: [&str; 3] = [CHARACTERIZATION_FACTOR, FLOWABLE, CONTEXT];
}

/// One characterization factor: the impact of one unit of a flow on one
/// indicator of one method, optionally regionalized by location.
///
/// Flowable, Context, Unit and Flow UUID together identify the flow; Method and
/// Indicator identify the impact category. Empty strings stand for missing
/// values, an empty location means global.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterizationRow {
    #[serde(rename = "Method")]
    pub method: String,
    #[serde(rename = "Method UUID")]
    pub method_id: String,
    #[serde(rename = "Indicator")]
    pub indicator: String,
    #[serde(rename = "Indicator UUID")]
    pub indicator_id: String,
    #[serde(rename = "Indicator unit")]
    pub indicator_unit: String,
    #[serde(rename = "Flowable")]
    pub flowable: String,
    #[serde(rename = "Flow UUID")]
    pub flow_id: String,
    #[serde(rename = "Context")]
    pub context: String,
    #[serde(rename = "Unit")]
    pub unit: String,
    #[serde(rename = "CAS No")]
    pub cas_number: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Location UUID")]
    pub location_id: String,
    #[serde(rename = "Characterization Factor")]
    pub characterization_factor: f64,
}

impl CharacterizationRow {
    /// Returns the text value of a canonical column, or `None` for the
    /// numeric factor column and unknown names.
    pub fn text(&self, column: &str) -> Option<&str> {
        let value = match column {
            columns::METHOD => &self.method,
            columns::METHOD_UUID => &self.method_id,
            columns::INDICATOR => &self.indicator,
            columns::INDICATOR_UUID => &self.indicator_id,
            columns::INDICATOR_UNIT => &self.indicator_unit,
            columns::FLOWABLE => &self.flowable,
            columns::FLOW_UUID => &self.flow_id,
            columns::CONTEXT => &self.context,
            columns::UNIT => &self.unit,
            columns::CAS_NO => &self.cas_number,
            columns::LOCATION => &self.location,
            columns::LOCATION_UUID => &self.location_id,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// Mutable access to a text column, mirroring [`Self::text`].
    pub fn text_mut(&mut self, column: &str) -> Option<&mut String> {
        let value = match column {
            columns::METHOD => &mut self.method,
            columns::METHOD_UUID => &mut self.method_id,
            columns::INDICATOR => &mut self.indicator,
            columns::INDICATOR_UUID => &mut self.indicator_id,
            columns::INDICATOR_UNIT => &mut self.indicator_unit,
            columns::FLOWABLE => &mut self.flowable,
            columns::FLOW_UUID => &mut self.flow_id,
            columns::CONTEXT => &mut self.context,
            columns::UNIT => &mut self.unit,
            columns::CAS_NO => &mut self.cas_number,
            columns::LOCATION => &mut self.location,
            columns::LOCATION_UUID => &mut self.location_id,
            _ => return None,
        };
        Some(value)
    }
}
