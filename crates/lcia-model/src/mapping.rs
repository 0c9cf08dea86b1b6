use serde::{Deserialize, Serialize};

/// Column headers of a flow mapping file.
pub mod mapping_columns {
    pub const SOURCE_LIST_NAME: &str = "SourceListName";
    pub const SOURCE_FLOW_NAME: &str = "SourceFlowName";
    pub const SOURCE_FLOW_UUID: &str = "SourceFlowUUID";
    pub const SOURCE_FLOW_CONTEXT: &str = "SourceFlowContext";
    pub const SOURCE_UNIT: &str = "SourceUnit";
    pub const TARGET_FLOW_NAME: &str = "TargetFlowName";
    pub const TARGET_FLOW_UUID: &str = "TargetFlowUUID";
    pub const TARGET_FLOW_CONTEXT: &str = "TargetFlowContext";
    pub const TARGET_UNIT: &str = "TargetUnit";
    pub const CONVERSION_FACTOR: &str = "ConversionFactor";

    /// Columns without which a mapping file cannot be indexed.
    pub const REQUIRED: [&str; 3] = [SOURCE_LIST_NAME, SOURCE_FLOW_NAME, TARGET_FLOW_NAME];
}

/// One row of a source-to-target flow correspondence table.
///
/// Several entries may share a source flow: each one contributes a separate
/// target and the mapper fans the source row out accordingly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MappingEntry {
    /// Name of the flow list (mapping system) this entry belongs to.
    #[serde(rename = "SourceListName")]
    pub source_list: String,
    #[serde(rename = "SourceFlowUUID", default)]
    pub source_id: String,
    #[serde(rename = "SourceFlowName")]
    pub source_name: String,
    #[serde(rename = "SourceFlowContext", default)]
    pub source_context: String,
    #[serde(rename = "SourceUnit", default)]
    pub source_unit: String,
    #[serde(rename = "TargetFlowUUID", default)]
    pub target_id: String,
    #[serde(rename = "TargetFlowName")]
    pub target_name: String,
    #[serde(rename = "TargetFlowContext", default)]
    pub target_context: String,
    #[serde(rename = "TargetUnit", default)]
    pub target_unit: String,
    /// Amount of target flow per unit of source flow; `None` means 1.
    #[serde(rename = "ConversionFactor", default)]
    pub conversion_factor: Option<f64>,
}
