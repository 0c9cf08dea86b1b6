//! Supported LCIA methods and their metadata.
//!
//! The method is resolved once at the boundary (CLI flag, adapter selection)
//! and carried as a closed enum from there on. Descriptive metadata, including
//! the flow mapping system each method's flows are published in, lives in an
//! embedded `methods.json`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{LciaError, Result};

const METHODS_JSON: &str = include_str!("../data/methods.json");

/// Methods with a known source layout and flow mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Method {
    Traci,
    Traci2_2,
    Recipe2016,
    FedeflInventory,
    Ced,
    ImpactWorld,
    Ipcc,
}

/// Metadata record for a method, as stored in `methods.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodMetadata {
    pub id: String,
    pub name: String,
    /// Storage category folder.
    pub path: String,
    /// Flow mapping system (`SourceListName`) for the method's source flows.
    #[serde(default)]
    pub mapping: Option<String>,
    /// Whether source flow names must be matched case-insensitively.
    #[serde(default)]
    pub case_insensitivity: bool,
}

/// Returns metadata for every supported method.
pub fn supported_methods() -> Result<Vec<MethodMetadata>> {
    Ok(serde_json::from_str(METHODS_JSON)?)
}

impl Method {
    pub const ALL: [Method; 7] = [
        Method::Traci,
        Method::Traci2_2,
        Method::Recipe2016,
        Method::FedeflInventory,
        Method::Ced,
        Method::ImpactWorld,
        Method::Ipcc,
    ];

    /// Identifier used in `methods.json` and on the command line.
    pub fn id(self) -> &'static str {
        match self {
            Method::Traci => "TRACI",
            Method::Traci2_2 => "TRACI2_2",
            Method::Recipe2016 => "RECIPE_2016",
            Method::FedeflInventory => "FEDEFL_INV",
            Method::Ced => "CED",
            Method::ImpactWorld => "ImpactWorld",
            Method::Ipcc => "IPCC",
        }
    }

    /// Display name, also used as the `Method` column value.
    pub fn name(self) -> &'static str {
        match self {
            Method::Traci => "TRACI 2.1",
            Method::Traci2_2 => "TRACI 2.2",
            Method::Recipe2016 => "ReCiPe 2016",
            Method::FedeflInventory => "FEDEFL Inventory",
            Method::Ced => "Cumulative Energy Demand",
            Method::ImpactWorld => "ImpactWorld",
            Method::Ipcc => "IPCC",
        }
    }

    pub fn metadata(self) -> Result<MethodMetadata> {
        supported_methods()?
            .into_iter()
            .find(|meta| meta.id == self.id())
            .ok_or_else(|| LciaError::UnknownMethod(self.id().to_string()))
    }

    /// File name stem for stored outputs of this method.
    pub fn filename(self) -> String {
        self.name().replace(' ', "_")
    }

    /// Resolves a method from its id, display name or mapping system name.
    pub fn from_name(name: &str) -> Result<Self> {
        let wanted = name.trim();
        let metadata = supported_methods()?;
        for method in Method::ALL {
            if method.id() == wanted || method.name() == wanted {
                return Ok(method);
            }
            let mapping = metadata
                .iter()
                .find(|meta| meta.id == method.id())
                .and_then(|meta| meta.mapping.as_deref());
            if mapping == Some(wanted) {
                return Ok(method);
            }
        }
        Err(LciaError::UnknownMethod(wanted.to_string()))
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
