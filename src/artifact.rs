use std::str::FromStr;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use crate::catalog::{ImageRecord, records_from_json, records_from_xml};

/// Type tag the calling layer attaches to each artifact. Anything else is a
/// hard failure for that artifact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArtifactType {
    #[serde(rename = "vnf-catalog-json")]
    VnfCatalogJson,
    #[serde(rename = "vnf-catalog-xml")]
    VnfCatalogXml,
}

impl FromStr for ArtifactType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "vnf-catalog-json" => Ok(ArtifactType::VnfCatalogJson),
            "vnf-catalog-xml" => Ok(ArtifactType::VnfCatalogXml),
            other => bail!("unrecognized artifact type {:?}", other),
        }
    }
}

/// One distributed artifact: a type tag plus its raw payload.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Artifact {
    pub artifact_type: ArtifactType,
    pub payload: String,
}

impl Artifact {
    pub fn new(artifact_type: ArtifactType, payload: String) -> Self {
        Self {
            artifact_type,
            payload,
        }
    }

    /// Extracts the image records this artifact describes, in document or
    /// array order.
    pub fn image_records(&self) -> Result<Vec<ImageRecord>> {
        match self.artifact_type {
            ArtifactType::VnfCatalogJson => records_from_json(&self.payload),
            ArtifactType::VnfCatalogXml => records_from_xml(&self.payload),
        }
    }
}
