use anyhow::{Context, Result};
use indexmap::IndexMap;
use roxmltree::{Document, Node};
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const FIELD_APPLICATION: &str = "application";
pub const FIELD_APPLICATION_VENDOR: &str = "application-vendor";
pub const FIELD_APPLICATION_VERSION: &str = "application-version";
/// Generated identifier attached immediately before creation; rollback
/// re-extracts it from the completed payload to issue deletions.
pub const FIELD_IMAGE_UUID: &str = "vnf-image-uuid";

const PART_NUMBER_TAG: &str = "part-number";
const VENDOR_INFO_TAG: &str = "vendor-info";
const VENDOR_MODEL_TAG: &str = "vendor-model";
const VENDOR_TAG: &str = "vendor";
const SOFTWARE_VERSION_TAG: &str = "software-version";

/// One VNF image described as ordered attribute name/value pairs. Field
/// order follows extraction order and is preserved through serialization.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRecord {
    pub fields: IndexMap<String, String>,
}

impl ImageRecord {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn set(&mut self, name: &str, value: &str) {
        self.fields.insert(name.to_string(), value.to_string());
    }
}

/// Parses a JSON array of string-to-string objects, one record per element,
/// in array order.
pub fn records_from_json(text: &str) -> Result<Vec<ImageRecord>> {
    serde_json::from_str(text).context("parse vnf catalog json")
}

/// Extracts image records from an XML catalog document: for every
/// part-number element with a nested vendor-info block, one record per
/// software-version entry under that part number, carrying the vendor-info
/// model and vendor plus the version.
pub fn records_from_xml(text: &str) -> Result<Vec<ImageRecord>> {
    let doc = Document::parse(text).context("parse vnf catalog xml")?;
    let mut records = Vec::new();

    for part in doc
        .root()
        .descendants()
        .filter(|n| n.is_element() && tag_is(*n, PART_NUMBER_TAG))
    {
        let Some(vendor_info) = part
            .descendants()
            .skip(1)
            .find(|n| n.is_element() && tag_is(*n, VENDOR_INFO_TAG))
        else {
            warn!("part number without vendor-info, skipping");
            continue;
        };

        let mut application = ImageRecord::default();
        if let Some(model) = child_text(vendor_info, VENDOR_MODEL_TAG) {
            application.set(FIELD_APPLICATION, model);
        }
        if let Some(vendor) = child_text(vendor_info, VENDOR_TAG) {
            application.set(FIELD_APPLICATION_VENDOR, vendor);
        }

        for version in part
            .descendants()
            .skip(1)
            .filter(|n| n.is_element() && tag_is(*n, SOFTWARE_VERSION_TAG))
        {
            let text = version.text().map(str::trim).unwrap_or("");
            if text.is_empty() {
                continue;
            }
            let mut record = application.clone();
            record.set(FIELD_APPLICATION_VERSION, text);
            records.push(record);
        }
    }

    Ok(records)
}

fn tag_is(node: Node, tag: &str) -> bool {
    node.tag_name().name().eq_ignore_ascii_case(tag)
}

fn child_text<'a>(node: Node<'a, '_>, tag: &str) -> Option<&'a str> {
    node.children()
        .filter(|c| c.is_element() && tag_is(*c, tag))
        .find_map(|c| c.text())
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

#[cfg(test)]
#[path = "../tests/catalog/records_tests.rs"]
mod tests;
