use anyhow::{Context, Result, bail};
use reqwest::StatusCode;

use crate::catalog::{FIELD_IMAGE_UUID, ImageRecord};

use super::{ImageLookup, InventoryStore};

const VNF_IMAGE_PATH: &str = "/vnf-image";
const RESOURCE_VERSION_FIELD: &str = "resource-version";

/// Blocking REST client for the graph inventory store's vnf-image resource.
pub struct HttpInventory {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpInventory {
    pub fn new(base_url: String) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("modelgraft")
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Queries the image collection; 200 yields the body, 404 yields None,
    /// anything else is an unexpected failure.
    fn query(&self, params: &[(&str, &str)], label: &str) -> Result<Option<serde_json::Value>> {
        let resp = self
            .client
            .get(self.url(VNF_IMAGE_PATH))
            .query(params)
            .send()
            .with_context(|| format!("{} request", label))?;
        match resp.status() {
            StatusCode::OK => {
                let body = resp
                    .json::<serde_json::Value>()
                    .with_context(|| format!("{} body", label))?;
                Ok(Some(body))
            }
            StatusCode::NOT_FOUND => Ok(None),
            status => bail!("unexpected status {} from {}", status, label),
        }
    }
}

impl InventoryStore for HttpInventory {
    fn find_image(&self, record: &ImageRecord) -> Result<ImageLookup> {
        let params: Vec<(&str, &str)> = record
            .fields
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        match self.query(&params, "query vnf-image")? {
            Some(body) => {
                let resource_version = find_string_field(&body, RESOURCE_VERSION_FIELD)
                    .context("vnf-image response without a resource-version")?;
                Ok(ImageLookup::Found { resource_version })
            }
            None => Ok(ImageLookup::NotFound),
        }
    }

    fn create_image(&self, id: &str, record: &ImageRecord) -> Result<()> {
        let resp = self
            .client
            .put(self.url(&format!("{}/{}", VNF_IMAGE_PATH, id)))
            .json(record)
            .send()
            .context("create vnf-image request")?;
        if resp.status() != StatusCode::CREATED {
            bail!("unexpected status {} creating vnf-image {}", resp.status(), id);
        }
        Ok(())
    }

    fn delete_image(&self, id: &str) -> Result<()> {
        // The store requires the current resource version on deletes, so
        // look the image up by its generated identifier first.
        let Some(body) = self.query(&[(FIELD_IMAGE_UUID, id)], "query vnf-image for delete")?
        else {
            // Already gone; nothing to undo.
            return Ok(());
        };
        let resource_version = find_string_field(&body, RESOURCE_VERSION_FIELD)
            .context("vnf-image response without a resource-version")?;

        self.client
            .delete(self.url(&format!("{}/{}", VNF_IMAGE_PATH, id)))
            .query(&[(RESOURCE_VERSION_FIELD, resource_version.as_str())])
            .send()
            .context("delete vnf-image request")?
            .error_for_status()
            .context("delete vnf-image status")?;
        Ok(())
    }
}

/// Depth-first search for the first string value under the given key,
/// tolerating the store's habit of nesting results in wrapper arrays.
fn find_string_field(value: &serde_json::Value, field: &str) -> Option<String> {
    match value {
        serde_json::Value::Object(map) => {
            if let Some(serde_json::Value::String(s)) = map.get(field) {
                return Some(s.clone());
            }
            map.values().find_map(|v| find_string_field(v, field))
        }
        serde_json::Value::Array(items) => {
            items.iter().find_map(|v| find_string_field(v, field))
        }
        _ => None,
    }
}
