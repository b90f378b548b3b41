use anyhow::Result;

use crate::catalog::ImageRecord;

mod http;

pub use self::http::HttpInventory;

/// Result of looking an image up by its attribute values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageLookup {
    Found { resource_version: String },
    NotFound,
}

/// Seam between the distributor and the inventory store. The distributor
/// only needs existence checks, creations and (for rollback) deletions;
/// tests supply scripted implementations, production uses [`HttpInventory`].
pub trait InventoryStore {
    /// Looks for an image matching every field of the record. A missing
    /// image is [`ImageLookup::NotFound`], not an error; only unexpected
    /// store behavior is.
    fn find_image(&self, record: &ImageRecord) -> Result<ImageLookup>;

    /// Creates an image under the given generated identifier.
    fn create_image(&self, id: &str, record: &ImageRecord) -> Result<()>;

    /// Deletes an image by its generated identifier. Used by rollback only.
    fn delete_image(&self, id: &str) -> Result<()>;
}
