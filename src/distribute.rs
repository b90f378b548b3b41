use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::artifact::Artifact;
use crate::catalog::{FIELD_IMAGE_UUID, ImageRecord};
use crate::inventory::{ImageLookup, InventoryStore};

/// Opaque serialized form of one created image, kept only so rollback can
/// re-extract the generated identifier and delete it again.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedImage {
    pub payload: String,
}

impl CompletedImage {
    fn from_record(record: &ImageRecord) -> anyhow::Result<Self> {
        let payload = serde_json::to_string(record)?;
        Ok(Self { payload })
    }

    pub fn image_uuid(&self) -> Option<String> {
        let record: ImageRecord = serde_json::from_str(&self.payload).ok()?;
        record.get(FIELD_IMAGE_UUID).map(str::to_string)
    }
}

/// What one distribution call did: whether it succeeded, and every creation
/// it performed. On failure the caller decides whether to roll the completed
/// creations back.
#[derive(Clone, Debug, Default)]
pub struct DistributionOutcome {
    pub success: bool,
    pub completed: Vec<CompletedImage>,
}

/// Pushes the image records of each catalog artifact into the inventory
/// store: records that already exist are skipped, missing ones are created
/// under a fresh identifier. Fail-fast: the first store error or failed
/// creation aborts the batch and reports failure, with everything created so
/// far in `completed` for rollback.
pub fn distribute(
    artifacts: &[Artifact],
    distribution_id: &str,
    store: &dyn InventoryStore,
) -> DistributionOutcome {
    let mut completed = Vec::new();

    for artifact in artifacts {
        let records = match artifact.image_records() {
            Ok(records) => records,
            Err(err) => {
                error!(distribution_id, "failed to extract image records: {:#}", err);
                return DistributionOutcome {
                    success: false,
                    completed,
                };
            }
        };

        for mut record in records {
            if record.is_empty() {
                warn!(distribution_id, "empty vnf image record, skipping");
                continue;
            }

            match store.find_image(&record) {
                Ok(ImageLookup::Found { .. }) => {
                    info!(distribution_id, "vnf image already exists, skipping");
                    continue;
                }
                Ok(ImageLookup::NotFound) => {}
                Err(err) => {
                    error!(distribution_id, "vnf image lookup failed: {:#}", err);
                    return DistributionOutcome {
                        success: false,
                        completed,
                    };
                }
            }

            let id = Uuid::new_v4().to_string();
            record.set(FIELD_IMAGE_UUID, &id);
            if let Err(err) = store.create_image(&id, &record) {
                error!(distribution_id, %id, "vnf image creation failed: {:#}", err);
                return DistributionOutcome {
                    success: false,
                    completed,
                };
            }

            match CompletedImage::from_record(&record) {
                Ok(done) => completed.push(done),
                Err(err) => {
                    // The image was created but cannot be tracked for
                    // rollback, so the batch cannot be safely undone.
                    error!(distribution_id, %id, "failed to record creation: {:#}", err);
                    return DistributionOutcome {
                        success: false,
                        completed,
                    };
                }
            }
            info!(distribution_id, %id, "created vnf image");
        }
    }

    DistributionOutcome {
        success: true,
        completed,
    }
}

/// Best-effort undo of every completed creation. Deletion failures are
/// logged and swallowed; once a batch has failed there is no further
/// remediation path. Returns the number of successful deletions.
pub fn rollback(
    completed: &[CompletedImage],
    distribution_id: &str,
    store: &dyn InventoryStore,
) -> usize {
    let mut deleted = 0;
    for image in completed {
        let Some(id) = image.image_uuid() else {
            warn!(distribution_id, "completed payload without an image uuid");
            continue;
        };
        match store.delete_image(&id) {
            Ok(()) => {
                info!(distribution_id, %id, "rolled back vnf image");
                deleted += 1;
            }
            Err(err) => warn!(distribution_id, %id, "rollback deletion failed: {:#}", err),
        }
    }
    deleted
}
