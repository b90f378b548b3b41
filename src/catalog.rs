mod records;

pub use self::records::{
    FIELD_APPLICATION, FIELD_APPLICATION_VENDOR, FIELD_APPLICATION_VERSION, FIELD_IMAGE_UUID,
    ImageRecord, records_from_json, records_from_xml,
};
