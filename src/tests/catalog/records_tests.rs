use super::*;

#[test]
fn json_array_parses_in_order() {
    let text = r#"[
        {"application": "vSAMP12", "application-vendor": "Acme", "application-version": "1.0"},
        {"application": "vSAMP13", "application-vendor": "Acme", "application-version": "2.1"}
    ]"#;
    let records = records_from_json(text).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].get(FIELD_APPLICATION), Some("vSAMP12"));
    assert_eq!(records[1].get(FIELD_APPLICATION_VERSION), Some("2.1"));
}

#[test]
fn json_rejects_non_array_payloads() {
    assert!(records_from_json(r#"{"application": "vSAMP12"}"#).is_err());
    assert!(records_from_json("not json").is_err());
}

#[test]
fn xml_catalog_yields_one_record_per_software_version() {
    let text = r#"<catalog>
        <part-number>
            <vendor-info>
                <vendor-model>vSAMP12</vendor-model>
                <vendor>Acme</vendor>
            </vendor-info>
            <software-version-list>
                <software-version>1.0</software-version>
                <software-version>2.0</software-version>
            </software-version-list>
        </part-number>
    </catalog>"#;
    let records = records_from_xml(text).unwrap();
    assert_eq!(records.len(), 2);
    for (record, version) in records.iter().zip(["1.0", "2.0"]) {
        assert_eq!(record.get(FIELD_APPLICATION), Some("vSAMP12"));
        assert_eq!(record.get(FIELD_APPLICATION_VENDOR), Some("Acme"));
        assert_eq!(record.get(FIELD_APPLICATION_VERSION), Some(version));
    }
}

#[test]
fn part_number_without_vendor_info_is_skipped() {
    let text = r#"<catalog>
        <part-number>
            <software-version-list>
                <software-version>9.9</software-version>
            </software-version-list>
        </part-number>
        <part-number>
            <vendor-info>
                <vendor-model>vSAMP14</vendor-model>
                <vendor>Acme</vendor>
            </vendor-info>
            <software-version-list>
                <software-version>3.0</software-version>
            </software-version-list>
        </part-number>
    </catalog>"#;
    let records = records_from_xml(text).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].get(FIELD_APPLICATION), Some("vSAMP14"));
}

#[test]
fn blank_software_versions_contribute_nothing() {
    let text = r#"<catalog>
        <part-number>
            <vendor-info>
                <vendor-model>vSAMP12</vendor-model>
                <vendor>Acme</vendor>
            </vendor-info>
            <software-version-list>
                <software-version>  </software-version>
            </software-version-list>
        </part-number>
    </catalog>"#;
    let records = records_from_xml(text).unwrap();
    assert!(records.is_empty());
}

#[test]
fn record_round_trips_through_json_with_field_order() {
    let mut record = ImageRecord::default();
    record.set(FIELD_APPLICATION, "vSAMP12");
    record.set(FIELD_APPLICATION_VENDOR, "Acme");
    record.set(FIELD_IMAGE_UUID, "0a1b2c3d");
    let text = serde_json::to_string(&record).unwrap();
    let parsed: ImageRecord = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, record);
    assert_eq!(
        parsed.fields.keys().collect::<Vec<_>>(),
        vec![FIELD_APPLICATION, FIELD_APPLICATION_VENDOR, FIELD_IMAGE_UUID]
    );
}
