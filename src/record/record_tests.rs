use super::*;
use chrono::TimeZone;
use serde_json::json;

fn sample() -> Record {
    let mut record = Record::new("book", RecordStatus::Published, "Dune");
    record.id = RecordId::new(42);
    record.creation = Some(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap());
    record.created_by = Some("alice".to_string());
    record.reference = Some(7);
    record.slug = Some("dune".to_string());
    record.fields.insert("author".to_string(), json!("Herbert"));
    record
}

#[test]
fn test_record_id_rejects_zero() {
    assert!(RecordId::new(0).is_none());
    assert_eq!(RecordId::new(5).map(RecordId::get), Some(5));
}

#[test]
fn test_record_id_parse_param() {
    assert_eq!(RecordId::parse_param("42"), RecordId::new(42));
    assert_eq!(RecordId::parse_param(" 42 "), RecordId::new(42));
    assert!(RecordId::parse_param("").is_none());
    assert!(RecordId::parse_param("0").is_none());
    assert!(RecordId::parse_param("-3").is_none());
    assert!(RecordId::parse_param("abc").is_none());
}

#[test]
fn test_status_round_trips_through_strings() {
    for raw in ["published", "draft", "auto-draft", "pending", "private", "trash", "archived"] {
        let status = RecordStatus::from(raw);
        assert_eq!(String::from(status), raw);
    }
    assert_eq!(RecordStatus::from("publish"), RecordStatus::Published);
    assert_eq!(
        RecordStatus::from("archived"),
        RecordStatus::Other("archived".to_string())
    );
}

#[test]
fn test_status_serializes_as_plain_string() {
    let value = serde_json::to_value(RecordStatus::AutoDraft).unwrap();
    assert_eq!(value, json!("auto-draft"));
}

#[test]
fn test_new_record_is_new() {
    let record = Record::new("book", RecordStatus::Draft, "");
    assert!(record.is_new());
    assert!(!sample().is_new());
}

#[test]
fn test_has_field_covers_provenance_and_content() {
    let record = sample();
    assert!(record.has_field("creation"));
    assert!(record.has_field("createdBy"));
    assert!(!record.has_field("lastupdate"));
    assert!(record.has_field("ref"));
    assert!(record.has_field("author"));
    assert!(!record.has_field("isbn"));
}

#[test]
fn test_provenance_name_in_content_counts_and_is_reset() {
    let mut record = Record::new("book", RecordStatus::Published, "Dune");
    record.fields.insert("slug".to_string(), json!("old-slug"));
    assert!(record.has_field("slug"));

    ProvenanceField::Slug.reset(&mut record);
    assert!(!record.has_field("slug"));
    assert!(record.fields.is_empty());
}

#[test]
fn test_reset_makes_field_absent_in_json() {
    let mut record = sample();
    for field in ProvenanceField::ALL {
        field.reset(&mut record);
    }
    let value = serde_json::to_value(&record).unwrap();
    let object = value.as_object().unwrap();
    for field in ProvenanceField::ALL {
        assert!(!object.contains_key(field.as_str()), "{} present", field.as_str());
    }
    assert_eq!(object.get("ID"), Some(&json!(42)));
}

#[test]
fn test_provenance_from_name() {
    assert_eq!(ProvenanceField::from_name("ref"), Some(ProvenanceField::Ref));
    assert_eq!(ProvenanceField::from_name("title"), None);
}
