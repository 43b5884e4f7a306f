use listing_scout::models::{CommentTranslation, ConditionStatus, ListingRecord, PriceInfo};
use listing_scout::writer::{write_record_files, write_records};
use serde_json::Value;
use std::path::PathBuf;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("listing-scout-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

fn record(adid: Option<&str>) -> ListingRecord {
    let mut record = ListingRecord {
        adid: adid.map(str::to_string),
        price: Some(450000),
        price_info: PriceInfo {
            amount: Some(450000),
            currency_suffix: Some("€".to_string()),
        },
        operation: "sale".to_string(),
        property_type: "homes".to_string(),
        state: "active".to_string(),
        country: "ES".to_string(),
        has_360_vhs: true,
        ..ListingRecord::default()
    };
    record.more_characteristics.status = Some(ConditionStatus::Excellent);
    record.comments.push(CommentTranslation {
        property_comment: "Piso luminoso en Andalucía".to_string(),
        auto_translated: false,
        language: "es".to_string(),
        default_language: true,
    });
    record
}

#[tokio::test]
async fn writes_one_json_array_with_camel_case_keys() {
    let dir = scratch_dir("array");
    let path = dir.join("nested").join("output.json");

    write_records(&path, &[record(Some("101")), record(None)])
        .await
        .unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains('\n'), "output should be indented");
    assert!(text.contains("Andalucía"), "non-ascii text is kept as-is");

    let json: Value = serde_json::from_str(&text).unwrap();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);

    let first = &items[0];
    assert_eq!(first["adid"], "101");
    assert_eq!(first["priceInfo"]["amount"], 450000);
    assert_eq!(first["priceInfo"]["currencySuffix"], "€");
    assert_eq!(first["propertyType"], "homes");
    assert_eq!(first["has360VHS"], true);
    assert_eq!(first["moreCharacteristics"]["status"], "excellent");
    assert_eq!(first["comments"][0]["defaultLanguage"], true);
    assert_eq!(first["comments"][0]["propertyComment"], "Piso luminoso en Andalucía");
    assert!(first["ubication"]["administrativeAreas"]["administrativeAreaLevel1"].is_null());
    assert!(first["ubication"]["latitude"].is_null());
    assert_eq!(items[1]["adid"], Value::Null);

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn empty_run_writes_empty_array() {
    let dir = scratch_dir("empty");
    let path = dir.join("output.json");

    write_records(&path, &[]).await.unwrap();

    let json: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json, Value::Array(vec![]));

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn per_record_files_are_named_by_reference() {
    let dir = scratch_dir("records");

    let written = write_record_files(&dir, &[record(Some("101")), record(None)])
        .await
        .unwrap();

    assert_eq!(written, 2);
    assert!(dir.join("101.json").exists());
    assert!(dir.join("listing_2.json").exists());

    let single: ListingRecord =
        serde_json::from_str(&std::fs::read_to_string(dir.join("101.json")).unwrap()).unwrap();
    assert_eq!(single, record(Some("101")));

    let _ = std::fs::remove_dir_all(&dir);
}
