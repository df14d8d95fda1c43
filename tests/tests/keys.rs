use tests::prelude::*;

use gql::Key;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn generates_keys_for_blank_records() {
    let (db, log) = setup(LoggingTransport::new());

    let mut records = [TestModel::new("", 1), TestModel::new("kept", 2)];
    let entities = db.serialize_with_key(&mut records).await.unwrap();

    let generated = records[0].id.clone();
    assert_eq!(generated.len(), 36);
    assert_eq!(records[1].id, "kept");

    assert_eq!(entities[0].key, Some(Key::new("TestModel", generated)));
    assert_eq!(entities[1].key, Some(Key::new("TestModel", "kept")));

    // Uniqueness is only verified when configured.
    assert!(log.is_empty());
}

#[tokio::test]
async fn double_checks_generated_keys_when_configured() {
    let (db, log) = setup_with(
        LoggingTransport::new().taken("kept"),
        Config::new().double_check_generated_ids(true),
        None,
    );

    let mut records = [
        TestModel::new("", 1),
        TestModel::new("kept", 2),
        TestModel::new("", 3),
    ];
    db.serialize_with_key(&mut records).await.unwrap();

    // Existing keys are never checked, generated ones are.
    let lookups = log.lookups();
    assert_eq!(
        lookups,
        [
            Key::new("TestModel", records[0].id.clone()),
            Key::new("TestModel", records[2].id.clone()),
        ]
    );
    assert_ne!(records[0].id, records[2].id);
}

#[test]
fn config_from_json() {
    let config = Config::from_json(
        r#"{
            "generate_index_file": true,
            "index_file_path": "indexes/index.yaml"
        }"#,
    )
    .unwrap();

    assert!(config.generate_index_file);
    assert_eq!(
        config.index_file_path,
        std::path::PathBuf::from("indexes/index.yaml")
    );
    assert!(!config.double_check_generated_ids);
}
