use tests::prelude::*;

use gql::{Index, InMemoryIndexes};
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn index(properties: &[&str]) -> Index {
    Index {
        kind: "TestModel".to_string(),
        properties: properties.iter().map(|p| p.to_string()).collect(),
        ancestor: false,
    }
}

#[tokio::test]
async fn records_composite_indexes_once() {
    let indexes = Arc::new(InMemoryIndexes::new());
    let (db, _log) = setup_with(
        LoggingTransport::new(),
        Config::new().generate_index_file(true),
        Some(indexes.clone()),
    );

    // Single property queries are served by built-in indexes.
    db.all(Query::<TestModel>::all().filter(TestModel::BOOL_VALUE))
        .await
        .unwrap();
    assert!(indexes.indexes().is_empty());

    let query = Query::<TestModel>::all()
        .filter(TestModel::BOOL_VALUE.eq(false))
        .filter(TestModel::INT_VALUE.ge(4));

    db.all(query.clone()).await.unwrap();
    db.all(query).await.unwrap();

    db.all(
        Query::<TestModel>::all()
            .filter(TestModel::BOOL_VALUE)
            .order_by(TestModel::INT_VALUE.desc())
            .select((TestModel::STRING_VALUE, TestModel::SHORT_VALUE)),
    )
    .await
    .unwrap();

    assert_eq!(
        indexes.indexes(),
        [
            index(&["BoolValue", "IntValue"]),
            index(&["BoolValue", "IntValue", "StringValue", "ShortValue"]),
        ]
    );
}

#[tokio::test]
async fn projection_counts_as_one_reference() {
    let indexes = Arc::new(InMemoryIndexes::new());
    let (db, _log) = setup_with(
        LoggingTransport::new(),
        Config::new().generate_index_file(true),
        Some(indexes.clone()),
    );

    db.all(Query::<TestModel>::all().select((TestModel::INT_VALUE, TestModel::LONG_VALUE)))
        .await
        .unwrap();
    assert!(indexes.indexes().is_empty());

    db.all(
        Query::<TestModel>::all()
            .filter(TestModel::BOOL_VALUE)
            .select(TestModel::INT_VALUE),
    )
    .await
    .unwrap();
    assert_eq!(indexes.indexes(), [index(&["BoolValue", "IntValue"])]);
}

#[tokio::test]
async fn advisor_is_not_consulted_when_disabled() {
    let indexes = Arc::new(InMemoryIndexes::new());
    let (db, _log) = setup_with(LoggingTransport::new(), Config::new(), Some(indexes.clone()));

    db.all(
        Query::<TestModel>::all()
            .filter(TestModel::BOOL_VALUE)
            .filter(TestModel::INT_VALUE.lt(3)),
    )
    .await
    .unwrap();

    assert!(indexes.indexes().is_empty());
}

#[tokio::test]
async fn index_file_is_rewritten_on_each_new_index() {
    let path = std::env::temp_dir().join(format!(
        "gql-index-file-test-{}.yaml",
        std::process::id()
    ));

    let (db, _log) = setup_with(
        LoggingTransport::new(),
        Config::new()
            .generate_index_file(true)
            .index_file_path(&path),
        None,
    );

    db.all(
        Query::<TestModel>::all()
            .filter(TestModel::BOOL_VALUE)
            .filter(TestModel::INT_VALUE.lt(3)),
    )
    .await
    .unwrap();

    db.all(
        Query::<TestModel>::all()
            .filter(TestModel::COLOR.eq(Color::Red))
            .order_by(TestModel::ID.asc()),
    )
    .await
    .unwrap();

    let yaml = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(
        yaml,
        "indexes:\n\
         - kind: TestModel\n  ancestor: no\n  properties:\n  - name: BoolValue\n  - name: IntValue\n\
         - kind: TestModel\n  ancestor: no\n  properties:\n  - name: Color\n  - name: __key__\n"
    );
}

#[test]
fn index_generation_requires_a_path() {
    let err = assert_err!(Db::builder()
        .config(
            Config::new()
                .generate_index_file(true)
                .index_file_path("")
        )
        .build(LoggingTransport::new()));
    assert!(err.is_invalid_config());
}

#[tokio::test]
async fn hand_written_index_file_is_not_overwritten() {
    let path = std::env::temp_dir().join(format!(
        "gql-index-file-hand-written-{}.yaml",
        std::process::id()
    ));
    let hand_written = "indexes:\n- kind: TestModel\n  properties:\n  - name: IntValue\n    direction: desc\n";
    std::fs::write(&path, hand_written).unwrap();

    let (db, log) = setup_with(
        LoggingTransport::new(),
        Config::new()
            .generate_index_file(true)
            .index_file_path(&path),
        None,
    );

    let res = db
        .all(
            Query::<TestModel>::all()
                .filter(TestModel::BOOL_VALUE)
                .filter(TestModel::INT_VALUE.lt(3)),
        )
        .await;

    let yaml = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_err_kind!(res, is_invalid_config);
    assert_eq!(yaml, hand_written);
    assert!(log.is_empty());
}
