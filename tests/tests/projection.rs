use tests::prelude::*;

use chrono::{TimeZone, Utc};
use gql::{driver::PropertyValue, Entity, Key};
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;

fn sample() -> TestModel {
    TestModel {
        id: "abc".to_string(),
        bool_value: true,
        short_value: -3,
        int_value: 42,
        long_value: 1 << 40,
        double_value: 2.5,
        decimal_value: rust_decimal::Decimal::new(-1005, 2),
        string_value: "hello".to_string(),
        date_time_value: Utc.with_ymd_and_hms(2016, 4, 1, 13, 5, 9).unwrap(),
        color: Color::Green,
        counters: BTreeMap::from([("x".to_string(), 1), ("y".to_string(), 2)]),
        cached: String::new(),
    }
}

#[tokio::test]
async fn select_single_column() {
    let (db, mut log) = setup(LoggingTransport::new().respond(vec![entity(&sample())]));

    let values = db
        .all(Query::<TestModel>::all().select(TestModel::STRING_VALUE))
        .await
        .unwrap();
    assert_eq!(values, ["hello"]);

    assert_eq!(
        log.pop_query().query_string,
        "SELECT StringValue FROM TestModel"
    );
}

#[tokio::test]
async fn select_tuples_keep_their_shape() {
    let (db, _log) = setup(LoggingTransport::new().respond(vec![entity(&sample())]));

    let rows = db
        .all(Query::<TestModel>::all().select((
            (TestModel::ID, TestModel::COLOR),
            TestModel::DATE_TIME_VALUE,
        )))
        .await
        .unwrap();

    assert_eq!(
        rows,
        [(
            ("abc".to_string(), Color::Green),
            Utc.with_ymd_and_hms(2016, 4, 1, 13, 5, 9).unwrap()
        )]
    );
}

#[tokio::test]
async fn select_key_reads_the_entity_key() {
    let (db, mut log) = setup(LoggingTransport::new().respond(vec![entity(&sample())]));

    let ids = db
        .all(Query::<TestModel>::all().select(TestModel::ID))
        .await
        .unwrap();
    assert_eq!(ids, ["abc"]);

    assert_eq!(
        log.pop_query().query_string,
        "SELECT __key__ FROM TestModel"
    );
}

#[tokio::test]
async fn projected_timestamps_may_arrive_as_milliseconds() {
    let at = Utc.with_ymd_and_hms(2016, 4, 1, 13, 5, 9).unwrap();
    let row = Entity::new(Some(Key::new("TestModel", "abc"))).with(
        "DateTimeValue",
        gql::driver::Property::indexed(PropertyValue::Integer(at.timestamp_millis())),
    );

    let (db, _log) = setup(LoggingTransport::new().respond(vec![row]));

    let values = db
        .all(Query::<TestModel>::all().select(TestModel::DATE_TIME_VALUE))
        .await
        .unwrap();
    assert_eq!(values, [at]);
}

#[tokio::test]
async fn select_row_and_literal() {
    let record = sample();
    let (db, _log) = setup(
        LoggingTransport::new()
            .respond(vec![entity(&record)])
            .respond(vec![entity(&record), entity(&record)]),
    );

    let rows = db
        .all(Query::<TestModel>::all().select(Row))
        .await
        .unwrap();
    assert_eq!(rows, [record]);

    let ones = db
        .all(Query::<TestModel>::all().select(literal(1_i32)))
        .await
        .unwrap();
    assert_eq!(ones, [1, 1]);
}

#[tokio::test]
async fn first_with_projection() {
    let (db, _log) = setup(LoggingTransport::new().respond(vec![entity(&sample())]));

    let value = db
        .first(Query::<TestModel>::all().select((TestModel::INT_VALUE, TestModel::BOOL_VALUE)))
        .await
        .unwrap();
    assert_eq!(value, (42, true));
}

#[tokio::test]
async fn missing_projected_column() {
    let row = Entity::new(Some(Key::new("TestModel", "abc")));
    let (db, _log) = setup(LoggingTransport::new().respond(vec![row]));

    assert_err_kind!(
        db.all(Query::<TestModel>::all().select(TestModel::INT_VALUE))
            .await,
        is_invalid_result
    );
}

#[tokio::test]
async fn full_rows_round_trip_maps() {
    let record = sample();
    let stored = entity(&record);

    assert_eq!(
        stored.get("g/kv_Counters_g/k_x").map(|p| &p.value),
        Some(&PropertyValue::Integer(1))
    );

    let (db, _log) = setup(LoggingTransport::new().respond(vec![stored]));
    let rows = db.all(Query::<TestModel>::all()).await.unwrap();
    assert_eq!(rows, [record]);
}
