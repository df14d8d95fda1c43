use tests::prelude::*;

use gql::driver::PropertyValue;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn all_returns_every_row() {
    let a = TestModel::new("a", 1);
    let b = TestModel::new("b", 2);

    let (db, mut log) = setup(LoggingTransport::new().respond(vec![entity(&a), entity(&b)]));

    let records = db.all(Query::<TestModel>::all()).await.unwrap();
    assert_eq!(records, [a, b]);

    let query = log.pop_query();
    assert_eq!(query.query_string, "SELECT * FROM TestModel");
    assert!(query.named_args.is_empty());
    assert!(!query.allow_literal);
    assert!(log.is_empty());
}

#[tokio::test]
async fn filters_are_sent_as_named_arguments() {
    let (db, mut log) = setup(LoggingTransport::new());

    let query = Query::<TestModel>::all().filter(
        TestModel::BOOL_VALUE
            .eq(false)
            .and(TestModel::INT_VALUE.ge(4)),
    );

    assert_eq!(
        db.display_text(&query).unwrap(),
        "SELECT * FROM TestModel WHERE BoolValue = @False AND IntValue >= @4"
    );

    assert!(db.all(query).await.unwrap().is_empty());

    let sent = log.pop_query();
    assert_eq!(
        sent.query_string,
        "SELECT * FROM TestModel WHERE BoolValue = @p1 AND IntValue >= @p2"
    );
    assert_eq!(
        sent.named_args,
        [
            ("p1".to_string(), PropertyValue::Boolean(false)),
            ("p2".to_string(), PropertyValue::Integer(4)),
        ]
    );
}

#[tokio::test]
async fn enums_and_decimals_use_their_wire_forms() {
    let (db, mut log) = setup(LoggingTransport::new());

    let query = Query::<TestModel>::all()
        .filter(TestModel::COLOR.eq(Color::Blue))
        .filter(TestModel::DECIMAL_VALUE.eq(rust_decimal::Decimal::new(1005, 2)));

    db.all(query).await.unwrap();

    let sent = log.pop_query();
    assert_eq!(sent.arg("p1"), Some(&PropertyValue::Integer(2)));
    assert_eq!(sent.arg("p2"), Some(&PropertyValue::String("10.05".to_string())));
}

#[tokio::test]
async fn paging_binds_reserved_parameters() {
    let (db, mut log) = setup(LoggingTransport::new());

    let query = Query::<TestModel>::all()
        .take(5)
        .skip(2)
        .filter(TestModel::BOOL_VALUE.eq(false))
        .select(TestModel::SHORT_VALUE);

    assert_eq!(
        db.display_text(&query).unwrap(),
        "SELECT ShortValue FROM TestModel WHERE BoolValue = @False LIMIT @5 OFFSET @2"
    );

    db.all(query).await.unwrap();

    let sent = log.pop_query();
    assert_eq!(
        sent.query_string,
        "SELECT ShortValue FROM TestModel WHERE BoolValue = @p1 LIMIT @qlim OFFSET @qoffset"
    );
    assert_eq!(sent.arg("qlim"), Some(&PropertyValue::Integer(5)));
    assert_eq!(sent.arg("qoffset"), Some(&PropertyValue::Integer(2)));
}

#[tokio::test]
async fn recompiling_is_idempotent() {
    let (db, mut log) = setup(LoggingTransport::new());

    let query = Query::<TestModel>::all()
        .filter(TestModel::STRING_VALUE.eq("abc"))
        .order_by(TestModel::INT_VALUE.desc())
        .take(3);

    db.all(query.clone()).await.unwrap();
    db.all(query).await.unwrap();

    let first = log.pop_query();
    let second = log.pop_query();
    assert_eq!(first, second);
}

#[tokio::test]
async fn transport_failures_propagate_unchanged() {
    let (db, log) = setup(LoggingTransport::new().fail(Error::invalid_result("store unavailable")));

    let err = assert_err!(db.all(Query::<TestModel>::all()).await);
    assert!(err.is_invalid_result());
    assert_eq!(err.to_string(), "invalid result: store unavailable");
    assert_eq!(log.len(), 1);
}
