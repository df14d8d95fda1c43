use tests::prelude::*;

#[tokio::test]
async fn or_fails_before_any_transport_call() {
    let (db, log) = setup(LoggingTransport::new());

    let query = Query::<TestModel>::all().filter(
        TestModel::BOOL_VALUE
            .eq(true)
            .or(TestModel::INT_VALUE.eq(0)),
    );

    let err = assert_err_kind!(db.all(query).await, is_unsupported_query_shape);
    assert_eq!(err.to_string(), "unsupported query shape: OR is not supported");
    assert!(log.is_empty());
}

#[tokio::test]
async fn not_equal_is_rejected() {
    let (db, log) = setup(LoggingTransport::new());

    let query = Query::<TestModel>::all().filter(TestModel::INT_VALUE.ne(0));
    assert_err_kind!(db.any(query).await, is_unsupported_query_shape);
    assert!(log.is_empty());
}

#[tokio::test]
async fn always_false_filter_is_rejected() {
    let (db, log) = setup(LoggingTransport::new());

    let query = Query::<TestModel>::all().filter(gql::Expr::<bool>::from_untyped(false));
    assert_err_kind!(db.all(query).await, is_invalid_pipeline_construction);
    assert!(log.is_empty());
}

#[tokio::test]
async fn always_true_filter_is_dropped() {
    let (db, mut log) = setup(LoggingTransport::new());

    let query = Query::<TestModel>::all().filter(gql::Expr::<bool>::from_untyped(true));
    db.all(query).await.unwrap();

    assert_eq!(log.pop_query().query_string, "SELECT * FROM TestModel");
}

#[tokio::test]
async fn second_ordering_is_rejected() {
    let (db, _log) = setup(LoggingTransport::new());

    let query = Query::<TestModel>::all()
        .order_by(TestModel::INT_VALUE.asc())
        .order_by(TestModel::LONG_VALUE.desc());

    assert_err_kind!(db.all(query).await, is_unsupported_query_shape);
}
