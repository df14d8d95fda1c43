use tests::prelude::*;

use gql::driver::PropertyValue;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn first_returns_the_first_row() {
    let a = TestModel::new("a", 1);
    let b = TestModel::new("b", 2);

    let (db, mut log) = setup(LoggingTransport::new().respond(vec![entity(&a), entity(&b)]));

    let first = db.first(Query::<TestModel>::all()).await.unwrap();
    assert_eq!(first, a);

    let sent = log.pop_query();
    assert_eq!(sent.query_string, "SELECT * FROM TestModel LIMIT @qlim");
    assert_eq!(sent.arg("qlim"), Some(&PropertyValue::Integer(1)));
}

#[tokio::test]
async fn first_on_empty_result() {
    let (db, _log) = setup(LoggingTransport::new());

    let err = assert_err_kind!(
        db.first(Query::<TestModel>::all()).await,
        is_record_not_found
    );
    assert_eq!(
        err.to_string(),
        "record not found: sequence contains no elements"
    );
}

#[tokio::test]
async fn first_or_default_on_empty_result() {
    let (db, _log) = setup(LoggingTransport::new());

    let first = db
        .first_or_default(Query::<TestModel>::all().filter(TestModel::BOOL_VALUE))
        .await
        .unwrap();
    assert_eq!(first, None);
}

#[tokio::test]
async fn single_requests_two_rows() {
    let a = TestModel::new("a", 1);

    let (db, mut log) = setup(LoggingTransport::new().respond(vec![entity(&a)]));

    let single = db.single(Query::<TestModel>::all()).await.unwrap();
    assert_eq!(single, a);

    let sent = log.pop_query();
    assert_eq!(sent.arg("qlim"), Some(&PropertyValue::Integer(2)));
}

#[tokio::test]
async fn single_with_more_than_one_row() {
    let a = TestModel::new("a", 1);
    let b = TestModel::new("b", 2);

    let (db, _log) = setup(
        LoggingTransport::new()
            .respond(vec![entity(&a), entity(&b)])
            .respond(vec![entity(&a), entity(&b)]),
    );

    assert_err_kind!(
        db.single(Query::<TestModel>::all()).await,
        is_too_many_records
    );
    assert_err_kind!(
        db.single_or_default(Query::<TestModel>::all()).await,
        is_too_many_records
    );
}

#[tokio::test]
async fn single_on_empty_result() {
    let (db, _log) = setup(LoggingTransport::new());

    assert_err_kind!(
        db.single(Query::<TestModel>::all()).await,
        is_record_not_found
    );
    assert_eq!(
        db.single_or_default(Query::<TestModel>::all())
            .await
            .unwrap(),
        None
    );
}

#[tokio::test]
async fn any_reports_whether_rows_matched() {
    let a = TestModel::new("a", 1);

    let (db, mut log) = setup(LoggingTransport::new().respond(vec![entity(&a)]));

    let query = Query::<TestModel>::all().filter(TestModel::INT_VALUE.gt(0));
    assert!(db.any(query.clone()).await.unwrap());
    assert!(!db.any(query).await.unwrap());

    let sent = log.pop_query();
    assert_eq!(
        sent.query_string,
        "SELECT * FROM TestModel WHERE IntValue > @p1 LIMIT @qlim"
    );
    assert_eq!(sent.arg("qlim"), Some(&PropertyValue::Integer(1)));
}

#[tokio::test]
async fn terminal_combined_with_take_is_rejected() {
    let (db, log) = setup(LoggingTransport::new());

    assert_err_kind!(
        db.first(Query::<TestModel>::all().take(3)).await,
        is_invalid_pipeline_construction
    );
    assert!(log.is_empty());
}
