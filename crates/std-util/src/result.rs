/// Asserts the expression is `Err` and evaluates to the error.
#[macro_export]
macro_rules! assert_err {
    ($e:expr $(, $($t:tt)* )?) => {
        match $e {
            Err(e) => e,
            actual => {
                use std::fmt::Write;
                let mut msg = format!("expected `Err`; actual={:?}", actual);

                $(
                    write!(msg, ", ").unwrap();
                    write!(msg, $($t)*).unwrap();
                )?

                panic!("{}", msg);
            }
        }
    };
}

/// Asserts the expression is `Ok` and evaluates to the value.
#[macro_export]
macro_rules! assert_ok {
    ($e:expr) => {
        match $e {
            Ok(v) => v,
            actual => panic!("expected `Ok`; actual={:?}", actual),
        }
    };
}

/// Asserts the expression is an `Err` whose error satisfies the named
/// predicate method, and evaluates to the error.
///
/// ```ignore
/// let err = assert_err_kind!(compile(&pipeline), is_unsupported_query_shape);
/// ```
#[macro_export]
macro_rules! assert_err_kind {
    ($e:expr, $kind:ident) => {{
        let err = $crate::assert_err!($e);
        assert!(
            err.$kind(),
            "expected error satisfying `{}`; actual={}",
            stringify!($kind),
            err
        );
        err
    }};
}
