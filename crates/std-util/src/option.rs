/// Asserts the expression is `None`.
#[macro_export]
macro_rules! assert_none {
    ($e:expr) => {
        match $e {
            None => {}
            actual => panic!("expected `None`; actual={:?}", actual),
        }
    };
}

/// Asserts the expression is `Some` and evaluates to the value.
#[macro_export]
macro_rules! assert_some {
    ($e:expr) => {
        match $e {
            Some(v) => v,
            actual => panic!("expected `Some`; actual={:?}", actual),
        }
    };
}
