mod expr;
pub use expr::{captured, Expr};

mod into_expr;
pub use into_expr::IntoExpr;

mod order_by;
pub use order_by::OrderBy;

mod path;
pub use path::Path;

mod primitive;
pub use primitive::Primitive;

mod primitive_chrono;

mod query;
pub use query::Query;

mod select;
pub use select::{literal, Literal, Row, Selector};
