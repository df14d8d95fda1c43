mod direction;
pub use direction::Direction;

mod expr;
pub use expr::{Expr, ExprAnd, ExprBinaryOp, ExprMember, ExprMethod, ExprOr, ExprRecord};

mod expr_captured;
pub use expr_captured::Captured;

mod op_binary;
pub use op_binary::BinaryOp;

mod pipeline;
pub use pipeline::{Pipeline, Stage, TerminalKind};

mod ty;
pub use ty::Type;

mod ty_enum;
pub use ty_enum::EnumVariant;

mod value;
pub use value::Value;

mod value_chrono;

mod value_enum;
pub use value_enum::ValueEnum;

mod value_record;
pub use value_record::ValueRecord;
