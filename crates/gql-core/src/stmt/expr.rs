use super::{BinaryOp, Captured, Value};

/// A predicate or selector over the bound row.
#[derive(Debug, Clone)]
pub enum Expr {
    /// The bound row itself
    Row,

    /// A member of the bound row; more than one segment is a deep chain
    Member(ExprMember),

    /// A literal value
    Value(Value),

    /// A deferred value, folded into a literal at translation time
    Captured(Captured),

    /// Boolean negation
    Not(Box<Expr>),

    /// Comparison
    BinaryOp(ExprBinaryOp),

    /// Conjunction
    And(ExprAnd),

    /// Disjunction. The store cannot express it.
    Or(ExprOr),

    /// A method call on a member, such as a containment test
    Method(ExprMethod),

    /// A record built from other expressions
    Record(ExprRecord),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprMember {
    pub path: Vec<&'static str>,
}

#[derive(Debug, Clone)]
pub struct ExprBinaryOp {
    pub lhs: Box<Expr>,
    pub op: BinaryOp,
    pub rhs: Box<Expr>,
}

#[derive(Debug, Clone)]
pub struct ExprAnd {
    pub operands: Vec<Expr>,
}

#[derive(Debug, Clone)]
pub struct ExprOr {
    pub operands: Vec<Expr>,
}

#[derive(Debug, Clone)]
pub struct ExprMethod {
    pub receiver: Box<Expr>,
    pub name: &'static str,
    pub args: Vec<Expr>,
}

#[derive(Debug, Clone)]
pub struct ExprRecord {
    pub fields: Vec<Expr>,
}

impl Expr {
    pub fn member(name: &'static str) -> Self {
        Self::Member(ExprMember { path: vec![name] })
    }

    pub fn member_path(path: impl IntoIterator<Item = &'static str>) -> Self {
        Self::Member(ExprMember {
            path: path.into_iter().collect(),
        })
    }

    pub fn value(value: impl Into<Value>) -> Self {
        Self::Value(value.into())
    }

    pub fn captured(f: impl Fn() -> Value + Send + Sync + 'static) -> Self {
        Self::Captured(Captured::new(f))
    }

    pub fn not(expr: impl Into<Expr>) -> Self {
        Self::Not(Box::new(expr.into()))
    }

    pub fn binary_op(lhs: impl Into<Expr>, op: BinaryOp, rhs: impl Into<Expr>) -> Self {
        Self::BinaryOp(ExprBinaryOp {
            lhs: Box::new(lhs.into()),
            op,
            rhs: Box::new(rhs.into()),
        })
    }

    pub fn eq(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        Self::binary_op(lhs, BinaryOp::Eq, rhs)
    }

    pub fn ne(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        Self::binary_op(lhs, BinaryOp::Ne, rhs)
    }

    pub fn lt(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        Self::binary_op(lhs, BinaryOp::Lt, rhs)
    }

    pub fn le(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        Self::binary_op(lhs, BinaryOp::Le, rhs)
    }

    pub fn gt(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        Self::binary_op(lhs, BinaryOp::Gt, rhs)
    }

    pub fn ge(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        Self::binary_op(lhs, BinaryOp::Ge, rhs)
    }

    /// Conjunction of two expressions, flattening nested conjunctions.
    pub fn and(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        let mut operands = vec![];
        for expr in [lhs.into(), rhs.into()] {
            match expr {
                Expr::And(and) => operands.extend(and.operands),
                expr => operands.push(expr),
            }
        }
        Self::And(ExprAnd { operands })
    }

    pub fn or(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        let mut operands = vec![];
        for expr in [lhs.into(), rhs.into()] {
            match expr {
                Expr::Or(or) => operands.extend(or.operands),
                expr => operands.push(expr),
            }
        }
        Self::Or(ExprOr { operands })
    }

    pub fn method(receiver: impl Into<Expr>, name: &'static str, args: Vec<Expr>) -> Self {
        Self::Method(ExprMethod {
            receiver: Box::new(receiver.into()),
            name,
            args,
        })
    }

    pub fn record(fields: impl IntoIterator<Item = Expr>) -> Self {
        Self::Record(ExprRecord {
            fields: fields.into_iter().collect(),
        })
    }

    /// Returns the literal boolean this expression is, if any.
    pub fn as_bool_literal(&self) -> Option<bool> {
        match self {
            Self::Value(Value::Bool(v)) => Some(*v),
            _ => None,
        }
    }
}

impl ExprMember {
    /// The single field name this member refers to, or `None` for a deep
    /// chain.
    pub fn name(&self) -> Option<&'static str> {
        match self.path[..] {
            [name] => Some(name),
            _ => None,
        }
    }

    pub fn dotted(&self) -> String {
        self.path.join(".")
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<bool> for Expr {
    fn from(value: bool) -> Self {
        Self::Value(Value::Bool(value))
    }
}

impl From<ExprMember> for Expr {
    fn from(value: ExprMember) -> Self {
        Self::Member(value)
    }
}
