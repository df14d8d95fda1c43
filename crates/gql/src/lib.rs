//! Typed, parameterized GQL queries over record types.
//!
//! Queries are built with [`Query`] from typed field [`Path`]s, compiled to
//! GQL text with named parameters and executed through a [`Transport`] by
//! [`Db`]. Results are decoded back into records, or into the shape chosen
//! with [`Query::select`].

mod config;
pub use config::Config;

pub mod db;
pub use db::Db;

pub mod index;
pub use index::{InMemoryIndexes, Index, IndexAdvisor, IndexFile};

pub mod stmt;
pub use stmt::{
    captured, literal, Expr, IntoExpr, Literal, OrderBy, Path, Primitive, Query, Row, Selector,
};

pub use gql_codec as codec;
pub use gql_query::Compiled;

pub use gql_core::{
    driver::{self, Entity, GqlQuery, Key, KeyLookup, Transport},
    schema::{self, Field, ModelSchema},
    stmt::{EnumVariant, TerminalKind, Type, Value, ValueEnum, ValueRecord},
    Error, Model, Result,
};

pub use gql_core::async_trait;
