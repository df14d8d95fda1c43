pub mod driver;
pub use driver::{KeyLookup, Transport};

mod error;
pub use error::{Error, IntoError};

mod model;
pub use model::Model;

pub mod schema;
pub use schema::ModelSchema;

pub mod stmt;

/// A Result type alias that uses the crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
