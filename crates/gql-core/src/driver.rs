mod entity;
pub use entity::{Entity, Property, PropertyBag, PropertyValue};

mod key;
pub use key::Key;

mod query;
pub use query::GqlQuery;

use crate::async_trait;

use std::fmt::Debug;

/// Answers whether a key is already taken in the store.
#[async_trait]
pub trait KeyLookup: Debug + Send + Sync {
    async fn exists(&self, key: &Key) -> crate::Result<bool>;
}

/// The round trip to the remote store.
///
/// Each call is a single request. Failures are returned unchanged; the
/// caller decides whether to retry.
#[async_trait]
pub trait Transport: KeyLookup {
    /// Run a parameterized query and return the matching entities.
    async fn run_query(&self, query: &GqlQuery) -> crate::Result<Vec<Entity>>;
}
