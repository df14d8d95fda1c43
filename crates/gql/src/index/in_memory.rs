use super::{Index, IndexAdvisor};

use gql_core::Result;
use gql_query::Compiled;

use std::sync::{Mutex, PoisonError};

/// Keeps the indexes queries have needed, in the order they were first seen.
#[derive(Debug, Default)]
pub struct InMemoryIndexes {
    indexes: Mutex<Vec<Index>>,
}

impl InMemoryIndexes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `index` unless an index of the same kind over the same
    /// property sequence is already known. Returns `true` when it was added.
    pub fn record(&self, index: Index) -> bool {
        let mut indexes = self.indexes.lock().unwrap_or_else(PoisonError::into_inner);

        if indexes
            .iter()
            .any(|known| known.kind == index.kind && known.properties == index.properties)
        {
            return false;
        }

        tracing::info!(
            kind = %index.kind,
            properties = ?index.properties,
            "recorded composite index"
        );

        indexes.push(index);
        true
    }

    pub fn indexes(&self) -> Vec<Index> {
        self.indexes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn to_yaml(&self) -> String {
        super::to_yaml(&self.indexes())
    }
}

impl IndexAdvisor for InMemoryIndexes {
    fn advise(&self, compiled: &Compiled) -> Result<()> {
        if let Some(index) = Index::required_by(compiled) {
            self.record(index);
        }
        Ok(())
    }
}
