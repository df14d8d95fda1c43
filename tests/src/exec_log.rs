use crate::TransportOp;

use gql::{GqlQuery, Key};
use std::sync::{Arc, Mutex};

/// A wrapper around the operations log that provides a clean API for tests
#[derive(Debug, Clone)]
pub struct ExecLog {
    ops: Arc<Mutex<Vec<TransportOp>>>,
}

impl ExecLog {
    pub(crate) fn new(ops: Arc<Mutex<Vec<TransportOp>>>) -> Self {
        Self { ops }
    }

    /// Get the number of logged operations
    pub fn len(&self) -> usize {
        self.ops.lock().unwrap().len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.ops.lock().unwrap().is_empty()
    }

    /// Every query sent, in order
    pub fn queries(&self) -> Vec<GqlQuery> {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter_map(|op| match op {
                TransportOp::RunQuery(query) => Some(query.clone()),
                _ => None,
            })
            .collect()
    }

    /// Every key checked for existence, in order
    pub fn lookups(&self) -> Vec<Key> {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter_map(|op| match op {
                TransportOp::Exists(key) => Some(key.clone()),
                _ => None,
            })
            .collect()
    }

    /// Remove and return the first operation from the log
    /// Returns None if the log is empty
    pub fn pop(&mut self) -> Option<TransportOp> {
        let mut ops = self.ops.lock().unwrap();
        if ops.is_empty() {
            None
        } else {
            Some(ops.remove(0))
        }
    }

    /// Remove and return the first operation, which must be a query
    pub fn pop_query(&mut self) -> GqlQuery {
        match self.pop() {
            Some(TransportOp::RunQuery(query)) => query,
            op => panic!("expected a query; op={op:#?}"),
        }
    }
}
