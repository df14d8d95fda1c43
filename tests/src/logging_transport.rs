use crate::ExecLog;

use gql::{async_trait, Entity, Error, GqlQuery, Key, KeyLookup, Result, Transport};
use std::collections::{HashSet, VecDeque};
use std::sync::{Arc, Mutex};

/// An in-memory transport that replays canned responses and logs every
/// request it receives.
#[derive(Debug, Default)]
pub struct LoggingTransport {
    /// Responses to `run_query`, in order. Once exhausted, queries return
    /// no rows.
    responses: Mutex<VecDeque<Result<Vec<Entity>>>>,

    /// Key names reported as already taken
    taken: Mutex<HashSet<String>>,

    /// Log of all requests made through this transport
    /// Using Arc<Mutex> for thread-safe access from tests
    ops_log: Arc<Mutex<Vec<TransportOp>>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TransportOp {
    RunQuery(GqlQuery),
    Exists(Key),
}

impl LoggingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the rows returned by the next query.
    pub fn respond(self, rows: Vec<Entity>) -> Self {
        self.responses.lock().unwrap().push_back(Ok(rows));
        self
    }

    /// Queue a failure for the next query.
    pub fn fail(self, err: Error) -> Self {
        self.responses.lock().unwrap().push_back(Err(err));
        self
    }

    /// Report `name` as an existing key.
    pub fn taken(self, name: impl Into<String>) -> Self {
        self.taken.lock().unwrap().insert(name.into());
        self
    }

    /// Get a handle to access the operations log
    pub fn exec_log(&self) -> ExecLog {
        ExecLog::new(self.ops_log.clone())
    }
}

#[async_trait]
impl KeyLookup for LoggingTransport {
    async fn exists(&self, key: &Key) -> Result<bool> {
        self.ops_log
            .lock()
            .unwrap()
            .push(TransportOp::Exists(key.clone()));

        Ok(self.taken.lock().unwrap().contains(&key.name))
    }
}

#[async_trait]
impl Transport for LoggingTransport {
    async fn run_query(&self, query: &GqlQuery) -> Result<Vec<Entity>> {
        self.ops_log
            .lock()
            .unwrap()
            .push(TransportOp::RunQuery(query.clone()));

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(vec![]))
    }
}
