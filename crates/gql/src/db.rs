mod builder;
pub use builder::Builder;

use crate::{Config, IndexAdvisor, Query};

use gql_core::{
    driver::{Entity, Transport},
    stmt::{Pipeline, TerminalKind},
    Error, Model, Result,
};
use gql_query::Compiled;

use std::sync::Arc;

/// Shared state between all `Db` clones.
#[derive(Debug)]
struct Shared {
    transport: Arc<dyn Transport>,
    config: Config,
    advisor: Option<Arc<dyn IndexAdvisor>>,
}

/// Executes typed queries against a store.
///
/// Each execution compiles the query afresh, binds its parameters and makes
/// exactly one round trip through the transport. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct Db {
    shared: Arc<Shared>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn config(&self) -> &Config {
        &self.shared.config
    }

    pub fn transport(&self) -> &dyn Transport {
        &*self.shared.transport
    }

    /// Compile a query without executing it.
    pub fn compile<M, O>(&self, query: &Query<M, O>) -> Result<Compiled>
    where
        M: Model,
    {
        gql_query::compile(query.pipeline())
    }

    /// The query text with parameter values inlined, for diagnostics.
    pub fn display_text<M, O>(&self, query: &Query<M, O>) -> Result<String>
    where
        M: Model,
    {
        gql_query::to_display_text(query.pipeline())
    }

    /// Execute a query, returning every row.
    pub async fn all<M: Model, O>(&self, query: Query<M, O>) -> Result<Vec<O>> {
        let load = query.loader();
        let (compiled, rows) = self.fetch(query.pipeline()).await?;

        gql_codec::project(rows, compiled.plan, M::schema())
            .map(|value| load(value?))
            .collect()
    }

    /// The first row. Fails when there is none.
    pub async fn first<M: Model, O>(&self, query: Query<M, O>) -> Result<O> {
        self.exec_terminal(query, TerminalKind::First)
            .await?
            .ok_or_else(no_elements)
    }

    pub async fn first_or_default<M: Model, O>(&self, query: Query<M, O>) -> Result<Option<O>> {
        self.exec_terminal(query, TerminalKind::FirstOrDefault).await
    }

    /// The only row. Fails when there is none or more than one.
    pub async fn single<M: Model, O>(&self, query: Query<M, O>) -> Result<O> {
        self.exec_terminal(query, TerminalKind::Single)
            .await?
            .ok_or_else(no_elements)
    }

    /// The only row, if any. Fails when there is more than one.
    pub async fn single_or_default<M: Model, O>(&self, query: Query<M, O>) -> Result<Option<O>> {
        self.exec_terminal(query, TerminalKind::SingleOrDefault).await
    }

    /// Whether any record matches.
    pub async fn any<M: Model, O>(&self, query: Query<M, O>) -> Result<bool> {
        let query = query.terminal(TerminalKind::Any, None);
        let (_, rows) = self.fetch(query.pipeline()).await?;
        Ok(!rows.is_empty())
    }

    /// Serialize records, generating keys for those that have none.
    ///
    /// With [`Config::double_check_generated_ids`], each generated key is
    /// checked against the store before it is used.
    pub async fn serialize_with_key<M: Model>(&self, records: &mut [M]) -> Result<Vec<Entity>> {
        gql_codec::serialize_with_key(
            records,
            &*self.shared.transport,
            self.shared.config.double_check_generated_ids,
        )
        .await
    }

    async fn exec_terminal<M: Model, O>(
        &self,
        query: Query<M, O>,
        kind: TerminalKind,
    ) -> Result<Option<O>> {
        let load = query.loader();
        let query = query.terminal(kind, None);
        let (compiled, rows) = self.fetch(query.pipeline()).await?;

        if rows.is_empty() {
            return if kind.allows_default() {
                Ok(None)
            } else {
                Err(no_elements())
            };
        }

        if kind.is_single() && rows.len() > 1 {
            return Err(Error::too_many_records(
                "sequence contains more than one element",
            ));
        }

        match gql_codec::project(rows, compiled.plan, M::schema()).next() {
            Some(value) => Ok(Some(load(value?)?)),
            None => Ok(None),
        }
    }

    async fn fetch(&self, pipeline: &Pipeline) -> Result<(Compiled, Vec<Entity>)> {
        let compiled = gql_query::compile(pipeline)?;

        if let Some(advisor) = &self.shared.advisor {
            advisor.advise(&compiled)?;
        }

        let query = gql_codec::bind_params(&compiled)?;
        let rows = self.shared.transport.run_query(&query).await?;

        tracing::debug!(kind = compiled.kind, rows = rows.len(), "query returned");

        Ok((compiled, rows))
    }
}

fn no_elements() -> Error {
    Error::record_not_found("sequence contains no elements")
}
