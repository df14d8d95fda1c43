use super::{InMemoryIndexes, Index, IndexAdvisor};

use gql_core::{Error, Result};
use gql_query::Compiled;

use std::{
    io,
    path::{Path, PathBuf},
    sync::atomic::{AtomicBool, Ordering},
};

/// Writes every known index to an `index.yaml` file.
///
/// The whole file is rewritten each time a new index is recorded. An
/// existing file at the path is not read; indexes from earlier runs are
/// replaced. A file holding anything other than generated index entries is
/// never overwritten: the first write fails with an invalid config error.
#[derive(Debug)]
pub struct IndexFile {
    path: PathBuf,
    known: InMemoryIndexes,

    /// The existing file at `path` has been checked
    checked: AtomicBool,
}

impl IndexFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            known: InMemoryIndexes::new(),
            checked: AtomicBool::new(false),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn indexes(&self) -> Vec<Index> {
        self.known.indexes()
    }

    fn write(&self) -> Result<()> {
        if !self.checked.load(Ordering::Acquire) {
            self.check_existing()?;
            self.checked.store(true, Ordering::Release);
        }

        std::fs::write(&self.path, self.known.to_yaml()).map_err(|err| {
            Error::from(err).context(gql_core::err!(
                "writing index file `{}`",
                self.path.display()
            ))
        })
    }

    fn check_existing(&self) -> Result<()> {
        let existing = match std::fs::read_to_string(&self.path) {
            Ok(existing) => existing,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(err) => {
                return Err(Error::from(err).context(gql_core::err!(
                    "reading index file `{}`",
                    self.path.display()
                )))
            }
        };

        if super::is_generated_yaml(&existing) {
            return Ok(());
        }

        Err(Error::invalid_config(format!(
            "index file `{}` holds entries that were not generated; refusing to overwrite it",
            self.path.display()
        )))
    }
}

impl IndexAdvisor for IndexFile {
    fn advise(&self, compiled: &Compiled) -> Result<()> {
        let Some(index) = Index::required_by(compiled) else {
            return Ok(());
        };

        if self.known.record(index) {
            self.write()?;
        }

        Ok(())
    }
}
