use super::{Db, Shared};
use crate::{Config, IndexAdvisor, IndexFile};

use gql_core::{driver::Transport, Error, Result};
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct Builder {
    config: Config,

    /// Replaces the index file named by the configuration
    advisor: Option<Arc<dyn IndexAdvisor>>,
}

impl Builder {
    pub fn config(&mut self, config: Config) -> &mut Self {
        self.config = config;
        self
    }

    /// Use `advisor` instead of the index file named by the configuration.
    ///
    /// Advice is only taken when [`Config::generate_index_file`] is set.
    pub fn index_advisor(&mut self, advisor: Arc<dyn IndexAdvisor>) -> &mut Self {
        self.advisor = Some(advisor);
        self
    }

    pub fn build(&mut self, transport: impl Transport + 'static) -> Result<Db> {
        let advisor = if !self.config.generate_index_file {
            None
        } else if let Some(advisor) = self.advisor.take() {
            Some(advisor)
        } else if self.config.index_file_path.as_os_str().is_empty() {
            return Err(Error::invalid_config(
                "index file generation is enabled but no index file path is set",
            ));
        } else {
            let file = IndexFile::new(self.config.index_file_path.clone());
            Some(Arc::new(file) as Arc<dyn IndexAdvisor>)
        };

        Ok(Db {
            shared: Arc::new(Shared {
                transport: Arc::new(transport),
                config: self.config.clone(),
                advisor,
            }),
        })
    }
}
