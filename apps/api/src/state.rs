use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::config::Config;
use crate::optimization::scorer::{PolicyScorer, ResumeScorer};
use crate::storage::{FileStore, HostingRepository, MemoryStore, ResumeRepository};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub resumes: Arc<dyn ResumeRepository>,
    pub hosting: Arc<dyn HostingRepository>,
    /// Pluggable scorer. Default: PolicyScorer with the built-in rule tables.
    pub scorer: Arc<dyn ResumeScorer>,
}

impl AppState {
    /// Picks the storage backend from `config.data_dir`.
    pub async fn from_config(config: Config) -> Result<Self> {
        match config.data_dir.clone() {
            Some(dir) => {
                let store = Arc::new(FileStore::open(dir).await?);
                Ok(Self::with_store(config, store))
            }
            None => {
                info!("DATA_DIR not set; resumes are kept in memory");
                Ok(Self::in_memory(config))
            }
        }
    }

    pub fn in_memory(config: Config) -> Self {
        Self::with_store(config, Arc::new(MemoryStore::new()))
    }

    fn with_store<S>(config: Config, store: Arc<S>) -> Self
    where
        S: ResumeRepository + HostingRepository + 'static,
    {
        Self {
            config,
            resumes: store.clone(),
            hosting: store,
            scorer: Arc::new(PolicyScorer::new()),
        }
    }
}
