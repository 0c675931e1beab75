use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("failed to fetch template '{template}': {reason}")]
    Fetch { template: String, reason: String },

    #[error("failed to patch manifest at {}: {source}", path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ScaffoldError {
    pub fn fetch(template: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Fetch {
            template: template.into(),
            reason: reason.into(),
        }
    }

    pub fn manifest(
        path: impl Into<PathBuf>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Manifest {
            path: path.into(),
            source: Box::new(source),
        }
    }
}
