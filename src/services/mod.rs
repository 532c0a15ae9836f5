// Service exports
pub mod backend;
pub mod registry;

pub use backend::{BackendClient, BackendError};
pub use registry::{CaseRegistry, RegistryError};

use std::sync::Arc;
use std::time::Duration;

use crate::models::MissingPerson;

/// Where the candidate cases for a search come from
pub enum CaseSource {
    /// Seed data loaded at startup
    Local(CaseRegistry),
    /// Remote backend, with the case list cached for a short while
    Remote {
        client: BackendClient,
        cache: moka::future::Cache<(), Arc<Vec<MissingPerson>>>,
    },
}

impl CaseSource {
    pub fn remote(client: BackendClient, cache_ttl: Duration) -> Self {
        let cache = moka::future::CacheBuilder::new(1)
            .time_to_live(cache_ttl)
            .build();

        Self::Remote { client, cache }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Local(_) => "local",
            Self::Remote { .. } => "remote",
        }
    }

    /// All cases with a usable location
    ///
    /// Concurrent callers that miss the remote cache share a single backend
    /// request; a failed request is not cached.
    pub async fn fetch_cases(&self) -> Result<Arc<Vec<MissingPerson>>, Arc<BackendError>> {
        match self {
            Self::Local(registry) => Ok(registry.cases()),
            Self::Remote { client, cache } => {
                cache
                    .try_get_with((), async {
                        tracing::debug!("Case list cache miss, fetching from backend");
                        client.list_cases().await.map(Arc::new)
                    })
                    .await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_local_source_returns_registry_cases() {
        let registry = CaseRegistry::from_json(
            r#"[{"id": 1, "name": "John Doe", "location": [28.6139, 77.209]}]"#,
        )
        .unwrap();
        let source = CaseSource::Local(registry);

        let cases = source.fetch_cases().await.unwrap();

        assert_eq!(source.kind(), "local");
        assert_eq!(cases.len(), 1);
    }
}
