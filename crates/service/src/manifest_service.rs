use std::sync::Arc;

use entityinfo_core::DataManifest;
use entityinfo_storage::ManifestStore;

use crate::ServiceError;

pub struct ManifestService {
    store: Arc<dyn ManifestStore>,
}

impl ManifestService {
    #[must_use]
    pub fn new(store: Arc<dyn ManifestStore>) -> Self {
        Self { store }
    }

    pub async fn list_by_project(&self, project_code: &str) -> Result<Vec<DataManifest>, ServiceError> {
        let project_code = project_code.trim();
        if project_code.is_empty() {
            return Err(ServiceError::InvalidInput("project_code is required".to_owned()));
        }
        Ok(self.store.list_manifests(project_code).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<DataManifest, ServiceError> {
        self.store
            .get_manifest(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound { entity: "manifest", id: id.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use entityinfo_core::DataManifest;

    use super::ManifestService;
    use crate::ServiceError;
    use crate::test_doubles::FakeStore;

    fn manifest(id: i32, project_code: &str) -> DataManifest {
        DataManifest {
            id,
            name: format!("Manifest {id}"),
            project_code: project_code.to_owned(),
            attributes: Vec::new(),
        }
    }

    fn service() -> ManifestService {
        let store = FakeStore {
            manifests: vec![manifest(1, "0407"), manifest(2, "0407"), manifest(3, "9999")],
            ..FakeStore::default()
        };
        ManifestService::new(Arc::new(store))
    }

    #[tokio::test]
    async fn test_list_filters_by_project() {
        let manifests = service().list_by_project("0407").await.unwrap();
        let ids: Vec<i32> = manifests.iter().map(|m| m.id).collect();
        assert_eq!(ids, [1, 2]);
        assert!(service().list_by_project("none").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_blank_project_code_rejected() {
        let err = service().list_by_project("  ").await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_get_by_id() {
        assert_eq!(service().get_by_id(3).await.unwrap().project_code, "9999");
        assert!(service().get_by_id(42).await.unwrap_err().is_not_found());
    }
}
