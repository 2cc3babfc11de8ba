//! ManifestStore implementation for PgStorage.

use async_trait::async_trait;
use entityinfo_core::{DataAttribute, DataManifest};

use super::{PgStorage, Result, attach_attributes, row_to_attribute, row_to_manifest};
use crate::traits::ManifestStore;

impl PgStorage {
    async fn attributes_for(&self, manifest_ids: &[i32]) -> Result<Vec<DataAttribute>> {
        if manifest_ids.is_empty() {
            return Ok(Vec::new());
        }
        let rows = sqlx::query(
            "SELECT id, manifest_id, name, type, value, project_code, optional
               FROM data_attribute WHERE manifest_id = ANY($1) ORDER BY id ASC",
        )
        .bind(manifest_ids)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_attribute).collect()
    }
}

#[async_trait]
impl ManifestStore for PgStorage {
    async fn list_manifests(&self, project_code: &str) -> Result<Vec<DataManifest>> {
        let rows = sqlx::query(
            "SELECT id, name, project_code FROM data_manifest WHERE project_code = $1 ORDER BY id",
        )
        .bind(project_code)
        .fetch_all(&self.pool)
        .await?;
        let mut manifests: Vec<DataManifest> = rows.iter().map(row_to_manifest).collect::<Result<_>>()?;

        let ids: Vec<i32> = manifests.iter().map(|m| m.id).collect();
        let attributes = self.attributes_for(&ids).await?;
        attach_attributes(&mut manifests, attributes);
        Ok(manifests)
    }

    async fn get_manifest(&self, id: i32) -> Result<Option<DataManifest>> {
        let row = sqlx::query("SELECT id, name, project_code FROM data_manifest WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        let Some(row) = row else {
            return Ok(None);
        };
        let mut manifest = row_to_manifest(&row)?;
        manifest.attributes = self.attributes_for(&[id]).await?;
        Ok(Some(manifest))
    }
}
