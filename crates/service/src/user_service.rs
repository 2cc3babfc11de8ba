use std::sync::Arc;

use entityinfo_core::User;
use entityinfo_upstream::UserDirectory;
use serde_json::{Map, Value};

use crate::ServiceError;

/// Read and partial update of platform users held in the graph service.
pub struct UserService {
    directory: Arc<dyn UserDirectory>,
}

impl UserService {
    #[must_use]
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self { directory }
    }

    pub async fn get_user(&self, username: &str) -> Result<User, ServiceError> {
        Ok(self.directory.find_user(username).await?)
    }

    /// Resolves `username` to its node id, then writes `properties` onto it.
    #[tracing::instrument(skip(self, properties), fields(keys = properties.len()))]
    pub async fn update_user(
        &self,
        username: &str,
        properties: &Map<String, Value>,
    ) -> Result<Value, ServiceError> {
        if properties.is_empty() {
            return Err(ServiceError::InvalidInput(
                "update body must contain at least one property".to_owned(),
            ));
        }
        let user = self.directory.find_user(username).await?;
        let updated = self.directory.update_user(user.id, properties).await?;
        tracing::info!(user_id = user.id, "user updated");
        Ok(updated)
    }
}
