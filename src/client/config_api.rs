use serde::Deserialize;

use super::ApiClient;
use crate::errors::Result;
use crate::models::ConfigImportSummary;

/// `POST /api/config/backup`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BackupSummary {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub backup_file: Option<String>,
}

/// Whole-file import/export of `services.yaml`
pub struct ConfigApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ConfigApi<'a> {
    pub(super) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn import(&self, filename: &str, data: &[u8]) -> Result<ConfigImportSummary> {
        self.client
            .upload("/api/config/import", filename, data)
            .await
    }

    pub async fn export(&self) -> Result<Vec<u8>> {
        self.client.get_bytes("/api/config/export").await
    }

    /// Server-side timestamped copy of the current file
    pub async fn backup(&self) -> Result<BackupSummary> {
        self.client.post_empty("/api/config/backup").await
    }

    /// Annotated example `services.yaml`
    pub async fn example(&self) -> Result<Vec<u8>> {
        self.client.get_bytes("/api/config/example").await
    }
}
