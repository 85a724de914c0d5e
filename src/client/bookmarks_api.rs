use super::{ApiClient, paths};
use crate::errors::Result;
use crate::models::{
    BookmarkGroup, BookmarkImportSummary, BookmarkPayload, GroupBookmarks, MessageResponse,
    RenamePayload,
};

/// `/api/bookmarks/*`
pub struct BookmarksApi<'a> {
    client: &'a ApiClient,
}

impl<'a> BookmarksApi<'a> {
    pub(super) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<BookmarkGroup>> {
        self.client.get("/api/bookmarks/").await
    }

    pub async fn group(&self, group: &str) -> Result<GroupBookmarks> {
        self.client.get(&paths::bookmark_group(group)).await
    }

    pub async fn create(&self, group: &str, payload: &BookmarkPayload) -> Result<MessageResponse> {
        self.client
            .post(&paths::bookmark_group(group), payload)
            .await
    }

    pub async fn update(
        &self,
        group: &str,
        name: &str,
        payload: &BookmarkPayload,
    ) -> Result<MessageResponse> {
        self.client.put(&paths::bookmark(group, name), payload).await
    }

    pub async fn delete(&self, group: &str, name: &str) -> Result<MessageResponse> {
        self.client.delete(&paths::bookmark(group, name)).await
    }

    pub async fn create_group(&self, group: &str) -> Result<MessageResponse> {
        self.client.post_empty(&paths::group_admin(group)).await
    }

    pub async fn rename_group(&self, group: &str, new_name: &str) -> Result<MessageResponse> {
        let payload = RenamePayload {
            new_name: new_name.to_string(),
        };
        self.client
            .put(&paths::group_admin(group), &payload)
            .await
    }

    pub async fn delete_group(&self, group: &str) -> Result<MessageResponse> {
        self.client.delete(&paths::group_admin(group)).await
    }

    /// `bookmarks.yaml` as served by the backend
    pub async fn export(&self) -> Result<Vec<u8>> {
        self.client.get_bytes("/api/bookmarks/export").await
    }

    pub async fn import(&self, filename: &str, data: &[u8]) -> Result<BookmarkImportSummary> {
        self.client
            .upload("/api/bookmarks/import", filename, data)
            .await
    }
}
