//! Persistence seams. Handlers only see these traits; `AppState` carries
//! `Arc<dyn ...>` handles picked at startup from `DATA_DIR`.

pub mod file;
pub mod memory;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::hosted::HostedResume;
use crate::models::resume::ResumeRecord;

pub use file::FileStore;
pub use memory::MemoryStore;

/// One resume per user, replaced wholesale on every save.
#[async_trait]
pub trait ResumeRepository: Send + Sync {
    async fn get(&self, user_id: &str) -> Result<Option<ResumeRecord>, AppError>;
    async fn put(&self, user_id: &str, resume: ResumeRecord) -> Result<(), AppError>;
}

/// Published resume snapshots, addressed by id (owner) or slug (public).
#[async_trait]
pub trait HostingRepository: Send + Sync {
    /// Fails with `AppError::Validation` if another snapshot already uses
    /// `hosted.url`. The check and the write happen under one lock.
    async fn insert(&self, hosted: HostedResume) -> Result<(), AppError>;
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<HostedResume>, AppError>;
    async fn find_by_slug(&self, slug: &str) -> Result<Option<HostedResume>, AppError>;
    /// Increments the view counter and returns the updated snapshot.
    async fn record_view(&self, slug: &str) -> Result<Option<HostedResume>, AppError>;
    /// Returns `false` if `id` does not exist or belongs to another user.
    async fn delete(&self, user_id: &str, id: Uuid) -> Result<bool, AppError>;
}

/// 1-64 ASCII letters, digits, `-` and `_`: safe as a file name and as a
/// single URL path segment.
pub fn is_path_safe(value: &str) -> bool {
    !value.is_empty()
        && value.len() <= 64
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// User ids double as file names in the file backend.
pub fn validate_user_id(user_id: &str) -> Result<(), AppError> {
    if is_path_safe(user_id) {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "Invalid user id '{user_id}': use 1-64 letters, digits, '-' or '_'"
        )))
    }
}

pub(crate) fn slug_taken(url: &str) -> AppError {
    AppError::Validation(format!("The URL '{url}' is already taken"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_simple_ids() {
        assert!(validate_user_id("1718000000000").is_ok());
        assert!(validate_user_id("user_42-a").is_ok());
    }

    #[test]
    fn test_rejects_path_like_ids() {
        assert!(validate_user_id("").is_err());
        assert!(validate_user_id("../etc/passwd").is_err());
        assert!(validate_user_id("a/b").is_err());
        assert!(validate_user_id("with space").is_err());
        assert!(validate_user_id(&"x".repeat(65)).is_err());
    }
}
