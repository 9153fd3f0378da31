use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::hosted::HostedResume;
use crate::models::resume::ResumeRecord;
use crate::storage::{slug_taken, validate_user_id, HostingRepository, ResumeRepository};

/// JSON-on-disk store.
///
/// Layout:
/// - `<root>/resumes/<user_id>.json`: one resume per user
/// - `<root>/hosted.json`: every hosted snapshot, as a JSON array
///
/// Writes land in a sibling temp file first and are renamed into place.
pub struct FileStore {
    root: PathBuf,
    resumes_lock: RwLock<()>,
    hosted_lock: RwLock<()>,
}

impl FileStore {
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self, AppError> {
        let root = root.into();
        tokio::fs::create_dir_all(root.join("resumes")).await?;
        info!("File store opened at {}", root.display());
        Ok(Self {
            root,
            resumes_lock: RwLock::new(()),
            hosted_lock: RwLock::new(()),
        })
    }

    fn resume_path(&self, user_id: &str) -> Result<PathBuf, AppError> {
        validate_user_id(user_id)?;
        Ok(self.root.join("resumes").join(format!("{user_id}.json")))
    }

    fn hosted_path(&self) -> PathBuf {
        self.root.join("hosted.json")
    }

    async fn read_hosted(&self) -> Result<Vec<HostedResume>, AppError> {
        match read_optional(&self.hosted_path()).await? {
            Some(bytes) => Ok(serde_json::from_slice(&bytes)?),
            None => Ok(vec![]),
        }
    }

    async fn write_hosted(&self, hosted: &[HostedResume]) -> Result<(), AppError> {
        let bytes = serde_json::to_vec_pretty(hosted)?;
        write_atomic(&self.hosted_path(), &bytes).await
    }
}

fn storage_error(action: &str, path: &Path, e: std::io::Error) -> AppError {
    AppError::Storage(format!("{action} {}: {e}", path.display()))
}

/// Reads a file, mapping "does not exist" to `None`.
async fn read_optional(path: &Path) -> Result<Option<Vec<u8>>, AppError> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(storage_error("reading", path, e)),
    }
}

async fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), AppError> {
    let tmp = path.with_extension("json.tmp");
    tokio::fs::write(&tmp, bytes)
        .await
        .map_err(|e| storage_error("writing", &tmp, e))?;
    tokio::fs::rename(&tmp, path)
        .await
        .map_err(|e| storage_error("replacing", path, e))?;
    debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

#[async_trait]
impl ResumeRepository for FileStore {
    async fn get(&self, user_id: &str) -> Result<Option<ResumeRecord>, AppError> {
        let path = self.resume_path(user_id)?;
        let _guard = self.resumes_lock.read().await;
        match read_optional(&path).await? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn put(&self, user_id: &str, resume: ResumeRecord) -> Result<(), AppError> {
        let path = self.resume_path(user_id)?;
        let bytes = serde_json::to_vec_pretty(&resume)?;
        let _guard = self.resumes_lock.write().await;
        write_atomic(&path, &bytes).await
    }
}

#[async_trait]
impl HostingRepository for FileStore {
    async fn insert(&self, hosted: HostedResume) -> Result<(), AppError> {
        let _guard = self.hosted_lock.write().await;
        let mut all = self.read_hosted().await?;
        if all.iter().any(|h| h.url == hosted.url) {
            return Err(slug_taken(&hosted.url));
        }
        all.push(hosted);
        self.write_hosted(&all).await
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<HostedResume>, AppError> {
        let _guard = self.hosted_lock.read().await;
        Ok(self
            .read_hosted()
            .await?
            .into_iter()
            .filter(|h| h.user_id == user_id)
            .collect())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<HostedResume>, AppError> {
        let _guard = self.hosted_lock.read().await;
        Ok(self.read_hosted().await?.into_iter().find(|h| h.url == slug))
    }

    async fn record_view(&self, slug: &str) -> Result<Option<HostedResume>, AppError> {
        let _guard = self.hosted_lock.write().await;
        let mut all = self.read_hosted().await?;
        let updated = all.iter_mut().find(|h| h.url == slug).map(|h| {
            h.views += 1;
            h.clone()
        });
        if updated.is_some() {
            self.write_hosted(&all).await?;
        }
        Ok(updated)
    }

    async fn delete(&self, user_id: &str, id: Uuid) -> Result<bool, AppError> {
        let _guard = self.hosted_lock.write().await;
        let mut all = self.read_hosted().await?;
        let before = all.len();
        all.retain(|h| !(h.id == id && h.user_id == user_id));
        if all.len() == before {
            return Ok(false);
        }
        self.write_hosted(&all).await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::hosted::TemplateType;
    use crate::models::resume::Experience;
    use chrono::Utc;
    use tempfile::TempDir;

    fn sample_resume() -> ResumeRecord {
        let mut resume = ResumeRecord::default();
        resume.personal_info.full_name = "Grace Hopper".to_string();
        resume.experience.push(Experience {
            company: "US Navy".to_string(),
            position: "Rear Admiral".to_string(),
            start_date: "1943-12".to_string(),
            ..Default::default()
        });
        resume
    }

    #[tokio::test]
    async fn test_resume_survives_reopen() {
        let dir = TempDir::new().unwrap();
        {
            let store = FileStore::open(dir.path()).await.unwrap();
            store.put("grace", sample_resume()).await.unwrap();
        }
        let store = FileStore::open(dir.path()).await.unwrap();
        assert_eq!(store.get("grace").await.unwrap(), Some(sample_resume()));
        assert!(dir.path().join("resumes").join("grace.json").exists());
        assert!(!dir.path().join("resumes").join("grace.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_missing_resume_is_none() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).await.unwrap();
        assert!(store.get("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_rejects_traversal_ids() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).await.unwrap();
        let err = store.put("../escape", sample_resume()).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(matches!(
            store.get("../escape").await.unwrap_err(),
            AppError::Validation(_)
        ));
    }

    #[tokio::test]
    async fn test_corrupt_file_is_serialization_error() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).await.unwrap();
        tokio::fs::write(dir.path().join("resumes").join("bad.json"), b"{not json")
            .await
            .unwrap();
        assert!(matches!(
            store.get("bad").await.unwrap_err(),
            AppError::Serialization(_)
        ));
    }

    #[tokio::test]
    async fn test_unreadable_resume_is_storage_error() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).await.unwrap();
        tokio::fs::create_dir(dir.path().join("resumes").join("grace.json"))
            .await
            .unwrap();

        match store.get("grace").await.unwrap_err() {
            AppError::Storage(msg) => assert!(msg.contains("grace.json"), "{msg}"),
            other => panic!("expected storage error, got {other:?}"),
        }
        assert!(matches!(
            store.put("grace", sample_resume()).await.unwrap_err(),
            AppError::Storage(_)
        ));
    }

    #[tokio::test]
    async fn test_insert_rejects_taken_slug() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).await.unwrap();
        let hosted = |user_id: &str| HostedResume {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            resume_data: sample_resume(),
            template: TemplateType::Modern,
            url: "grace-0001".to_string(),
            is_public: true,
            created_at: Utc::now(),
            views: 0,
        };

        store.insert(hosted("grace")).await.unwrap();
        let err = store.insert(hosted("mallory")).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(store.list_for_user("mallory").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_hosted_views_persist() {
        let dir = TempDir::new().unwrap();
        let id = Uuid::new_v4();
        {
            let store = FileStore::open(dir.path()).await.unwrap();
            store
                .insert(HostedResume {
                    id,
                    user_id: "grace".to_string(),
                    resume_data: sample_resume(),
                    template: TemplateType::Classic,
                    url: "grace-hopper-0042".to_string(),
                    is_public: true,
                    created_at: Utc::now(),
                    views: 0,
                })
                .await
                .unwrap();
            store.record_view("grace-hopper-0042").await.unwrap();
        }

        let store = FileStore::open(dir.path()).await.unwrap();
        let found = store.find_by_slug("grace-hopper-0042").await.unwrap().unwrap();
        assert_eq!(found.views, 1);
        assert_eq!(found.template, TemplateType::Classic);
        assert_eq!(store.list_for_user("grace").await.unwrap().len(), 1);

        assert!(!store.delete("someone-else", id).await.unwrap());
        assert!(store.delete("grace", id).await.unwrap());
        assert!(store.find_by_slug("grace-hopper-0042").await.unwrap().is_none());
    }
}
