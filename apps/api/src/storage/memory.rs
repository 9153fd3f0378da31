use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::hosted::HostedResume;
use crate::models::resume::ResumeRecord;
use crate::storage::{slug_taken, HostingRepository, ResumeRepository};

/// Process-local store. Everything is lost on restart.
#[derive(Default)]
pub struct MemoryStore {
    resumes: RwLock<HashMap<String, ResumeRecord>>,
    hosted: RwLock<Vec<HostedResume>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResumeRepository for MemoryStore {
    async fn get(&self, user_id: &str) -> Result<Option<ResumeRecord>, AppError> {
        Ok(self.resumes.read().await.get(user_id).cloned())
    }

    async fn put(&self, user_id: &str, resume: ResumeRecord) -> Result<(), AppError> {
        self.resumes
            .write()
            .await
            .insert(user_id.to_string(), resume);
        Ok(())
    }
}

#[async_trait]
impl HostingRepository for MemoryStore {
    async fn insert(&self, hosted: HostedResume) -> Result<(), AppError> {
        let mut all = self.hosted.write().await;
        if all.iter().any(|h| h.url == hosted.url) {
            return Err(slug_taken(&hosted.url));
        }
        all.push(hosted);
        Ok(())
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<HostedResume>, AppError> {
        Ok(self
            .hosted
            .read()
            .await
            .iter()
            .filter(|h| h.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<HostedResume>, AppError> {
        Ok(self.hosted.read().await.iter().find(|h| h.url == slug).cloned())
    }

    async fn record_view(&self, slug: &str) -> Result<Option<HostedResume>, AppError> {
        let mut hosted = self.hosted.write().await;
        Ok(hosted.iter_mut().find(|h| h.url == slug).map(|h| {
            h.views += 1;
            h.clone()
        }))
    }

    async fn delete(&self, user_id: &str, id: Uuid) -> Result<bool, AppError> {
        let mut hosted = self.hosted.write().await;
        let before = hosted.len();
        hosted.retain(|h| !(h.id == id && h.user_id == user_id));
        Ok(hosted.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::hosted::TemplateType;
    use chrono::Utc;

    fn hosted(user_id: &str, url: &str) -> HostedResume {
        HostedResume {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            resume_data: ResumeRecord::default(),
            template: TemplateType::Modern,
            url: url.to_string(),
            is_public: true,
            created_at: Utc::now(),
            views: 0,
        }
    }

    #[tokio::test]
    async fn test_put_then_get() {
        let store = MemoryStore::new();
        assert!(store.get("u1").await.unwrap().is_none());

        let mut resume = ResumeRecord::default();
        resume.personal_info.full_name = "Ada".to_string();
        store.put("u1", resume.clone()).await.unwrap();
        assert_eq!(store.get("u1").await.unwrap(), Some(resume));
        assert!(store.get("u2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_put_replaces_previous() {
        let store = MemoryStore::new();
        let mut resume = ResumeRecord::default();
        store.put("u1", resume.clone()).await.unwrap();
        resume.skills.push("Rust".to_string());
        store.put("u1", resume).await.unwrap();
        assert_eq!(store.get("u1").await.unwrap().unwrap().skills, vec!["Rust"]);
    }

    #[tokio::test]
    async fn test_hosting_lifecycle() {
        let store = MemoryStore::new();
        let first = hosted("u1", "ada-1234");
        store.insert(first.clone()).await.unwrap();
        store.insert(hosted("u2", "bob-5678")).await.unwrap();

        assert_eq!(store.list_for_user("u1").await.unwrap().len(), 1);
        assert_eq!(
            store.find_by_slug("bob-5678").await.unwrap().unwrap().user_id,
            "u2"
        );

        let viewed = store.record_view("ada-1234").await.unwrap().unwrap();
        assert_eq!(viewed.views, 1);
        let viewed = store.record_view("ada-1234").await.unwrap().unwrap();
        assert_eq!(viewed.views, 2);
        assert!(store.record_view("missing").await.unwrap().is_none());

        let err = store.insert(hosted("u3", "ada-1234")).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(store.list_for_user("u3").await.unwrap().len(), 0);

        // another user's delete is a no-op
        assert!(!store.delete("u2", first.id).await.unwrap());
        assert!(store.delete("u1", first.id).await.unwrap());
        assert!(store.list_for_user("u1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_inserts_of_same_slug_admit_one() {
        let store = std::sync::Arc::new(MemoryStore::new());
        let tasks: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .insert(hosted(&format!("u{i}"), "same-0001"))
                        .await
                })
            })
            .collect();

        let mut accepted = 0;
        for task in tasks {
            if task.await.unwrap().is_ok() {
                accepted += 1;
            }
        }
        assert_eq!(accepted, 1);
        assert!(store.find_by_slug("same-0001").await.unwrap().is_some());
    }
}
