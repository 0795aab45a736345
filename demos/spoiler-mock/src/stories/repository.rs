use std::sync::Arc;

use indexmap::IndexMap;
use tokio::sync::RwLock;

use super::domain::{Story, StoryDraft, StoryId};
use crate::errors::RepositoryError;

/// Stories in creation order.
#[derive(Debug, Clone, Default)]
pub(crate) struct StoryRepository {
    data: Arc<RwLock<IndexMap<StoryId, StoryDraft>>>,
}

impl StoryRepository {
    pub(crate) async fn list(&self) -> Vec<Story> {
        let data = self.data.read().await;

        data.iter()
            .map(|(id, draft)| Story::from((id.clone(), draft.clone())))
            .collect()
    }

    pub(crate) async fn create(&self, draft: StoryDraft) -> StoryId {
        let mut data = self.data.write().await;
        let id = StoryId::generate();
        data.insert(id.clone(), draft);

        id
    }

    pub(crate) async fn update(&self, id: &StoryId, draft: StoryDraft) -> Result<(), RepositoryError> {
        let mut data = self.data.write().await;

        let Some(value) = data.get_mut(id) else {
            return Err(RepositoryError::StoryNotFound { id: id.clone() });
        };
        *value = draft;

        Ok(())
    }

    pub(crate) async fn delete(&self, id: &StoryId) -> Result<StoryDraft, RepositoryError> {
        let mut data = self.data.write().await;

        data.shift_remove(id)
            .ok_or_else(|| RepositoryError::StoryNotFound { id: id.clone() })
    }
}

impl From<(StoryId, StoryDraft)> for Story {
    fn from(value: (StoryId, StoryDraft)) -> Self {
        let (story_id, data) = value;
        Self { story_id, data }
    }
}
