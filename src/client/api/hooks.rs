//! Hooks service: `stacks/{id}/hooks`

use crate::client::models::{Hook, HookParams, HookTest, StatusDeletion, StatusGeneration};
use crate::client::pagination::{Page, PaginationParams};
use crate::client::request::{Requester, Response, segment};
use crate::error::Result;

/// Hooks live under their stack
const PREFIX: &str = "stacks/";

/// Webhooks notified when a stack is updated
#[derive(Debug, Clone)]
pub struct HooksService {
    requester: Requester,
}

impl HooksService {
    pub(crate) fn new(requester: &Requester) -> Self {
        Self {
            requester: requester.scoped(PREFIX),
        }
    }

    pub async fn list(
        &self,
        stack_id: &str,
        pagination: &PaginationParams,
    ) -> Result<Response<Page<Hook>>> {
        self.requester
            .get(&collection(stack_id)?, &[pagination])
            .await
    }

    /// Register a new hook URL on a stack
    pub async fn register(
        &self,
        stack_id: &str,
        params: &HookParams,
    ) -> Result<Response<StatusGeneration>> {
        self.requester.post(&collection(stack_id)?, params).await
    }

    pub async fn update(
        &self,
        stack_id: &str,
        hook_id: &str,
        params: &HookParams,
    ) -> Result<Response<StatusGeneration>> {
        self.requester.patch(&member(stack_id, hook_id)?, params).await
    }

    pub async fn delete(&self, stack_id: &str, hook_id: &str) -> Result<Response<StatusDeletion>> {
        self.requester.delete(&member(stack_id, hook_id)?).await
    }

    /// Send a test delivery to the hook URL
    pub async fn test(&self, stack_id: &str, hook_id: &str) -> Result<Response<HookTest>> {
        let path = format!("{}/test", member(stack_id, hook_id)?);
        self.requester.post_empty(&path).await
    }
}

fn collection(stack_id: &str) -> Result<String> {
    Ok(format!("{}/hooks", segment(stack_id)?))
}

fn member(stack_id: &str, hook_id: &str) -> Result<String> {
    Ok(format!("{}/{}", collection(stack_id)?, segment(hook_id)?))
}
