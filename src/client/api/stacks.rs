//! Stacks service: `stacks/`

use crate::client::models::{
    Stack, StackDefinition, StackParams, StatusDeletion, StatusGeneration, VulnerabilityReport,
};
use crate::client::pagination::{Page, PaginationParams};
use crate::client::request::{Requester, Response, segment};
use crate::error::Result;

/// Path prefix for stack operations
const PREFIX: &str = "stacks/";

/// Operations on generated stacks
#[derive(Debug, Clone)]
pub struct StacksService {
    requester: Requester,
}

impl StacksService {
    pub(crate) fn new(requester: &Requester) -> Self {
        Self {
            requester: requester.scoped(PREFIX),
        }
    }

    /// List the stacks owned by the account
    pub async fn list(&self, pagination: &PaginationParams) -> Result<Response<Page<Stack>>> {
        self.requester.get("", &[pagination]).await
    }

    /// Define a new stack and start generating it
    pub async fn create(&self, definition: &StackDefinition) -> Result<Response<StatusGeneration>> {
        self.requester.post("", definition).await
    }

    /// Get a single stack
    pub async fn get(&self, stack_id: &str) -> Result<Response<Stack>> {
        self.requester.get(&segment(stack_id)?, &[]).await
    }

    /// Update the name, sharing or notification settings of a stack
    pub async fn update(
        &self,
        stack_id: &str,
        params: &StackParams,
    ) -> Result<Response<StatusGeneration>> {
        self.requester.patch(&segment(stack_id)?, params).await
    }

    pub async fn delete(&self, stack_id: &str) -> Result<Response<StatusDeletion>> {
        self.requester.delete(&segment(stack_id)?).await
    }

    /// Regenerate a stack with the latest component revisions
    pub async fn regenerate(&self, stack_id: &str) -> Result<Response<StatusGeneration>> {
        let path = format!("{}/regenerate", segment(stack_id)?);
        self.requester.post_empty(&path).await
    }

    /// Vulnerabilities affecting a stack
    pub async fn vulnerabilities(
        &self,
        stack_id: &str,
        pagination: &PaginationParams,
    ) -> Result<Response<VulnerabilityReport>> {
        let path = format!("{}/vulnerabilities", segment(stack_id)?);
        self.requester.get(&path, &[pagination]).await
    }
}
