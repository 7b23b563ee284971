//! User service: `user/`

use crate::client::models::{EmailNotifications, SlackChannel, StatusDeletion};
use crate::client::pagination::{Page, PaginationParams};
use crate::client::request::{Requester, Response, segment};
use crate::error::Result;

const PREFIX: &str = "user/";

/// Account-level notification settings
#[derive(Debug, Clone)]
pub struct UserService {
    requester: Requester,
}

impl UserService {
    pub(crate) fn new(requester: &Requester) -> Self {
        Self {
            requester: requester.scoped(PREFIX),
        }
    }

    /// Enable or disable e-mail notifications
    pub async fn update_notifications(
        &self,
        settings: &EmailNotifications,
    ) -> Result<Response<EmailNotifications>> {
        self.requester.patch("", settings).await
    }

    pub async fn slack_channels(
        &self,
        pagination: &PaginationParams,
    ) -> Result<Response<Page<SlackChannel>>> {
        self.requester.get("slack_channels", &[pagination]).await
    }

    pub async fn remove_slack_channel(&self, channel_id: &str) -> Result<Response<StatusDeletion>> {
        let path = format!("slack_channels/{}", segment(channel_id)?);
        self.requester.delete(&path).await
    }

    /// Post a test message to a linked Slack channel
    pub async fn test_slack_channel(&self, channel_id: &str) -> Result<Response<SlackChannel>> {
        let path = format!("slack_channels/{}/test", segment(channel_id)?);
        self.requester.post_empty(&path).await
    }
}
