//! User settings models

use serde::{Deserialize, Serialize};

/// E-mail notification preference; used as both request body and response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailNotifications {
    pub email_notifications_enabled: bool,
}

/// A Slack channel linked to the account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlackChannel {
    pub id: String,
    pub slack_channel: String,
}
