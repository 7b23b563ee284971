//! User settings display models

use tabled::Tabled;

use crate::client::models::SlackChannel;

#[derive(Debug, Clone, Tabled)]
pub struct SlackChannelDisplay {
    #[tabled(rename = "CHANNEL ID")]
    pub id: String,

    #[tabled(rename = "CHANNEL")]
    pub channel: String,
}

impl From<&SlackChannel> for SlackChannelDisplay {
    fn from(channel: &SlackChannel) -> Self {
        Self {
            id: channel.id.clone(),
            channel: channel.slack_channel.clone(),
        }
    }
}
