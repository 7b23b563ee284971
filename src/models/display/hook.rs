//! Hook display models

use tabled::Tabled;

use super::common::or_dash;
use crate::client::models::{Hook, HookTest};

/// Hook row for table output.
#[derive(Debug, Clone, Tabled)]
pub struct HookDisplay {
    #[tabled(rename = "HOOK ID")]
    pub id: String,

    #[tabled(rename = "URL")]
    pub url: String,
}

impl From<&Hook> for HookDisplay {
    fn from(hook: &Hook) -> Self {
        Self {
            id: hook.id.clone(),
            url: hook.url.clone(),
        }
    }
}

/// Field/value rows for `hook test`
pub fn hook_test_detail(test: &HookTest) -> Vec<(&'static str, String)> {
    vec![
        ("Hook ID", test.id.clone()),
        ("Request URL", or_dash(&test.result.request.url)),
        ("Response code", or_dash(&test.response.code)),
        ("Response message", or_dash(&test.response.message)),
    ]
}
