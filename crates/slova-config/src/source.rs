use serde::{Deserialize, Serialize};

/// Article with the most common English words and their Russian translations
pub const ARTICLE_URL: &str =
    "https://skyeng.ru/articles/samye-populyarnye-slova-v-anglijskom-yazyke/";

fn default_url() -> String {
    ARTICLE_URL.to_string()
}

fn default_user_agent() -> String {
    concat!("slova/", env!("CARGO_PKG_VERSION")).to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SourceConfig {
    /// Page the word tables are scraped from
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl SourceConfig {
    pub fn new() -> Self {
        Self {
            url: default_url(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self::new()
    }
}
