use serde::{Deserialize, Serialize};

const DEFAULT_SITE: &str = "https://nickdv6.github.io";
const DEFAULT_BASE: &str = "/raf-ai-v1/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Static,
}

/// Where the static build is published.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Origin, without trailing slash.
    pub site: String,
    /// Path prefix the site is served under.
    pub base: String,
    pub output: OutputMode,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site: DEFAULT_SITE.into(),
            base: DEFAULT_BASE.into(),
            output: OutputMode::Static,
        }
    }
}

impl SiteConfig {
    /// Base-relative path for `path`, always starting with `/`.
    pub fn path_for(&self, path: &str) -> String {
        let base = self.base.trim_matches('/');
        let path = path.trim_start_matches('/');
        match (base.is_empty(), path.is_empty()) {
            (true, _) => format!("/{path}"),
            (false, true) => format!("/{base}/"),
            (false, false) => format!("/{base}/{path}"),
        }
    }

    /// Absolute URL for `path` on the published site.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.site.trim_end_matches('/'), self.path_for(path))
    }

    pub fn event_path(&self, slug: &str) -> String {
        self.path_for(&format!("events/{slug}/"))
    }
}
