//! Configuration management for tabkit pages.
//!
//! Parses `tabkit.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! Per-page settings (such as the `data-articles-path` attribute on the
//! page's main content wrapper) are applied during load via [`PageSettings`].
//!
//! ## Sections
//!
//! - `[articles]` - where the article dataset lives
//! - `[regions]` - naming convention from tab/panel ids to content region ids
//! - `[panels]` - static panels and first-visit behavior
//! - `[messages]` - fallback markup shown in content regions

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Page settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct PageSettings {
    /// Override the article dataset path (the page's `data-articles-path`).
    pub articles_path: Option<String>,
    /// Override the base URL relative article paths resolve against.
    pub base_url: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "tabkit.toml";

/// Page configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Article dataset configuration (as parsed from TOML).
    #[serde(default)]
    articles: ArticlesConfigRaw,
    /// Content region naming convention.
    pub regions: RegionConfig,
    /// Panel behavior.
    pub panels: PanelsConfig,
    /// Fallback messages rendered into content regions.
    pub messages: MessagesConfig,

    /// Resolved article configuration (set after loading).
    #[serde(skip)]
    pub articles_resolved: ArticlesConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw article configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ArticlesConfigRaw {
    path: Option<String>,
    base_url: Option<String>,
    timeout_secs: Option<u64>,
}

/// Resolved article dataset configuration.
#[derive(Debug, Default, Clone)]
pub struct ArticlesConfig {
    /// Path of the JSON dataset, relative to `root_dir` or `base_url`.
    ///
    /// `None` means the page did not configure one. Loading without a path
    /// is a configuration error, surfaced in every content region.
    pub path: Option<String>,
    /// Base URL for HTTP loading. `None` loads from the filesystem.
    pub base_url: Option<String>,
    /// Directory filesystem paths are resolved against.
    pub root_dir: PathBuf,
    /// Request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

/// Which element id the content region id is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RegionSource {
    /// Derive from the tab header id (`html-tab` -> `html-article-content`).
    #[default]
    Tab,
    /// Derive from the tab panel id.
    Panel,
}

/// Naming convention mapping a tab to its content region id.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RegionConfig {
    /// Which id the region is derived from.
    pub derive_from: RegionSource,
    /// Suffix removed from the source id, if present.
    pub strip_suffix: String,
    /// Suffix appended to form the region id.
    pub region_suffix: String,
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self {
            derive_from: RegionSource::Tab,
            strip_suffix: "-tab".to_owned(),
            region_suffix: "-article-content".to_owned(),
        }
    }
}

impl RegionConfig {
    /// Derive the content region id for a tab.
    ///
    /// # Example
    ///
    /// ```
    /// use tabkit_config::RegionConfig;
    ///
    /// let regions = RegionConfig::default();
    /// assert_eq!(regions.region_id("html-tab", "html-panel"), "html-article-content");
    /// ```
    #[must_use]
    pub fn region_id(&self, tab_id: &str, panel_id: &str) -> String {
        let source = match self.derive_from {
            RegionSource::Tab => tab_id,
            RegionSource::Panel => panel_id,
        };
        let base = if self.strip_suffix.is_empty() {
            source
        } else {
            source.strip_suffix(&self.strip_suffix).unwrap_or(source)
        };
        format!("{base}{}", self.region_suffix)
    }
}

/// Panel behavior configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PanelsConfig {
    /// Panel ids holding static content; never auto-populated.
    pub static_panels: Vec<String>,
    /// Expand the first accordion and select its first topic the first time
    /// a dynamic tab is activated.
    pub auto_populate_first_visit: bool,
}

impl Default for PanelsConfig {
    fn default() -> Self {
        Self {
            static_panels: vec!["welcome-panel".to_owned()],
            auto_populate_first_visit: true,
        }
    }
}

impl PanelsConfig {
    /// Whether the panel is a designated static panel.
    #[must_use]
    pub fn is_static(&self, panel_id: &str) -> bool {
        self.static_panels.iter().any(|p| p == panel_id)
    }
}

/// A heading plus paragraph rendered into a content region.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Message {
    /// Heading text.
    pub heading: String,
    /// Paragraph text. May contain an `{article}` placeholder.
    pub body: String,
}

impl Message {
    fn new(heading: &str, body: &str) -> Self {
        Self {
            heading: heading.to_owned(),
            body: body.to_owned(),
        }
    }

    /// Render as `<h2>heading</h2><p>body</p>`.
    #[must_use]
    pub fn to_html(&self) -> String {
        format!("<h2>{}</h2><p>{}</p>", self.heading, self.body)
    }

    /// Render with the `{article}` placeholder replaced.
    #[must_use]
    pub fn to_html_with_article(&self, article: &str) -> String {
        format!(
            "<h2>{}</h2><p>{}</p>",
            self.heading,
            self.body.replace("{article}", article)
        )
    }
}

/// Messages shown in content regions when no article can be rendered.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MessagesConfig {
    /// Shown in every region when the dataset path is missing.
    pub config_error: Message,
    /// Shown in every region when the dataset fails to load.
    pub fetch_error: Message,
    /// Shown while the dataset is still loading.
    pub loading: Message,
    /// Shown when a topic references an unknown article.
    pub not_found: Message,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            config_error: Message::new(
                "Configuration Error",
                "Article data path is missing. Please check the `data-articles-path` attribute on your main content area.",
            ),
            fetch_error: Message::new(
                "Error Loading Content",
                "We apologize, but there was an issue loading the articles. Please try again later.",
            ),
            loading: Message::new("Loading", "Content is loading..."),
            not_found: Message::new(
                "Content Not Available",
                "The requested article \"{article}\" could not be found. Please select another topic.",
            ),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// A setting required by the current operation is not set.
    #[error("Missing required setting: {0}")]
    Missing(&'static str),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional page settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `tabkit.toml` in current directory and parents.
    ///
    /// Page settings are applied after loading, so attributes on the page
    /// take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the merged configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        page_settings: Option<&PageSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = page_settings {
            config.apply_page_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply page settings to the configuration.
    pub fn apply_page_settings(&mut self, settings: &PageSettings) {
        if let Some(path) = &settings.articles_path {
            self.articles_resolved.path = Some(path.clone());
        }
        if let Some(base_url) = &settings.base_url {
            self.articles_resolved.base_url = Some(base_url.clone());
        }
    }

    /// Get the article dataset path.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` if no path was configured or the
    /// configured path is empty.
    pub fn require_articles_path(&self) -> Result<&str, ConfigError> {
        self.articles_resolved
            .path
            .as_deref()
            .filter(|path| !path.is_empty())
            .ok_or(ConfigError::Missing("articles.path"))
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            articles: ArticlesConfigRaw::default(),
            regions: RegionConfig::default(),
            panels: PanelsConfig::default(),
            messages: MessagesConfig::default(),
            articles_resolved: ArticlesConfig {
                root_dir: base.to_path_buf(),
                ..ArticlesConfig::default()
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_articles()?;
        require_non_empty(&self.regions.region_suffix, "regions.region_suffix")?;
        Ok(())
    }

    fn validate_articles(&self) -> Result<(), ConfigError> {
        // An empty path is left for `require_articles_path` to report.
        let articles = &self.articles_resolved;
        if let Some(base_url) = &articles.base_url {
            require_http_url(base_url, "articles.base_url")?;
        }
        if articles.timeout == Some(Duration::ZERO) {
            return Err(ConfigError::Validation(
                "articles.timeout_secs must be greater than 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Resolve raw values against the config directory.
    fn resolve(&mut self, config_dir: &Path) {
        self.articles_resolved = ArticlesConfig {
            path: self.articles.path.clone(),
            base_url: self.articles.base_url.clone(),
            root_dir: config_dir.to_path_buf(),
            timeout: self.articles.timeout_secs.map(Duration::from_secs),
        };
    }
}
