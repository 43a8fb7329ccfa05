use crate::constants::{
    DEFAULT_BIND, DEFAULT_PUBLIC_DIR, DEFAULT_PUBLIC_PREFIX, DEFAULT_SLOT_COUNT, LOG_LEVELS, MAX_SLOT_COUNT,
};
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_public_url, validate_range, Validate,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Component, Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: SiteInfo,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub gallery: GalleryConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteInfo {
    pub title: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_public_dir")]
    pub public_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryConfig {
    /// Filesystem directory to scan. Defaults to `public_dir` + `public_prefix`.
    pub directory: Option<String>,
    #[serde(default = "default_public_prefix")]
    pub public_prefix: String,
    #[serde(default = "default_slot_count")]
    pub slot_count: usize,
    /// Thumbnail subdirectory, relative to the gallery directory.
    pub thumbs_dir: Option<String>,
    #[serde(default = "default_fallback_images")]
    pub fallback_images: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

fn default_public_dir() -> String {
    DEFAULT_PUBLIC_DIR.to_string()
}

fn default_public_prefix() -> String {
    DEFAULT_PUBLIC_PREFIX.to_string()
}

fn default_slot_count() -> usize {
    DEFAULT_SLOT_COUNT
}

fn default_fallback_images() -> Vec<String> {
    (1..=3)
        .map(|i| format!("{}/image{}.webp", DEFAULT_PUBLIC_PREFIX, i))
        .collect()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            public_dir: default_public_dir(),
        }
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            directory: None,
            public_prefix: default_public_prefix(),
            slot_count: default_slot_count(),
            thumbs_dir: None,
            fallback_images: default_fallback_images(),
        }
    }
}

impl SiteConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SiteError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PUBLIC_DIR})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SiteError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        self.bind_addr()?;
        validate_path("server.public_dir", &self.server.public_dir)?;

        if let Some(directory) = &self.gallery.directory {
            validate_path("gallery.directory", directory)?;
        }

        validate_non_empty_string("gallery.public_prefix", &self.gallery.public_prefix)?;
        if !self.gallery.public_prefix.starts_with('/') {
            return Err(SiteError::InvalidConfigValueError {
                field: "gallery.public_prefix".to_string(),
                value: self.gallery.public_prefix.clone(),
                reason: "Public prefix must start with '/'".to_string(),
            });
        }

        validate_range("gallery.slot_count", self.gallery.slot_count, 1, MAX_SLOT_COUNT)?;

        if let Some(thumbs_dir) = &self.gallery.thumbs_dir {
            validate_path("gallery.thumbs_dir", thumbs_dir)?;
            let nested = Path::new(thumbs_dir)
                .components()
                .all(|c| matches!(c, Component::Normal(_)));
            if !nested {
                return Err(SiteError::InvalidConfigValueError {
                    field: "gallery.thumbs_dir".to_string(),
                    value: thumbs_dir.clone(),
                    reason: "Thumbnail directory must be relative to the gallery directory".to_string(),
                });
            }
        }

        for image in &self.gallery.fallback_images {
            validate_public_url("gallery.fallback_images", image)?;
        }

        if let Some(title) = &self.site.title {
            validate_non_empty_string("site.title", title)?;
        }

        if let Some(level) = &self.logging.level {
            if !LOG_LEVELS.contains(&level.as_str()) {
                return Err(SiteError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.clone(),
                    reason: format!("Valid levels: {}", LOG_LEVELS.join(", ")),
                });
            }
        }

        Ok(())
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.server
            .bind
            .parse()
            .map_err(|e: std::net::AddrParseError| SiteError::InvalidConfigValueError {
                field: "server.bind".to_string(),
                value: self.server.bind.clone(),
                reason: e.to_string(),
            })
    }

    /// Title shown in startup logs.
    pub fn site_title(&self) -> &str {
        self.site.title.as_deref().unwrap_or("wedding-site")
    }

    pub fn public_dir(&self) -> PathBuf {
        PathBuf::from(&self.server.public_dir)
    }

    /// Public prefix without a trailing slash (`/images/gallery`).
    pub fn public_prefix(&self) -> &str {
        self.gallery.public_prefix.trim_end_matches('/')
    }

    pub fn gallery_directory(&self) -> PathBuf {
        match &self.gallery.directory {
            Some(directory) => PathBuf::from(directory),
            None => self
                .public_dir()
                .join(self.public_prefix().trim_start_matches('/')),
        }
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
