use log::Level;
use web_sys::window;

const STORAGE_PREFIX: &str = "watchtower_";

/// Where explanation requests are sent.
///
/// Exactly one variant is active at a time; both speak the same
/// `{ prediction }` / `{ explanation }` JSON contract.
#[derive(Debug, Clone, PartialEq)]
pub enum ExplanationEndpoint {
    /// The Watchtower API server (`/api/get_explanation/`)
    LocalBackend { base_url: String },
    /// A third-party explanation host (`/explain`)
    External { base_url: String },
}

impl ExplanationEndpoint {
    pub fn url(&self) -> String {
        match self {
            Self::LocalBackend { base_url } => {
                format!("{}/api/get_explanation/", base_url.trim_end_matches('/'))
            }
            Self::External { base_url } => format!("{}/explain", base_url.trim_end_matches('/')),
        }
    }

    fn base_url(&self) -> &str {
        match self {
            Self::LocalBackend { base_url } | Self::External { base_url } => base_url,
        }
    }
}

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Target of the "Get Explanation" button
    pub explanation_endpoint: ExplanationEndpoint,

    /// Origin of the upload endpoint; empty means same origin as the page
    pub upload_base_url: String,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Toast notification duration in milliseconds
    pub toast_duration_ms: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            explanation_endpoint: ExplanationEndpoint::LocalBackend {
                base_url: "http://127.0.0.1:8000".to_string(),
            },
            upload_base_url: String::new(),
            log_level: Level::Info,
            debug_mode: false,
            toast_duration_ms: 5000,
        }
    }
}

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        if let Some(window) = window() {
            if let Ok(hostname) = window.location().hostname() {
                settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

                // In development, use more verbose logging
                if settings.debug_mode {
                    settings.log_level = Level::Debug;
                }
            }

            if let Ok(Some(storage)) = window.local_storage() {
                settings.apply_overrides(|key| {
                    storage
                        .get_item(&format!("{}{}", STORAGE_PREFIX, key))
                        .ok()
                        .flatten()
                });
            }
        }

        settings
    }

    /// Apply overrides from a key/value source (localStorage in the browser).
    ///
    /// Keys: `explanation_endpoint` (`local` | `external`),
    /// `explanation_base_url`, `upload_base_url`, `log_level`,
    /// `toast_duration_ms`. Unknown values keep the current setting.
    pub fn apply_overrides<F>(&mut self, get: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = get("explanation_base_url")
            .unwrap_or_else(|| self.explanation_endpoint.base_url().to_string());

        self.explanation_endpoint = match get("explanation_endpoint").as_deref() {
            Some("external") => ExplanationEndpoint::External { base_url },
            Some("local") => ExplanationEndpoint::LocalBackend { base_url },
            _ => match &self.explanation_endpoint {
                ExplanationEndpoint::LocalBackend { .. } => ExplanationEndpoint::LocalBackend { base_url },
                ExplanationEndpoint::External { .. } => ExplanationEndpoint::External { base_url },
            },
        };

        if let Some(upload_base_url) = get("upload_base_url") {
            self.upload_base_url = upload_base_url;
        }

        if let Some(log_level) = get("log_level") {
            self.log_level = match log_level.to_lowercase().as_str() {
                "error" => Level::Error,
                "warn" => Level::Warn,
                "info" => Level::Info,
                "debug" => Level::Debug,
                "trace" => Level::Trace,
                _ => self.log_level,
            };
        }

        if let Some(duration) = get("toast_duration_ms").and_then(|d| d.parse::<u32>().ok()) {
            self.toast_duration_ms = duration;
        }
    }

    /// Full URL of the explanation endpoint
    pub fn explanation_url(&self) -> String {
        self.explanation_endpoint.url()
    }

    /// Full URL of the upload endpoint
    pub fn upload_url(&self) -> String {
        format!("{}/upload", self.upload_base_url.trim_end_matches('/'))
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}
