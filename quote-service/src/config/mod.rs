use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::path::PathBuf;

/// Default font asset path, relative to the working directory.
const DEFAULT_FONT_PATH: &str = "fonts/arial.ttf";

/// Default pixel size for the quote body.
const DEFAULT_QUOTE_FONT_SIZE: f32 = 80.0;

/// Default pixel size for the author byline.
const DEFAULT_AUTHOR_FONT_SIZE: f32 = 50.0;

#[derive(Debug, Clone)]
pub struct QuoteConfig {
    pub common: core_config::Config,
    pub google: GoogleConfig,
    pub models: ModelConfig,
    pub image: ImageConfig,
}

#[derive(Debug, Clone)]
pub struct GoogleConfig {
    /// `GOOGLE_API_KEY`. An absent or empty key leaves quote generation
    /// disabled for the process lifetime; image rendering keeps working.
    pub api_key: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// Text model used for quote generation (e.g., gemini-2.0-flash).
    pub text_model: String,
}

/// Canvas rendering settings. Dimensions are fixed; the font asset and
/// point sizes are configurable so tests can point at a bundled font.
#[derive(Debug, Clone)]
pub struct ImageConfig {
    pub font_path: PathBuf,
    pub quote_font_size: f32,
    pub author_font_size: f32,
}

impl Default for ImageConfig {
    fn default() -> Self {
        ImageConfig {
            font_path: PathBuf::from(DEFAULT_FONT_PATH),
            quote_font_size: DEFAULT_QUOTE_FONT_SIZE,
            author_font_size: DEFAULT_AUTHOR_FONT_SIZE,
        }
    }
}

impl QuoteConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        let image_defaults = ImageConfig::default();

        Ok(QuoteConfig {
            common,
            google: GoogleConfig {
                api_key: env::var("GOOGLE_API_KEY").ok().filter(|k| !k.is_empty()),
            },
            models: ModelConfig {
                text_model: get_env("GENAI_TEXT_MODEL", "gemini-2.0-flash"),
            },
            image: ImageConfig {
                font_path: env::var("QUOTE_FONT_PATH")
                    .map(PathBuf::from)
                    .unwrap_or(image_defaults.font_path),
                quote_font_size: get_size("QUOTE_FONT_SIZE", image_defaults.quote_font_size),
                author_font_size: get_size("AUTHOR_FONT_SIZE", image_defaults.author_font_size),
            },
        })
    }
}

fn get_env(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn get_size(key: &str, default: f32) -> f32 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
