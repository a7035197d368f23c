use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use dreamscape_export::pdf::PageFormat;
use dreamscape_llm::CompletionModel;
use dreamscape_llm::bedrock::{self, BedrockClient};
use dreamscape_llm::openai::{self, OpenAiClient};

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub model: ModelConfig,
    pub templates_dir: PathBuf,
    pub banner_path: PathBuf,
    pub output_dir: PathBuf,
    pub chromium_path: PathBuf,
    pub page_format: PageFormat,
}

#[derive(Clone)]
pub enum ModelConfig {
    OpenAi {
        api_key: String,
        model: String,
        base_url: String,
        timeout: Duration,
    },
    Bedrock {
        model: String,
    },
}

impl fmt::Debug for ModelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelConfig::OpenAi {
                api_key,
                model,
                base_url,
                timeout,
            } => f
                .debug_struct("OpenAi")
                .field("api_key", &redact_key(api_key))
                .field("model", model)
                .field("base_url", base_url)
                .field("timeout", timeout)
                .finish(),
            ModelConfig::Bedrock { model } => {
                f.debug_struct("Bedrock").field("model", model).finish()
            }
        }
    }
}

fn redact_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "****".to_string();
    }
    let prefix: String = chars[..3].iter().collect();
    let suffix: String = chars[chars.len() - 4..].iter().collect();
    format!("{prefix}...{suffix}")
}

impl ModelConfig {
    /// Construct the configured model client.
    pub async fn connect(&self) -> eyre::Result<Arc<dyn CompletionModel>> {
        let model: Arc<dyn CompletionModel> = match self {
            ModelConfig::OpenAi {
                api_key,
                model,
                base_url,
                timeout,
            } => Arc::new(OpenAiClient::new(
                api_key.as_str(),
                model.as_str(),
                base_url.as_str(),
                *timeout,
            )?),
            ModelConfig::Bedrock { model } => Arc::new(BedrockClient::from_env(model.as_str()).await),
        };
        Ok(model)
    }
}

impl ServerConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key → value source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> eyre::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let get_or = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        let host: IpAddr = get_or("HOST", "0.0.0.0")
            .parse()
            .map_err(|e| eyre::eyre!("invalid HOST: {e}"))?;
        let port: u16 = get_or("PORT", "3000")
            .parse()
            .map_err(|e| eyre::eyre!("invalid PORT: {e}"))?;

        let model = match get_or("LLM_PROVIDER", "openai").to_ascii_lowercase().as_str() {
            "openai" => {
                let api_key = get("OPENAI_API_KEY")
                    .ok_or_else(|| eyre::eyre!("OPENAI_API_KEY is required for the openai provider"))?;
                let timeout_secs: u64 = get_or("LLM_TIMEOUT_SECS", "120")
                    .parse()
                    .map_err(|e| eyre::eyre!("invalid LLM_TIMEOUT_SECS: {e}"))?;
                ModelConfig::OpenAi {
                    api_key,
                    model: get_or("LLM_MODEL", openai::DEFAULT_MODEL),
                    base_url: get_or("OPENAI_BASE_URL", openai::DEFAULT_BASE_URL),
                    timeout: Duration::from_secs(timeout_secs),
                }
            }
            "bedrock" => ModelConfig::Bedrock {
                model: get_or("LLM_MODEL", bedrock::DEFAULT_MODEL),
            },
            other => return Err(eyre::eyre!("unknown LLM_PROVIDER: {other}")),
        };

        let page_format: PageFormat = get_or("PDF_PAGE_FORMAT", "A4").parse()?;

        Ok(Self {
            bind_addr: SocketAddr::new(host, port),
            model,
            templates_dir: PathBuf::from(get_or("TEMPLATES_DIR", "assets/templates")),
            banner_path: PathBuf::from(get_or("BANNER_PATH", "assets/banner.png")),
            output_dir: PathBuf::from(get_or("OUTPUT_DIR", "pdfs")),
            chromium_path: PathBuf::from(get_or("CHROMIUM_PATH", "chromium")),
            page_format,
        })
    }
}
