use commitgen_core::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Default request body limit: 50 MiB.
pub const DEFAULT_BODY_LIMIT: usize = 50 * 1024 * 1024;

/// Settings for the upstream Gemini API.
#[derive(Debug, Clone, clap::Args)]
pub struct GeminiOptions {
    /// Gemini API key
    #[clap(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Model name used for generation
    #[clap(long, env = "GEMINI_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Base URL of the Generative Language API
    #[clap(long, env = "GEMINI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Upstream request timeout in seconds (no timeout when unset)
    #[clap(long, env = "UPSTREAM_TIMEOUT_SECS")]
    pub timeout: Option<u64>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServeOptions {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "3000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Maximum accepted request body size in bytes
    #[arg(long, env = "BODY_LIMIT", default_value_t = DEFAULT_BODY_LIMIT)]
    pub body_limit: usize,

    #[clap(flatten)]
    pub gemini: GeminiOptions,
}

impl ServeOptions {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
