#[derive(Clone)]
pub struct AppConfig {
    pub serpapi_api_key: Option<String>,
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub serpapi_base_url: String,
    pub openai_base_url: String,
    pub request_timeout_secs: u64,
    pub result_limit: usize,
    pub keyword_count: usize,
    pub max_concurrent_keywords: usize,
    pub user_agent: String,
    pub log_level: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field(
                "serpapi_api_key",
                &self.serpapi_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "openai_api_key",
                &self.openai_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("openai_model", &self.openai_model)
            .field("serpapi_base_url", &self.serpapi_base_url)
            .field("openai_base_url", &self.openai_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("result_limit", &self.result_limit)
            .field("keyword_count", &self.keyword_count)
            .field("max_concurrent_keywords", &self.max_concurrent_keywords)
            .field("user_agent", &self.user_agent)
            .field("log_level", &self.log_level)
            .finish()
    }
}
