/// Process-wide settings read from the environment at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    /// State whose districts are listed when resolving a district name.
    pub state_code: u32,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub log_level: String,
}
