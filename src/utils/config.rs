pub const API_BASE_URL: &str = env!("API_BASE_URL");
pub const HUB_URL: &str = env!("HUB_URL");
pub const HUB_GROUP: &str = env!("HUB_GROUP");
pub const HUB_EVENT: &str = env!("HUB_EVENT");

/// Endpoint configuration handed to the entries page via context, so no
/// component talks to a hardcoded host directly.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
  pub api_base: String,
  pub hub_url: String,
  pub group: String,
  pub event: String,
}

impl AppConfig {
  pub fn from_env() -> Self {
    AppConfig {
      api_base: API_BASE_URL.trim_end_matches('/').to_string(),
      hub_url: HUB_URL.to_string(),
      group: HUB_GROUP.to_string(),
      event: HUB_EVENT.to_string(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_from_env_trims_trailing_slash() {
    let cfg = AppConfig::from_env();
    assert!(!cfg.api_base.ends_with('/'));
    assert!(!cfg.group.is_empty());
    assert!(!cfg.event.is_empty());
  }
}
