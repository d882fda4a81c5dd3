use std::fmt;

// App Errors
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
  HubConnectionError(String),
  HubJoinError(String),
  RequestError(String),
  BadStatus(u16, String),
  SerializeError(String),
  DeserializeError(String),
}

impl std::error::Error for AppError {}

impl fmt::Display for AppError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      AppError::HubConnectionError(msg) => write!(f, "Hub connection error: {}", msg),
      AppError::HubJoinError(msg) => write!(f, "Hub group join error: {}", msg),
      AppError::RequestError(msg) => write!(f, "Request error: {}", msg),
      AppError::BadStatus(code, path) => write!(f, "Unexpected status {} from {}", code, path),
      AppError::SerializeError(msg) => write!(f, "Serialize error: {}", msg),
      AppError::DeserializeError(msg) => write!(f, "Deserialize error: {}", msg),
    }
  }
}
