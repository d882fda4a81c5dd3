use dioxus::logger::tracing::{error, info, warn};
use dioxus::prelude::*;
use futures::{stream::SplitSink, SinkExt};
use futures_util::StreamExt;
use gloo_net::websocket::{futures::WebSocket, Message};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{config::AppConfig, server::AppError};

/// Connection lifecycle for the hub link. Group membership only exists while
/// connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HubState {
  Connecting,
  Connected { joined: bool },
  Disconnected,
}

impl HubState {
  pub fn label(&self) -> &'static str {
    match self {
      HubState::Connecting => "Conectando",
      HubState::Connected { joined: true } => "Conectado",
      HubState::Connected { joined: false } => "Conectado (sin grupo)",
      HubState::Disconnected => "Desconectado",
    }
  }
}

/* Hub envelopes */

#[derive(Debug, Serialize)]
#[serde(tag = "invocation")]
pub enum HubInvocation {
  JoinGroup { group: String, connection: String },
  LeaveGroup { group: String, connection: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct HubFrame {
  pub target: String,
  #[serde(default)]
  pub payload: Value,
}

impl HubFrame {
  /// The page listens for exactly one named event; everything else on the
  /// group is ignored.
  pub fn payload_for(self, event: &str) -> Option<Value> {
    if self.target == event {
      Some(self.payload)
    } else {
      None
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeardownStep {
  LeaveGroup,
  Stop,
}

/// Unmount plan for a given connection state. Leaving the group only makes
/// sense while the link is up and joined; otherwise the socket is closed
/// directly.
pub fn teardown_steps(state: &HubState) -> Vec<TeardownStep> {
  match state {
    HubState::Connected { joined: true } => vec![TeardownStep::LeaveGroup, TeardownStep::Stop],
    _ => vec![TeardownStep::Stop],
  }
}

/// Connect, join the configured group and pump event payloads into the page's
/// processor channel until the server closes the link.
pub async fn subscribe(
  cfg: AppConfig,
  connection_id: String,
  mut sink: Signal<Option<SplitSink<WebSocket, Message>>>,
  mut state: Signal<HubState>,
  readings: Coroutine<Value>,
) -> Result<(), AppError> {
  let ws = WebSocket::open(&cfg.hub_url)
    .map_err(|e| AppError::HubConnectionError(e.to_string()))?;
  let (mut write, mut read) = ws.split();
  state.set(HubState::Connected { joined: false });
  info!("connected to hub at {}", cfg.hub_url);

  let join = HubInvocation::JoinGroup {
    group: cfg.group.clone(),
    connection: connection_id,
  };
  let join_msg =
    serde_json::to_string(&join).map_err(|e| AppError::SerializeError(e.to_string()))?;
  match write.send(Message::Text(join_msg)).await {
    Ok(_) => {
      state.set(HubState::Connected { joined: true });
      info!("joined group {}", cfg.group);
    }
    // Logged only; the link stays up and keeps listening.
    Err(e) => error!("{}", AppError::HubJoinError(e.to_string())),
  }

  // The write half parks in a signal so unmount can still say goodbye.
  *sink.write() = Some(write);

  while let Some(Ok(server_msg)) = read.next().await {
    let text = match server_msg {
      Message::Text(s) => s,
      Message::Bytes(b) => match String::from_utf8(b) {
        Ok(s) => s,
        Err(e) => {
          warn!("non-utf8 hub frame dropped: {}", e);
          continue;
        }
      },
    };

    let frame = match serde_json::from_str::<HubFrame>(&text) {
      Ok(frame) => frame,
      Err(e) => {
        warn!("{}", AppError::DeserializeError(format!("hub frame {:?}: {}", text, e)));
        continue;
      }
    };

    if let Some(payload) = frame.payload_for(&cfg.event) {
      readings.send(payload);
    }
  }

  state.set(HubState::Disconnected);
  info!("hub connection closed");
  Ok(())
}

/// Run the teardown plan against whatever write half is still around. Called
/// from an app-scoped task so it outlives the page.
pub async fn shutdown(
  mut sink: Option<SplitSink<WebSocket, Message>>,
  steps: Vec<TeardownStep>,
  group: String,
  connection_id: String,
) {
  for step in steps {
    match step {
      TeardownStep::LeaveGroup => {
        let Some(write) = sink.as_mut() else { continue };
        let leave = HubInvocation::LeaveGroup {
          group: group.clone(),
          connection: connection_id.clone(),
        };
        match serde_json::to_string(&leave) {
          Ok(msg) => match write.send(Message::Text(msg)).await {
            Ok(_) => info!("left group {}", group),
            Err(e) => error!("{}", AppError::HubJoinError(e.to_string())),
          },
          Err(e) => error!("{}", AppError::SerializeError(e.to_string())),
        }
      }
      TeardownStep::Stop => {
        if let Some(mut write) = sink.take() {
          if let Err(e) = write.close().await {
            error!("{}", AppError::HubConnectionError(e.to_string()));
          } else {
            info!("hub connection stopped");
          }
        }
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_teardown_leaves_group_before_stopping_when_joined() {
    let steps = teardown_steps(&HubState::Connected { joined: true });
    assert_eq!(steps, vec![TeardownStep::LeaveGroup, TeardownStep::Stop]);
  }

  #[test]
  fn test_teardown_stops_directly_when_not_joined() {
    assert_eq!(
      teardown_steps(&HubState::Connected { joined: false }),
      vec![TeardownStep::Stop]
    );
    assert_eq!(teardown_steps(&HubState::Connecting), vec![TeardownStep::Stop]);
    assert_eq!(teardown_steps(&HubState::Disconnected), vec![TeardownStep::Stop]);
  }

  #[test]
  fn test_join_envelope_wire_shape() {
    let join = HubInvocation::JoinGroup {
      group: "EntradaPT".to_string(),
      connection: "abc".to_string(),
    };
    let json = serde_json::to_value(&join).unwrap();
    assert_eq!(json["invocation"], "JoinGroup");
    assert_eq!(json["group"], "EntradaPT");
    assert_eq!(json["connection"], "abc");
  }

  #[test]
  fn test_frames_filter_on_event_name() {
    let frame: HubFrame =
      serde_json::from_str(r#"{"target": "sendEpc", "payload": {"epc": "E2"}}"#).unwrap();
    assert_eq!(frame.clone().payload_for("otherEvent"), None);
    assert_eq!(frame.payload_for("sendEpc"), Some(json!({"epc": "E2"})));
  }

  #[test]
  fn test_frame_without_payload_defaults_to_null() {
    let frame: HubFrame = serde_json::from_str(r#"{"target": "sendEpc"}"#).unwrap();
    assert_eq!(frame.payload_for("sendEpc"), Some(Value::Null));
  }
}
