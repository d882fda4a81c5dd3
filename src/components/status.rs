#![allow(non_snake_case)]

use dioxus::prelude::*;
use crate::utils::hub::HubState;

#[component]
pub fn StatusChip(state: HubState) -> Element {
  let class = match state {
    HubState::Connected { joined: true } => "status-chip status-online",
    HubState::Connected { joined: false } | HubState::Connecting => "status-chip status-pending",
    HubState::Disconnected => "status-chip status-offline",
  };

  rsx! {
    span {
      class: "{class}",
      "{state.label()}"
    }
  }
}
