use dioxus::logger::tracing::warn;
use serde::Deserialize;
use serde_json::Value;

use super::api::TextOrNumber;

/* Hub event payload */

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TagRead {
  pub epc: Option<String>,
  pub antenna_port: Option<TextOrNumber>,
  pub rssi: Option<TextOrNumber>,
  pub first_seen_time: Option<String>,
  pub last_seen_time: Option<String>,
  #[serde(rename = "readerIP")]
  pub reader_ip: Option<String>,
}

/// One read off the antenna. Built per inbound event, consumed right away.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceReading {
  pub tag: String,
  pub antenna: Option<String>,
  pub rssi: Option<String>,
  pub first_seen: Option<String>,
  pub last_seen: Option<String>,
  pub reader_ip: Option<String>,
}

/// Tags come off the reader with embedded spaces ("E200 1234"); every
/// downstream call wants them collapsed.
pub fn normalize_tag(raw: &str) -> String {
  raw.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Turn a raw hub payload into a reading. Payloads without a usable epc are
/// logged and dropped; nothing downstream fires for them.
pub fn read_device(payload: &Value) -> Option<DeviceReading> {
  let read: TagRead = match serde_json::from_value(payload.clone()) {
    Ok(read) => read,
    Err(e) => {
      warn!("malformed tag read {}: {}", payload, e);
      return None;
    }
  };

  let Some(epc) = read.epc else {
    warn!("tag read without epc, discarding: {}", payload);
    return None;
  };
  let tag = normalize_tag(&epc);
  if tag.is_empty() {
    warn!("tag read with blank epc, discarding: {}", payload);
    return None;
  }

  Some(DeviceReading {
    tag,
    antenna: read.antenna_port.map(|v| v.to_string()),
    rssi: read.rssi.map(|v| v.to_string()),
    first_seen: read.first_seen_time,
    last_seen: read.last_seen_time,
    reader_ip: read.reader_ip,
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_missing_epc_is_discarded() {
    let payload = json!({"antennaPort": "1", "rssi": -61.5});
    assert_eq!(read_device(&payload), None);
  }

  #[test]
  fn test_blank_epc_is_discarded() {
    let payload = json!({"epc": "   "});
    assert_eq!(read_device(&payload), None);
  }

  #[test]
  fn test_non_object_payload_is_discarded() {
    assert_eq!(read_device(&json!("E2001234")), None);
  }

  #[test]
  fn test_tag_whitespace_is_stripped() {
    let payload = json!({
      "epc": " E200 1234 ",
      "antennaPort": "1",
      "lastSeenTime": "2024-01-01T00:00:00Z"
    });
    let reading = read_device(&payload).unwrap();
    assert_eq!(reading.tag, "E2001234");
    assert_eq!(reading.antenna.as_deref(), Some("1"));
    assert_eq!(reading.last_seen.as_deref(), Some("2024-01-01T00:00:00Z"));
  }

  #[test]
  fn test_numeric_antenna_port_is_kept() {
    let payload = json!({"epc": "E2", "antennaPort": 3, "readerIP": "10.0.0.5"});
    let reading = read_device(&payload).unwrap();
    assert_eq!(reading.antenna.as_deref(), Some("3"));
    assert_eq!(reading.reader_ip.as_deref(), Some("10.0.0.5"));
  }

  #[test]
  fn test_normalize_tag_handles_tabs_and_inner_runs() {
    assert_eq!(normalize_tag("\tE2 00\u{00a0}12"), "E20012");
  }
}
