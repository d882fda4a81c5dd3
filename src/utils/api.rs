use std::fmt;

use dioxus::logger::tracing::{error, info};
use reqwest::Client;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::server::AppError;

/// Placeholder shown for any field the API left empty.
pub const MISSING_FIELD: &str = "N/A";
/// Shown when the print-card image lookup returns nothing.
pub const FALLBACK_IMAGE: &str = "https://www.jnfac.or.kr/img/noimage.jpg";

/* API responses */

// The upstream data is unvalidated: weights and piece counts show up as JSON
// numbers or as strings depending on who captured the label. Text is tried
// first so string values stay verbatim.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TextOrNumber {
  Text(String),
  Number(Decimal),
}

impl fmt::Display for TextOrNumber {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      TextOrNumber::Text(s) => write!(f, "{}", s),
      TextOrNumber::Number(n) => write!(f, "{}", n),
    }
  }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductRecord {
  pub id: Option<i64>,
  pub fecha: Option<String>,
  pub area: Option<String>,
  pub clave_producto: Option<String>,
  pub nombre_producto: Option<String>,
  pub peso_bruto: Option<TextOrNumber>,
  pub peso_neto: Option<TextOrNumber>,
  pub peso_tarima: Option<TextOrNumber>,
  pub piezas: Option<TextOrNumber>,
  pub uom: Option<String>,
  pub fecha_entrada: Option<String>,
  pub product_print_card: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImagePayload {
  pub image_base64: Option<String>,
}

/* API requests */

#[derive(Debug, Serialize)]
pub struct StatusBody {
  pub status: i32,
}

#[derive(Debug, Serialize)]
pub struct EntryBody {
  #[serde(rename = "prodEtiquetaRFIDId")]
  pub prod_etiqueta_rfid_id: i64,
  #[serde(rename = "fechaEntrada")]
  pub fecha_entrada: String,
  pub antena: String,
}

/// A record flattened for display, every hole already plugged.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductEntry {
  pub imagen: String,
  pub fecha: String,
  pub area: String,
  pub clave_producto: String,
  pub nombre_producto: String,
  pub peso_bruto: String,
  pub peso_neto: String,
  pub peso_tarima: String,
  pub piezas: String,
  pub uom: String,
  pub fecha_entrada: String,
  pub product_print_card: String,
}

impl ProductEntry {
  pub fn from_record(record: &ProductRecord, image: Option<String>) -> Self {
    ProductEntry {
      imagen: image
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| FALLBACK_IMAGE.to_string()),
      fecha: text_or_na(&record.fecha),
      area: text_or_na(&record.area),
      clave_producto: text_or_na(&record.clave_producto),
      nombre_producto: text_or_na(&record.nombre_producto),
      peso_bruto: num_or_na(&record.peso_bruto),
      peso_neto: num_or_na(&record.peso_neto),
      peso_tarima: num_or_na(&record.peso_tarima),
      piezas: num_or_na(&record.piezas),
      uom: text_or_na(&record.uom),
      fecha_entrada: text_or_na(&record.fecha_entrada),
      product_print_card: text_or_na(&record.product_print_card),
    }
  }
}

fn text_or_na(field: &Option<String>) -> String {
  match field {
    Some(s) if !s.is_empty() => s.clone(),
    _ => MISSING_FIELD.to_string(),
  }
}

fn num_or_na(field: &Option<TextOrNumber>) -> String {
  match field {
    Some(v) => v.to_string(),
    None => MISSING_FIELD.to_string(),
  }
}

/// Newest entry goes to the front; everything already on screen keeps its
/// relative order.
pub fn prepend_entry(entries: &mut Vec<ProductEntry>, entry: ProductEntry) {
  entries.insert(0, entry);
}

#[derive(Clone)]
pub struct ApiClient {
  base: String,
  http: Client,
}

impl ApiClient {
  pub fn new(base: impl Into<String>) -> Self {
    ApiClient { base: base.into(), http: Client::new() }
  }

  /// GET a record by tag id. Any failure is logged and swallowed.
  pub async fn fetch_record(&self, tag: &str) -> Option<ProductRecord> {
    let url = format!("{}/api/socket/{}", self.base, tag);
    match self.http.get(&url).send().await {
      Ok(resp) if resp.status().is_success() => match resp.json::<ProductRecord>().await {
        Ok(record) => Some(record),
        Err(e) => {
          error!("{}", AppError::DeserializeError(e.to_string()));
          None
        }
      },
      Ok(resp) => {
        error!("{}", AppError::BadStatus(resp.status().as_u16(), url));
        None
      }
      Err(e) => {
        error!("{}", AppError::RequestError(e.to_string()));
        None
      }
    }
  }

  /// GET the label image for a record's print-card reference.
  pub async fn fetch_image(&self, print_card: &str) -> Option<String> {
    let url = format!("{}/api/Image/{}", self.base, print_card);
    match self.http.get(&url).send().await {
      Ok(resp) if resp.status().is_success() => match resp.json::<ImagePayload>().await {
        Ok(payload) => payload.image_base64,
        Err(e) => {
          error!("{}", AppError::DeserializeError(e.to_string()));
          None
        }
      },
      Ok(resp) => {
        error!("{}", AppError::BadStatus(resp.status().as_u16(), url));
        None
      }
      Err(e) => {
        error!("{}", AppError::RequestError(e.to_string()));
        None
      }
    }
  }

  /// Combined record + image lookup backing one list entry.
  pub async fn load_entry(&self, tag: &str) -> Option<ProductEntry> {
    let record = self.fetch_record(tag).await?;
    let image = match record.product_print_card.as_deref() {
      Some(print_card) if !print_card.is_empty() => self.fetch_image(print_card).await,
      _ => None,
    };
    info!("loaded record for tag {}", tag);
    Some(ProductEntry::from_record(&record, image))
  }

  /// PUT the new label status for a tag. Fire-and-forget.
  pub async fn update_status(&self, tag: &str, status: i32) {
    let url = format!("{}/api/RfidLabel/UpdateStatusByRFID/{}", self.base, tag);
    match self.http.put(&url).json(&StatusBody { status }).send().await {
      Ok(resp) if resp.status().is_success() => info!("status for tag {} set to {}", tag, status),
      Ok(resp) => error!("{}", AppError::BadStatus(resp.status().as_u16(), url)),
      Err(e) => error!("{}", AppError::RequestError(e.to_string())),
    }
  }

  /// POST a warehouse-entry history row. Re-fetches the record first since the
  /// history endpoint is keyed by the record id, not the tag.
  pub async fn record_entry(
    &self,
    tag: &str,
    antena: &str,
    entered_at: String,
  ) -> Option<serde_json::Value> {
    let record = self.fetch_record(tag).await?;
    let Some(record_id) = record.id else {
      error!("record for tag {} carries no id, entry not registered", tag);
      return None;
    };

    let body = EntryBody {
      prod_etiqueta_rfid_id: record_id,
      fecha_entrada: entered_at,
      antena: antena.to_string(),
    };
    let url = format!("{}/api/ProdExtraInfo/EntradaAlmacen", self.base);
    match self.http.post(&url).json(&body).send().await {
      Ok(resp) if resp.status().is_success() => match resp.json::<serde_json::Value>().await {
        Ok(ack) => {
          info!("entry registered for record {}", record_id);
          Some(ack)
        }
        Err(e) => {
          error!("{}", AppError::DeserializeError(e.to_string()));
          None
        }
      },
      Ok(resp) => {
        error!("{}", AppError::BadStatus(resp.status().as_u16(), url));
        None
      }
      Err(e) => {
        error!("{}", AppError::RequestError(e.to_string()));
        None
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rust_decimal_macros::dec;

  #[test]
  fn test_record_decodes_numbers_and_strings() {
    let raw = r#"{
      "id": 7,
      "area": "PT",
      "claveProducto": "CP-01",
      "pesoBruto": 120.5,
      "pesoNeto": "118.2",
      "piezas": 24,
      "productPrintCard": "PC-9"
    }"#;
    let record: ProductRecord = serde_json::from_str(raw).unwrap();
    assert_eq!(record.id, Some(7));
    assert_eq!(record.peso_bruto, Some(TextOrNumber::Number(dec!(120.5))));
    assert_eq!(record.peso_neto, Some(TextOrNumber::Text("118.2".to_string())));
    assert_eq!(record.piezas, Some(TextOrNumber::Number(dec!(24))));
  }

  #[test]
  fn test_missing_fields_become_placeholders() {
    let record: ProductRecord = serde_json::from_str("{}").unwrap();
    let entry = ProductEntry::from_record(&record, None);
    assert_eq!(entry.area, MISSING_FIELD);
    assert_eq!(entry.peso_neto, MISSING_FIELD);
    assert_eq!(entry.piezas, MISSING_FIELD);
    assert_eq!(entry.imagen, FALLBACK_IMAGE);
  }

  #[test]
  fn test_empty_image_falls_back() {
    let record = ProductRecord::default();
    let entry = ProductEntry::from_record(&record, Some(String::new()));
    assert_eq!(entry.imagen, FALLBACK_IMAGE);

    let entry = ProductEntry::from_record(&record, Some("base64bytes".to_string()));
    assert_eq!(entry.imagen, "base64bytes");
  }

  #[test]
  fn test_prepend_keeps_existing_order() {
    let record: ProductRecord =
      serde_json::from_str(r#"{"nombreProducto": "first"}"#).unwrap();
    let mut entries = vec![ProductEntry::from_record(&record, None)];

    let record: ProductRecord =
      serde_json::from_str(r#"{"nombreProducto": "second"}"#).unwrap();
    prepend_entry(&mut entries, ProductEntry::from_record(&record, None));

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].nombre_producto, "second");
    assert_eq!(entries[1].nombre_producto, "first");
  }

  #[test]
  fn test_entry_body_wire_names() {
    let body = EntryBody {
      prod_etiqueta_rfid_id: 42,
      fecha_entrada: "2024-01-01T00:00:00Z".to_string(),
      antena: "EntradaPT".to_string(),
    };
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json["prodEtiquetaRFIDId"], 42);
    assert_eq!(json["fechaEntrada"], "2024-01-01T00:00:00Z");
    assert_eq!(json["antena"], "EntradaPT");
  }
}
