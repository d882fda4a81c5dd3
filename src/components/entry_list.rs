#![allow(non_snake_case)]

use dioxus::prelude::*;
use crate::utils::api::ProductEntry;

#[component]
pub fn EntryList(entries: Vec<ProductEntry>) -> Element {

  rsx! {
    div {
      class: "entry-list",
      for (idx, entry) in entries.iter().enumerate() {
        div {
          key: "entry-row{idx}",
          class: "entry-product",
          p { strong { "Área: " } span { "{entry.area}" } },
          p { strong { "Clave de Producto: " } span { "{entry.clave_producto}" } },
          p { strong { "Producto: " } span { "{entry.nombre_producto}" } },
          p { strong { "Peso Neto: " } span { "{entry.peso_neto}" } },
          p { strong { "Piezas: " } span { "{entry.piezas}" } },
          p { strong { "Unidad de Medida: " } span { "{entry.uom}" } },
        }
      }
    }
  }
}
