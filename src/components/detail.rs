#![allow(non_snake_case)]

use dioxus::prelude::*;
use crate::utils::api::ProductEntry;

#[component]
pub fn DetailPanel(entry: ProductEntry) -> Element {

  rsx! {
    div {
      class: "product-image",
      img { src: "{entry.imagen}", alt: "Imagen del producto" }
    },
    div {
      class: "product-details",
      h1 { "Detalles del Producto" },
      div {
        class: "detail-row",
        p { strong { "Área: " } span { "{entry.area}" } },
        p { strong { "Fecha: " } span { "{entry.fecha}" } },
      },
      div {
        p { strong { "Clave de Producto: " } span { "{entry.clave_producto}" } },
        p { strong { "Producto: " } span { "{entry.nombre_producto}" } },
      },
      div {
        class: "detail-row",
        p { strong { "Peso Bruto: " } span { "{entry.peso_bruto}" } },
        p { strong { "Peso Neto: " } span { "{entry.peso_neto}" } },
      },
      div {
        class: "detail-row",
        p { strong { "Piezas: " } span { "{entry.piezas}" } },
        p { strong { "Peso Tarima: " } span { "{entry.peso_tarima}" } },
      },
      div {
        p { strong { "Fecha de Entrada: " } span { "{entry.fecha_entrada}" } },
        p { strong { "Unidad de Medida: " } span { "{entry.uom}" } },
      },
      p { strong { "PrintCard: " } span { "{entry.product_print_card}" } },
    }
  }
}
