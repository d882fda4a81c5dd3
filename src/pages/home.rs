use dioxus::prelude::*;
use crate::Route;

#[component]
pub fn Home() -> Element {
  static CSS: Asset = asset!("assets/home.css");
  rsx! {
    document::Stylesheet {href: CSS},
    div {
      class: "home-page",
      section {
        class : "hero",
        h1 { "Tablero de Entradas de Almacén" },
        p { "Monitorea en tiempo real las etiquetas RFID leídas en la puerta de entrada. Cada lectura trae su registro de producto, imagen de etiqueta y queda asentada en el historial de entradas." },
        Link {
          class: "cta-button",
          to: Route::Entries { },
          "Abrir Tablero"
        }
      },
      section {
        class: "features",
        div {
          class: "feature-card",
          h3 {
            class: "feature-card-title",
            span {"📡"}
            "Lecturas en Vivo"
          }
          p { "El tablero se suscribe al hub de mensajes y muestra cada etiqueta leída al instante, con el producto más reciente siempre al frente de la lista." }
        },
        div {
          class: "feature-card",
          h3 {
            class: "feature-card-title",
            span {"📦"}
            "Ficha de Producto" }
          p { "Por cada lectura se consulta el registro del producto: pesos, piezas, unidad de medida y la imagen de su tarjeta de impresión." }
        },
        div {
          class: "feature-card",
          h3 {
            class: "feature-card-title",
            span {"🗂️"}
            "Historial de Entradas"
          }
          p { "Cada entrada actualiza el estado de la etiqueta y deja un renglón en el historial con fecha y antena, sin interrumpir la operación." }
        }
      }
    }
  }
}
