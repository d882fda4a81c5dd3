#![allow(non_snake_case)]

use dioxus::prelude::*;
use crate::Route;

#[component]
pub fn NavBar() -> Element {
  static CSS: Asset = asset!("/assets/main.css");

  rsx! {
    document::Stylesheet { href: CSS },
    header {
      class: "navbar",
      Link {
        class: "navbar-brand",
        to: Route::Home {},
        "Almacén RFID"
      },
      nav {
        class: "navbar-links",
        Link { to: Route::Home {}, "Inicio" },
        Link { to: Route::Entries {}, "Entradas" }
      }
    },
    Outlet::<Route> {}
  }
}
