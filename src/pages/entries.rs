use dioxus::{logger::tracing::{error, info}, prelude::*};
use futures::stream::SplitSink;
use futures_util::StreamExt;
use gloo_net::websocket::{futures::WebSocket, Message};
use serde_json::Value;
use uuid::Uuid;

use crate::{
    components::{detail::DetailPanel, entry_list::EntryList, status::StatusChip},
    utils::{
        api::{prepend_entry, ApiClient, ProductEntry},
        config::AppConfig,
        hub::{self, HubState},
        processor::read_device,
    },
};

// Label status stamped on every tag read at the door (2 = recibido en almacén).
const ENTRY_STATUS: i32 = 2;

#[component]
pub fn Entries() -> Element {

    let cfg = use_context_provider(AppConfig::from_env);
    let connection_id = use_hook(|| Uuid::new_v4().to_string());

    let mut entries: Signal<Vec<ProductEntry>> = use_signal(Vec::new);
    let mut hub_sink: Signal<Option<SplitSink<WebSocket, Message>>> = use_signal(|| None);
    let mut hub_state: Signal<HubState> = use_signal(|| HubState::Connecting);
    // Side-effect tasks still in the air, cancelled when the page goes away.
    let mut inflight: Signal<Vec<Task>> = use_signal(Vec::new);

    // Every hub payload lands in this channel; per reading, the three
    // downstream calls are fired as independent tasks and never awaited
    // against each other.
    let processor = use_coroutine({
        let cfg = cfg.clone();
        move |mut rx: UnboundedReceiver<Value>| {
            let api = ApiClient::new(cfg.api_base.clone());
            let group = cfg.group.clone();

            async move {
                while let Some(payload) = rx.next().await {
                    let Some(reading) = read_device(&payload) else { continue };
                    info!(
                        "tag {} read on antenna {} (rssi {}, first seen {}, last seen {}, reader {})",
                        reading.tag,
                        reading.antenna.as_deref().unwrap_or("?"),
                        reading.rssi.as_deref().unwrap_or("?"),
                        reading.first_seen.as_deref().unwrap_or("?"),
                        reading.last_seen.as_deref().unwrap_or("?"),
                        reading.reader_ip.as_deref().unwrap_or("?"),
                    );

                    let load = spawn({
                        let api = api.clone();
                        let tag = reading.tag.clone();
                        async move {
                            if let Some(entry) = api.load_entry(&tag).await {
                                prepend_entry(&mut entries.write(), entry);
                            }
                        }
                    });

                    let status = spawn({
                        let api = api.clone();
                        let tag = reading.tag.clone();
                        async move {
                            api.update_status(&tag, ENTRY_STATUS).await;
                        }
                    });

                    let history = spawn({
                        let api = api.clone();
                        let tag = reading.tag.clone();
                        let antena = group.clone();
                        async move {
                            let entered_at = js_sys::Date::new_0()
                                .to_iso_string()
                                .as_string()
                                .unwrap_or_default();
                            api.record_entry(&tag, &antena, entered_at).await;
                        }
                    });

                    inflight.write().extend([load, status, history]);
                }
            }
        }
    });

    // The subscriber task lives exactly as long as the page.
    use_hook({
        let cfg = cfg.clone();
        let connection_id = connection_id.clone();
        move || {
            spawn(async move {
                if let Err(e) =
                    hub::subscribe(cfg, connection_id, hub_sink, hub_state, processor).await
                {
                    error!("{}", e);
                    hub_state.set(HubState::Disconnected);
                }
            });
        }
    });

    // Unmount: drop whatever is in flight, then leave the group (only if we
    // ever joined) and stop the connection, on a task that outlives the page.
    use_drop({
        let group = cfg.group.clone();
        let connection_id = connection_id.clone();
        move || {
            for task in inflight.write().drain(..) {
                task.cancel();
            }
            let steps = hub::teardown_steps(&hub_state.peek());
            let sink = hub_sink.write().take();
            spawn_forever(hub::shutdown(sink, steps, group, connection_id));
        }
    });

    static CSS: Asset = asset!("/assets/entries.css");

    rsx! {
        document::Stylesheet { href: CSS },
        div {
            class: "outer-container",
            div {
                class: "product-list-container",
                div {
                    class: "entry-title",
                    h2 { "Entradas" },
                    StatusChip { state: hub_state() }
                },
                EntryList { entries: entries() }
            },
            div {
                class: "container",
                if !entries().is_empty() {
                    DetailPanel { entry: entries()[0].clone() }
                }
            }
        }
    }
}
