use crate::layout::global_context::DirectoryContext;
use crate::shared::map::LeafletMapContext;
use leptos::html::Div;
use leptos::prelude::*;

/// Секция с картой. Карта создаётся один раз после монтирования контейнера,
/// далее маркеры перерисовываются при каждом новом результате фильтра.
#[component]
#[allow(non_snake_case)]
pub fn ResourceMap() -> impl IntoView {
    let ctx = use_context::<DirectoryContext>().expect("DirectoryContext not found in context");
    let container = NodeRef::<Div>::new();

    Effect::new(move |_| {
        let Some(element) = container.get() else {
            return;
        };
        let results = ctx.results.get();

        if !ctx.map.is_ready() {
            let config = ctx.config.with_value(|c| c.map.clone());
            match LeafletMapContext::init(&element, &config) {
                Ok(map) => {
                    ctx.map.install(map);
                    log::info!("Map initialized");

                    // Контейнер получает размеры после первичной вёрстки
                    let handle = ctx.map;
                    leptos::task::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(config.invalidate_delay_ms).await;
                        handle.invalidate_size();
                    });
                }
                Err(e) => {
                    log::error!("Map initialization failed (is leaflet.js loaded?): {:?}", e);
                    return;
                }
            }
        }

        let placed = ctx.map.render(&results);
        log::debug!("Rendered {} marker(s) for {} resource(s)", placed, results.len());
    });

    view! {
        <section id="map-section" class="section">
            <div class="section__header">
                <h2>"Resource Map"</h2>
                <p class="section__subtitle">"Click a pin for details, or use \"View on Map\" on any card."</p>
            </div>
            <div id="map" class="map-container" node_ref=container></div>
        </section>
    }
}
