pub mod model;

use self::model::{GridContent, ResourceCard};
use crate::layout::global_context::DirectoryContext;
use crate::shared::icons::{icon, resource_icon};
use leptos::prelude::*;

/// Сетка карточек: полностью перестраивается при каждом новом результате
#[component]
#[allow(non_snake_case)]
pub fn ResourceGrid() -> impl IntoView {
    let ctx = use_context::<DirectoryContext>().expect("DirectoryContext not found in context");

    view! {
        <div id="resources-grid" class="resources-grid">
            {move || match GridContent::from_resources(&ctx.results.get()) {
                GridContent::Empty(message) => view! {
                    <p class="resources-grid__empty">{message}</p>
                }
                .into_any(),
                GridContent::Cards(cards) => cards
                    .into_iter()
                    .map(|card| view! { <ResourceCardView card=card /> })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn ResourceCardView(card: ResourceCard) -> impl IntoView {
    let ctx = use_context::<DirectoryContext>().expect("DirectoryContext not found in context");
    let id = card.id;
    let has_location = card.focus.is_some();

    view! {
        <div class="resource-card" data-resource-id=id.value().to_string()>
            <div class="resource-card__header">
                <span class="resource-card__category">{card.category}</span>
                <span class="resource-card__icon">{resource_icon(card.icon)}</span>
            </div>
            <div class="resource-card__body">
                <h3>{card.name}</h3>
                <div class="resource-card__detail">
                    {icon("location")}
                    <span>{card.address}</span>
                </div>
                <div class="resource-card__detail">
                    {icon("phone")}
                    <span>{card.phone}</span>
                </div>
                <p class="resource-card__desc">{card.desc}</p>
            </div>
            <div class="resource-card__footer">
                <button
                    class="button button--secondary"
                    disabled=!has_location
                    on:click=move |_| {
                        ctx.focus_resource(id);
                    }
                >
                    {icon("map")}
                    "View on Map"
                </button>
            </div>
        </div>
    }
}
