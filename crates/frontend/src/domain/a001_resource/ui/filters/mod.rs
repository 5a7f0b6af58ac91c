use crate::layout::global_context::DirectoryContext;
use contracts::enums::resource_category::{CategoryFilter, ResourceCategory};
use leptos::prelude::*;

/// Выпадающий список категорий над сеткой ресурсов
#[component]
#[allow(non_snake_case)]
pub fn CategoryFilterSelect() -> impl IntoView {
    let ctx = use_context::<DirectoryContext>().expect("DirectoryContext not found in context");

    let option = move |filter: CategoryFilter, label: &'static str| {
        view! {
            <option value=filter.code() prop:selected=move || ctx.category.get() == filter>
                {label}
            </option>
        }
    };

    view! {
        <div class="filter-bar">
            <label for="category-filter">"Filter by category"</label>
            <select
                id="category-filter"
                class="filter-bar__select"
                on:change=move |ev| ctx.select_category(&event_target_value(&ev))
            >
                {option(CategoryFilter::All, "All Categories")}
                {ResourceCategory::all()
                    .into_iter()
                    .map(|category| option(category.into(), category.display_name()))
                    .collect_view()}
            </select>
        </div>
    }
}
