use crate::layout::global_context::DirectoryContext;
use crate::shared::icons::icon;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

/// Первый экран со строкой поиска
#[component]
#[allow(non_snake_case)]
pub fn HeroSearch() -> impl IntoView {
    let ctx = use_context::<DirectoryContext>().expect("DirectoryContext not found in context");

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        ctx.submit_search();
    };

    view! {
        <section class="hero">
            <h1>"Find help in your community"</h1>
            <p class="hero__subtitle">
                "Food, shelter, health care and education resources near you."
            </p>
            <form id="search-form" class="search-form" on:submit=on_submit>
                <input
                    id="search-input"
                    type="search"
                    placeholder="Search by name, service or neighborhood..."
                    prop:value=move || ctx.search_text.get()
                    on:input=move |ev| ctx.search_text.set(event_target_value(&ev))
                />
                <button type="submit" class="button button--primary">
                    {icon("search")}
                    "Search"
                </button>
            </form>
        </section>
    }
}
