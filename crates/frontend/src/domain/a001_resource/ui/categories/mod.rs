use crate::layout::global_context::DirectoryContext;
use crate::shared::icons::resource_icon;
use contracts::enums::resource_category::ResourceCategory;
use leptos::prelude::*;

/// Карточки-ярлыки категорий
#[component]
#[allow(non_snake_case)]
pub fn CategoryShortcuts() -> impl IntoView {
    let ctx = use_context::<DirectoryContext>().expect("DirectoryContext not found in context");

    view! {
        <section id="categories" class="section">
            <div class="section__header">
                <h2>"Browse by Category"</h2>
            </div>
            <div class="category-grid">
                {ResourceCategory::all()
                    .into_iter()
                    .map(|category| view! {
                        <button
                            type="button"
                            class="category-card"
                            data-category=category.code()
                            on:click=move |_| ctx.pick_category(category)
                        >
                            <span class="category-card__icon">{resource_icon(category.default_icon())}</span>
                            <h3>{category.display_name()}</h3>
                            <p>{category.tagline()}</p>
                        </button>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
