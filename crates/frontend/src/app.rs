use crate::domain::a001_resource::ui::categories::CategoryShortcuts;
use crate::domain::a001_resource::ui::filters::CategoryFilterSelect;
use crate::domain::a001_resource::ui::grid::ResourceGrid;
use crate::domain::a001_resource::ui::map::ResourceMap;
use crate::domain::a001_resource::ui::search::HeroSearch;
use crate::domain::a002_resource_submission::ui::form::SubmissionFormView;
use crate::layout::global_context::DirectoryContext;
use crate::layout::Shell;
use crate::shared::config::DirectoryConfig;
use contracts::domain::a001_resource::ResourceStore;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = DirectoryConfig::default();
    let store = match ResourceStore::seeded() {
        Ok(store) => store,
        Err(e) => {
            log::error!("Resource store rejected seed data: {}", e);
            ResourceStore::default()
        }
    };
    log::info!("Directory started with {} resources", store.len());

    // Единственный контекст справочника: хранилище, фильтры, карта.
    let ctx = DirectoryContext::new(store, config);
    provide_context(ctx);
    ctx.init_router_integration();

    view! {
        <Shell>
            <HeroSearch />
            <CategoryShortcuts />

            <section id="resources" class="section">
                <div class="section__header">
                    <h2>"Available Resources"</h2>
                    <CategoryFilterSelect />
                </div>
                <ResourceGrid />
            </section>

            <ResourceMap />
            <SubmissionFormView />
        </Shell>
    }
}
