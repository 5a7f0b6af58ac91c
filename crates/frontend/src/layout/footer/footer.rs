use crate::layout::global_context::DirectoryContext;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_context::<DirectoryContext>().expect("DirectoryContext not found in context");
    let total = ctx.store.with_value(|store| store.len());

    view! {
        <footer data-zone="footer" class="status-bar">
            <span>
                {move || format!("Showing {} of {} resources", ctx.results.with(|r| r.len()), total)}
            </span>
            <span class="status-bar__note">
                "Listings are provided for information only. Call ahead to confirm hours."
            </span>
        </footer>
    }
}
