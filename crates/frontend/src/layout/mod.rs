pub mod footer;
pub mod global_context;
pub mod header;

use leptos::prelude::*;

/// Каркас страницы.
///
/// ```text
/// +------------------------------------------+
/// |                 Header                    |
/// +------------------------------------------+
/// |   hero / categories / resources / map /   |
/// |              submit a resource            |
/// +------------------------------------------+
/// |                 Footer                    |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Header />
            <main class="app-main">
                {children()}
            </main>
            <footer::Footer />
        </div>
    }
}
