use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header data-zone="header" class="top-header">
            <a class="top-header__brand" href="#">
                {icon("heart")}
                <span>"Community Connect"</span>
            </a>
            <nav class="top-header__nav">
                <a href="#categories">"Categories"</a>
                <a href="#resources">"Resources"</a>
                <a href="#map-section">"Map"</a>
                <a href="#submit" class="button button--primary">
                    {icon("plus")}
                    "Add a Resource"
                </a>
            </nav>
        </header>
    }
}
