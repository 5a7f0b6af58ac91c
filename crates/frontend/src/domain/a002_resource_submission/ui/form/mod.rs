pub mod view_model;

use self::view_model::SubmissionFormViewModel;
use crate::layout::global_context::DirectoryContext;
use crate::shared::icons::icon;
use contracts::enums::resource_category::ResourceCategory;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

/// Форма предложения ресурса. После отправки показывает сообщение
/// об успехе; в хранилище ничего не добавляется.
#[component]
#[allow(non_snake_case)]
pub fn SubmissionFormView() -> impl IntoView {
    let ctx = use_context::<DirectoryContext>().expect("DirectoryContext not found in context");
    let vm = SubmissionFormViewModel::new(ctx.config.with_value(|c| c.success_message_ms));
    let form = vm.form;
    let is_submitted = vm.is_submitted();
    let is_submitted_for_msg = vm.is_submitted();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit_command();
    };

    view! {
        <section id="submit" class="section section--narrow">
            <div class="section__header">
                <h2>"Submit a Resource"</h2>
                <p class="section__subtitle">
                    "Know an organization that should be listed? Tell us about it."
                </p>
            </div>

            <form
                id="resource-form"
                class="submit-form"
                class:hidden=is_submitted
                on:submit=on_submit
            >
                <label for="org-name">"Organization Name"</label>
                <input
                    id="org-name"
                    type="text"
                    required
                    prop:value=move || form.with(|f| f.org_name.clone())
                    on:input=move |ev| form.update(|f| f.org_name = event_target_value(&ev))
                />

                <label for="org-category">"Category"</label>
                <select
                    id="org-category"
                    required
                    on:change=move |ev| {
                        let code = event_target_value(&ev);
                        form.update(|f| f.category = ResourceCategory::from_code(&code));
                    }
                >
                    <option value="" prop:selected=move || form.with(|f| f.category.is_none())>
                        "Select a category"
                    </option>
                    {ResourceCategory::all()
                        .into_iter()
                        .map(|category| view! {
                            <option
                                value=category.code()
                                prop:selected=move || form.with(|f| f.category == Some(category))
                            >
                                {category.display_name()}
                            </option>
                        })
                        .collect_view()}
                </select>

                <label for="org-address">"Address"</label>
                <input
                    id="org-address"
                    type="text"
                    required
                    prop:value=move || form.with(|f| f.address.clone())
                    on:input=move |ev| form.update(|f| f.address = event_target_value(&ev))
                />

                <label for="org-phone">"Phone (optional)"</label>
                <input
                    id="org-phone"
                    type="tel"
                    prop:value=move || form.with(|f| f.phone.clone().unwrap_or_default())
                    on:input=move |ev| form.update(|f| f.phone = Some(event_target_value(&ev)))
                />

                <label for="org-email">"Contact Email"</label>
                <input
                    id="org-email"
                    type="email"
                    required
                    prop:value=move || form.with(|f| f.contact_email.clone())
                    on:input=move |ev| form.update(|f| f.contact_email = event_target_value(&ev))
                />

                <label for="org-desc">"Description of Services"</label>
                <textarea
                    id="org-desc"
                    rows="4"
                    required
                    prop:value=move || form.with(|f| f.description.clone())
                    on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                ></textarea>

                <button type="submit" class="button button--primary">
                    "Submit Resource"
                </button>
            </form>

            <div
                id="form-success-message"
                class="success-message"
                class:hidden=move || !is_submitted_for_msg()
            >
                {icon("check")}
                <h3>"Thank you!"</h3>
                <p>"Your resource has been submitted for review. Our team will verify it shortly."</p>
            </div>
        </section>
    }
}
