//! Add-property form page.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::state::property_form::{DraftField, PropertyFormState};

#[component]
pub fn AddPropertyPage() -> impl IntoView {
    let config = StoredValue::new(expect_context::<ClientConfig>());
    let form = RwSignal::new(PropertyFormState::default());
    let navigate = use_navigate();
    #[cfg(feature = "hydrate")]
    let page = StoredValue::new(Owner::current().unwrap_or_default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut payload = None;
        form.update(|f| payload = f.begin_submit());
        let Some(payload) = payload else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let config = config.get_value();
            let navigate = navigate.clone();
            // Dropped with the page, so leaving mid-request never navigates.
            let task = async move {
                match crate::net::api::create_property(&config, &payload).await {
                    Ok(_) => {
                        form.update(PropertyFormState::submit_succeeded);
                        navigate("/properties", NavigateOptions::default());
                    }
                    Err(_) => form.update(PropertyFormState::submit_failed),
                }
            };
            super::spawn_on_page(page, task);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (payload, config, &navigate);
        }
    };

    let busy = move || form.with(|f| f.submitting);
    let value = move |field: DraftField| form.with(|f| f.draft.get(field).to_owned());
    let set_value = move |field: DraftField, ev: leptos::ev::Event| {
        form.update(|f| f.draft.set(field, event_target_value(&ev)));
    };

    view! {
        <div class="property-form-container">
            <h2>"Add New Property"</h2>

            <Show when=move || form.with(|f| f.error.is_some())>
                <div class="error">{move || form.with(|f| f.error.clone().unwrap_or_default())}</div>
            </Show>

            <form class="property-form" on:submit=on_submit>
                <div class="form-group">
                    <label for="address">"Property Address"</label>
                    <input
                        type="text"
                        id="address"
                        name="address"
                        placeholder="123 Main St, City, State, ZIP"
                        disabled=busy
                        prop:value=move || value(DraftField::Address)
                        on:input=move |ev| set_value(DraftField::Address, ev)
                    />
                </div>

                <div class="form-group">
                    <label for="description">"Property Description"</label>
                    <textarea
                        id="description"
                        name="description"
                        rows="4"
                        placeholder="Describe the property (size, rooms, amenities, etc.)"
                        disabled=busy
                        prop:value=move || value(DraftField::Description)
                        on:input=move |ev| set_value(DraftField::Description, ev)
                    ></textarea>
                </div>

                <div class="form-group">
                    <label for="specifications">"Landlord Specifications"</label>
                    <textarea
                        id="specifications"
                        name="specifications"
                        rows="4"
                        placeholder="Specify tenant requirements (e.g., no pets, minimum income, etc.)"
                        disabled=busy
                        prop:value=move || value(DraftField::Specifications)
                        on:input=move |ev| set_value(DraftField::Specifications, ev)
                    ></textarea>
                </div>

                <button type="submit" class="submit-button" disabled=busy>
                    {move || if busy() { "Adding Property..." } else { "Add Property" }}
                </button>
            </form>
        </div>
    }
}
