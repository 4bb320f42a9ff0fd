//! Property listing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches the full collection once when mounted. There is no polling and no
//! pagination; navigating back to the route fetches again.

use leptos::prelude::*;

use crate::components::property_card::PropertyCard;
use crate::state::properties::PropertyListState;

#[component]
pub fn PropertiesPage() -> impl IntoView {
    let listing = RwSignal::new(PropertyListState::Loading);

    #[cfg(feature = "hydrate")]
    {
        let config = expect_context::<crate::config::ClientConfig>();
        leptos::task::spawn_local_scoped_with_cancellation(async move {
            let result = crate::net::api::list_properties(&config).await;
            listing.set(PropertyListState::from_fetch(result));
        });
    }

    view! {
        {move || match listing.get() {
            PropertyListState::Loading => {
                view! { <div class="loading">"Loading properties..."</div> }.into_any()
            }
            PropertyListState::Error(message) => view! { <div class="error">{message}</div> }.into_any(),
            PropertyListState::Empty => {
                view! {
                    <div class="no-properties">
                        <h2>"No properties available"</h2>
                        <p>"Be the first to add a property!"</p>
                    </div>
                }
                    .into_any()
            }
            PropertyListState::Populated(items) => {
                view! {
                    <div class="property-list">
                        <h2>"Available Properties"</h2>
                        <div class="properties-grid">
                            {items
                                .into_iter()
                                .map(|property| view! { <PropertyCard property=property /> })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>
                }
                    .into_any()
            }
        }}
    }
}
