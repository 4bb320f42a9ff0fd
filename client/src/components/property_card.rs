//! Listing card for a single property.
//!
//! DESIGN
//! ======
//! Listing records may arrive with fields missing; the label helpers below
//! decide the placeholder text so the card never renders a blank.

#[cfg(test)]
#[path = "property_card_test.rs"]
mod property_card_test;

use leptos::prelude::*;

use crate::net::types::Property;
use crate::util::time::date_label;

fn text_or(value: Option<&str>, fallback: &str) -> String {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(fallback)
        .to_owned()
}

pub(crate) fn address_label(property: &Property) -> String {
    text_or(property.address.as_deref(), "No Address Provided")
}

pub(crate) fn description_label(property: &Property) -> String {
    text_or(property.description.as_deref(), "No description")
}

pub(crate) fn specifications_label(property: &Property) -> String {
    text_or(property.specifications.as_deref(), "N/A")
}

#[component]
pub fn PropertyCard(property: Property) -> impl IntoView {
    let address = address_label(&property);
    let description = description_label(&property);
    let specifications = specifications_label(&property);
    let id_text = format!("ID: {}", property.id);
    let added = format!("Added: {}", date_label(property.created_at.as_deref()));

    view! {
        <div class="property-card">
            <h3>{address}</h3>
            <p class="description">{description}</p>
            <div class="specifications">
                <h4>"Landlord Specifications:"</h4>
                <p>{specifications}</p>
            </div>
            <div class="property-footer">
                <span class="property-id">{id_text}</span>
                <span class="property-date">{added}</span>
            </div>
        </div>
    }
}
