//! Panel of properties the agent recommended for the latest turn.

#[cfg(test)]
#[path = "recommendation_panel_test.rs"]
mod recommendation_panel_test;

use leptos::prelude::*;

use crate::net::types::PropertyRecommendation;

/// Monthly-rent style price label, e.g. `$1,250`.
pub(crate) fn price_label(price: f64) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let whole = price.round() as i64;
    let digits = whole.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if whole < 0 { "-" } else { "" };
    format!("{sign}${grouped}")
}

/// Renders nothing when `recommendations` is empty.
#[component]
pub fn RecommendationPanel(#[prop(into)] recommendations: Signal<Vec<PropertyRecommendation>>) -> impl IntoView {
    view! {
        <Show when=move || !recommendations.get().is_empty()>
            <div class="recommended-properties">
                <h3>"Recommended Properties"</h3>
                <div class="properties-list">
                    <For
                        each=move || recommendations.get()
                        key=|rec| rec.id.clone()
                        children=|rec| {
                            view! {
                                <div class="property-item">
                                    <h4>{rec.address}</h4>
                                    <p>{rec.description}</p>
                                    {rec.price.map(|price| view! { <p class="property-price">{price_label(price)}</p> })}
                                    {rec
                                        .specifications
                                        .map(|spec| view! { <p class="property-specifications">{spec}</p> })}
                                </div>
                            }
                        }
                    />
                </div>
            </div>
        </Show>
    }
}
