//! Landing page with calls to action for tenants and landlords.

use leptos::prelude::*;
use leptos_router::components::A;

const FEATURES: [(&str, &str); 4] = [
    (
        "Smart Property Matching",
        "Our AI analyzes your requirements and matches you with properties that meet your needs and the landlord's specifications.",
    ),
    (
        "Conversational Interface",
        "Chat naturally with our AI agent to describe what you're looking for, ask questions, and get personalized recommendations.",
    ),
    (
        "For Landlords",
        "List your properties with detailed specifications to find the perfect tenants who meet your requirements.",
    ),
    (
        "For Tenants",
        "Describe your ideal property and let our AI find the best matches for you, saving time and effort in your property search.",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-container">
            <div class="hero-section">
                <h1>"Welcome to Leasa"</h1>
                <h2>"Your AI-Powered Real Estate Assistant"</h2>
                <p>
                    "Finding the perfect property has never been easier. Leasa matches tenants with "
                    "properties that meet both their requirements and landlord preferences."
                </p>
                <div class="cta-buttons">
                    <A href="/chat" attr:class="cta-button primary">
                        "Chat with Leasa"
                    </A>
                </div>
            </div>

            <div class="features-section">
                <h2>"How Leasa Works"</h2>
                <div class="features-grid">
                    {FEATURES
                        .iter()
                        .map(|(title, body)| {
                            view! {
                                <div class="feature-card">
                                    <h3>{*title}</h3>
                                    <p>{*body}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>

            <div class="get-started-section">
                <h2>"Get Started Today"</h2>
                <p>
                    "Whether you're a landlord looking to list your property or a tenant searching for "
                    "your next home, Leasa is here to help."
                </p>
                <div class="cta-buttons">
                    <A href="/add-property" attr:class="cta-button primary">
                        "Add Your Property"
                    </A>
                    <A href="/chat" attr:class="cta-button secondary">
                        "Start Searching"
                    </A>
                </div>
            </div>
        </div>
    }
}
