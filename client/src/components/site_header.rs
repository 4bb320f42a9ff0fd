//! Site header with the brand link and primary navigation.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="header">
            <div class="container">
                <A href="/">
                    <h1 class="logo">"Leasa"</h1>
                </A>
                <nav class="nav">
                    <ul>
                        <li>
                            <A href="/properties">"Properties"</A>
                        </li>
                        <li>
                            <A href="/add-property">"Add Property"</A>
                        </li>
                        <li>
                            <A href="/chat">"Chat with Agent"</A>
                        </li>
                    </ul>
                </nav>
            </div>
        </header>
    }
}
