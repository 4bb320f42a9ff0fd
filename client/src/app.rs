//! Root application component with routing and the SSR shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::site_header::SiteHeader;
use crate::config::{API_URL_META_NAME, ClientConfig};
use crate::pages::{
    add_property::AddPropertyPage, chat::ChatPage, home::HomePage, properties::PropertiesPage,
};

/// HTML shell rendered on the server for SSR + hydration.
///
/// The backend base URL comes from context provided by the host and is
/// written into a `<meta>` tag for the hydrated client to pick up.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let api_url = use_context::<ClientConfig>().unwrap_or_default().api_base_url().to_owned();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_URL_META_NAME content=api_url/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Views keep their own state; the only shared context is the backend config.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = use_context::<ClientConfig>().unwrap_or_else(ClientConfig::detect);
    provide_context(config);

    view! {
        <Title text="Leasa - AI Real Estate Agent"/>

        <Router>
            <div class="app">
                <SiteHeader/>
                <main class="main-content">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("properties") view=PropertiesPage/>
                        <Route path=StaticSegment("add-property") view=AddPropertyPage/>
                        <Route path=StaticSegment("chat") view=ChatPage/>
                    </Routes>
                </main>
                <footer class="footer">
                    <p>"© Leasa - AI Real Estate Agent"</p>
                </footer>
            </div>
        </Router>
    }
}
