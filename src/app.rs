/// Application root for ProdVote.
/// Provides the store, restores the browser session and routes between the screens.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use crate::screens::{cart_screen::CartScreen, home_screen::HomeScreen, product_screen::ProductScreen};
use crate::store::provide_store;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let store = provide_store();

    // Effects only run in the browser, where the session lives.
    create_effect(move |_| store.restore_session());

    view! {
        <Stylesheet id="leptos" href="/pkg/prodvote.css" />
        <Title text="ProdVote" />
        <Router>
            <main class="container py-3">
                <Routes>
                    <Route path="/" view=HomeScreen />
                    <Route path="/product/:id" view=ProductScreen />
                    <Route path="/cart/:id" view=CartScreen />
                </Routes>
            </main>
        </Router>
    }
}
