use leptos::prelude::*;

mod deck;
mod neural;
mod range_field;

use deck::ProjectDeck;

pub fn start() {
    mount_to_body(|| view! { <App /> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <div style="font-family: system-ui, -apple-system, Segoe UI, Roboto, sans-serif;">
            <ProjectDeck />
        </div>
    }
}
