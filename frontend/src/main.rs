//! EE9.com single-page site.

mod components;
mod config;
/// Scroll hooks shared by pages and the layout.
pub mod hooks;
mod pages;
mod router;
mod seo;

use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <router::AppRouter />
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
