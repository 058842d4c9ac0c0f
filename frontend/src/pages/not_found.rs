use yew::prelude::*;
use yew_router::prelude::*;

use crate::{hooks::use_scroll_to_top, router::Route};

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    use_scroll_to_top();

    html! {
        <main class="min-h-[60vh] flex items-center justify-center px-4 pt-32 pb-16">
            <div class="text-center">
                <p class="font-bold text-7xl md:text-9xl text-brand-gold">{ "404" }</p>
                <h1 class="font-bold text-3xl md:text-4xl text-white mt-4 mb-4">{ "Page Not Found" }</h1>
                <p class="text-brand-neutral mb-8">
                    { "The page you are looking for doesn't exist or has been moved." }
                </p>
                <div class="flex flex-wrap justify-center gap-4">
                    <Link<Route> to={Route::Home} classes={classes!("btn-gold")}>{ "Return Home" }</Link<Route>>
                    <Link<Route> to={Route::Guides} classes={classes!("btn-outline")}>{ "Browse Guides" }</Link<Route>>
                </div>
            </div>
        </main>
    }
}
