use yew::prelude::*;
use yew_router::prelude::*;

use crate::{config, hooks::use_scrolled_past, router::Route};

const NAV_LINKS: &[(&str, &str)] = &[
    ("Home", "/"),
    ("Pokies", "/category/pokies"),
    ("Sports", "/category/sports"),
    ("Slots", "/category/slots"),
    ("Live", "/category/live"),
    ("Guides", "/guides"),
    ("Glossary", "/glossary"),
    ("Tools", "/tools"),
];

fn nav_route(path: &str) -> Route {
    Route::recognize(path).unwrap_or(Route::NotFound)
}

#[function_component(Header)]
pub fn header() -> Html {
    let mobile_menu_open = use_state(|| false);
    let scrolled = use_scrolled_past(50.0);
    let location = use_location();
    let current_path = location
        .as_ref()
        .map(|loc| loc.path().to_string())
        .unwrap_or_default();

    // Navigating closes the mobile menu.
    {
        let mobile_menu_open = mobile_menu_open.clone();
        use_effect_with(current_path.clone(), move |_| {
            mobile_menu_open.set(false);
            || ()
        });
    }

    let toggle_mobile_menu = {
        let mobile_menu_open = mobile_menu_open.clone();
        Callback::from(move |_: MouseEvent| mobile_menu_open.set(!*mobile_menu_open))
    };

    let close_mobile_menu = {
        let mobile_menu_open = mobile_menu_open.clone();
        Callback::from(move |_: MouseEvent| mobile_menu_open.set(false))
    };

    let header_classes = classes!(
        "fixed",
        "top-0",
        "left-0",
        "right-0",
        "z-50",
        "transition-all",
        "duration-300",
        if scrolled {
            "bg-brand-black/95 backdrop-blur-md shadow-lg shadow-brand-gold/10"
        } else {
            "bg-brand-black/90 backdrop-blur-sm"
        }
    );

    let render_links = |mobile: bool| -> Html {
        html! {
            { for NAV_LINKS.iter().map(|(name, path)| {
                let active = current_path == *path;
                let link_classes = classes!(
                    "font-medium",
                    "transition-all",
                    "duration-300",
                    "hover:text-brand-gold",
                    mobile.then_some("py-2"),
                    if active { "text-brand-gold" } else { "text-white" }
                );
                html! {
                    <span onclick={close_mobile_menu.clone()}>
                        <Link<Route> to={nav_route(path)} classes={link_classes}>
                            { *name }
                        </Link<Route>>
                    </span>
                }
            }) }
        }
    };

    html! {
        <header class={header_classes}>
            <nav class="w-full px-4 md:px-8 py-4">
                <div class="flex items-center justify-between">
                    <Link<Route> to={Route::Home} classes={classes!("flex", "items-center")}>
                        <img src={config::LOGO_URL} alt="EE9.com Logo" class="h-10 md:h-12" />
                    </Link<Route>>

                    <div class="hidden lg:flex items-center gap-8">
                        { render_links(false) }
                    </div>

                    <div class="hidden lg:flex items-center gap-4">
                        <Link<Route> to={Route::About} classes={classes!("btn-outline")}>
                            { "About Us" }
                        </Link<Route>>
                        <a href={config::PLAY_SAFE_URL} target="_blank" rel="noopener noreferrer" class="btn-gold">
                            { "18+ Play Safe" }
                        </a>
                    </div>

                    <button
                        class="lg:hidden text-white text-2xl"
                        onclick={toggle_mobile_menu}
                        aria-label="Toggle navigation"
                        aria-expanded={(*mobile_menu_open).to_string()}
                    >
                        <i class={if *mobile_menu_open { "ri-close-line" } else { "ri-menu-line" }}></i>
                    </button>
                </div>

                {
                    if *mobile_menu_open {
                        html! {
                            <div class="lg:hidden mt-4 pb-4 border-t border-brand-gold/20 rounded-lg px-4">
                                <div class="flex flex-col gap-3 mt-4">
                                    { render_links(true) }
                                    <div class="border-t border-brand-gold/20 pt-3 mt-2 flex flex-col gap-3">
                                        <span onclick={close_mobile_menu.clone()}>
                                            <Link<Route> to={Route::About} classes={classes!("btn-outline", "w-full")}>
                                                { "About Us" }
                                            </Link<Route>>
                                        </span>
                                        <a
                                            href={config::PLAY_SAFE_URL}
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="btn-gold w-full"
                                            onclick={close_mobile_menu.clone()}
                                        >
                                            { "18+ Play Safe" }
                                        </a>
                                    </div>
                                </div>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </nav>
        </header>
    }
}
