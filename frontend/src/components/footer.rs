use ee9_shared::{query::distinct_tags, ContentStore, TagSlug};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{config, router::Route};

const FOOTER_TAG_COUNT: usize = 8;

fn link_column(title: &'static str, links: Vec<(&'static str, Route)>) -> Html {
    html! {
        <div>
            <h4 class="text-brand-gold font-bold text-lg mb-4">{ title }</h4>
            <ul class="space-y-2">
                { for links.into_iter().map(|(name, route)| html! {
                    <li>
                        <Link<Route> to={route} classes={classes!("text-white", "hover:text-brand-gold", "text-sm")}>
                            { name }
                        </Link<Route>>
                    </li>
                }) }
            </ul>
        </div>
    }
}

fn category(slug: &str) -> Route {
    Route::Category {
        slug: slug.to_string(),
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let current_year = js_sys::Date::new_0().get_full_year();
    let popular_tags = distinct_tags(ContentStore::global().articles())
        .into_iter()
        .take(FOOTER_TAG_COUNT)
        .map(|tag| (tag.to_string(), TagSlug::from_display(tag)))
        .collect::<Vec<_>>();

    html! {
        <footer class="bg-brand-dark border-t border-brand-gold/20">
            <div class="max-w-7xl mx-auto px-4 md:px-8 py-12 md:py-16">
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8 mb-12">
                    <div>
                        <img src={config::LOGO_URL} alt="EE9.com" class="h-10 mb-4" />
                        <p class="text-brand-neutral text-sm leading-relaxed">
                            { "Expert insights on pokies, sports betting, slots, and live casino games in Australia. Learn strategies and play responsibly." }
                        </p>
                    </div>
                    { link_column("Categories", vec![
                        ("Pokies", category("pokies")),
                        ("Sports Betting", category("sports")),
                        ("Slots", category("slots")),
                        ("Live Casino", category("live")),
                    ]) }
                    { link_column("Resources", vec![
                        ("Guides Hub", Route::Guides),
                        ("Glossary", Route::Glossary),
                        ("Tools", Route::Tools),
                        ("About Us", Route::About),
                    ]) }
                    { link_column("Legal & Support", vec![
                        ("Responsible Gambling", Route::ResponsibleGambling),
                        ("Editorial Policy", Route::EditorialPolicy),
                        ("Privacy Policy", Route::PrivacyPolicy),
                        ("Contact", Route::Contact),
                    ]) }
                </div>

                <div class="mb-8">
                    <h4 class="text-brand-gold font-bold text-lg mb-4">{ "Popular Tags" }</h4>
                    <div class="flex flex-wrap gap-2">
                        { for popular_tags.into_iter().map(|(name, slug)| html! {
                            <Link<Route>
                                to={Route::Tag { slug: slug.as_str().to_string() }}
                                classes={classes!("tag-pill")}
                            >
                                { name }
                            </Link<Route>>
                        }) }
                    </div>
                </div>

                <div class="border-t border-brand-gold/20 pt-8 flex flex-col md:flex-row justify-between gap-4 text-sm text-brand-neutral">
                    <p>{ format!("© {} EE9.com. All rights reserved. 18+ only.", current_year) }</p>
                    <p>
                        { "Gambling can be addictive. Need help? Call Gambling Help Online on " }
                        <a href="tel:1800858858" class="text-brand-gold">{ "1800 858 858" }</a>
                        { "." }
                    </p>
                </div>
            </div>
        </footer>
    }
}
