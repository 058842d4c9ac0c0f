use ee9_shared::{render_metadata, routes::Page, ContentStore};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::{footer::Footer, header::Header},
    config, pages, seo,
};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/category/:slug")]
    Category { slug: String },
    #[at("/tag/:slug")]
    Tag { slug: String },
    #[at("/post/:slug")]
    Post { slug: String },
    #[at("/guides")]
    Guides,
    #[at("/glossary")]
    Glossary,
    #[at("/tools")]
    Tools,
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
    #[at("/responsible-gambling")]
    ResponsibleGambling,
    #[at("/editorial-policy")]
    EditorialPolicy,
    #[at("/privacy-policy")]
    PrivacyPolicy,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<&Route> for Page {
    fn from(route: &Route) -> Self {
        match route {
            Route::Home => Page::Home,
            Route::Category {
                slug,
            } => Page::Category {
                slug: slug.clone(),
            },
            Route::Tag {
                slug,
            } => Page::Tag {
                slug: slug.clone(),
            },
            Route::Post {
                slug,
            } => Page::Post {
                slug: slug.clone(),
            },
            Route::Guides => Page::Guides,
            Route::Glossary => Page::Glossary,
            Route::Tools => Page::Tools,
            Route::About => Page::About,
            Route::Contact => Page::Contact,
            Route::ResponsibleGambling => Page::ResponsibleGambling,
            Route::EditorialPolicy => Page::EditorialPolicy,
            Route::PrivacyPolicy => Page::PrivacyPolicy,
            Route::NotFound => Page::NotFound,
        }
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <pages::home::HomePage /> },
        Route::Category {
            slug,
        } => {
            html! { <pages::category::CategoryPage slug={slug} /> }
        },
        Route::Tag {
            slug,
        } => {
            html! { <pages::tag::TagPage slug={slug} /> }
        },
        Route::Post {
            slug,
        } => {
            html! { <pages::post::PostPage slug={slug} /> }
        },
        Route::Guides => html! { <pages::guides::GuidesPage /> },
        Route::Glossary => html! { <pages::glossary::GlossaryPage /> },
        Route::Tools => html! { <pages::tools::ToolsPage /> },
        Route::About => html! { <pages::about::AboutPage /> },
        Route::Contact => html! { <pages::contact::ContactPage /> },
        Route::ResponsibleGambling => {
            html! { <pages::responsible_gambling::ResponsibleGamblingPage /> }
        },
        Route::EditorialPolicy => html! { <pages::editorial_policy::EditorialPolicyPage /> },
        Route::PrivacyPolicy => html! { <pages::privacy_policy::PrivacyPolicyPage /> },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

/// Keeps the document head in sync with the active route.
#[function_component(RouteMetadata)]
fn route_metadata() -> Html {
    let route = use_route::<Route>().unwrap_or(Route::NotFound);

    use_effect_with(route, |route| {
        let page = Page::from(route);
        let metadata = render_metadata(&page, ContentStore::global(), &config::site_config());
        seo::apply_metadata(&metadata);
        || ()
    });

    html! {}
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <RouteMetadata />
            <div class="flex flex-col min-h-screen bg-brand-black text-white">
                <Header />
                <div class="flex-1">
                    <Switch<Route> render={switch} />
                </div>
                <Footer />
            </div>
        </BrowserRouter>
    }
}
