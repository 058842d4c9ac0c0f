use ee9_shared::{
    query::{featured, latest, popular},
    ContentStore,
};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    components::{article_card::ArticleCard, scroll_to_top_button::ScrollToTopButton},
    hooks::use_scroll_to_top,
    router::Route,
};

const FEATURED_COUNT: usize = 3;
const LATEST_COUNT: usize = 6;
const POPULAR_COUNT: usize = 4;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    use_scroll_to_top();
    let store = ContentStore::global();
    let articles = store.articles();

    let newsletter_email = use_state(String::new);
    let newsletter_notice = use_state(|| false);

    let on_email_input = {
        let newsletter_email = newsletter_email.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                newsletter_email.set(target.value());
            }
        })
    };

    let on_newsletter_submit = {
        let newsletter_email = newsletter_email.clone();
        let newsletter_notice = newsletter_notice.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            newsletter_email.set(String::new());
            newsletter_notice.set(true);
        })
    };

    html! {
        <main class="home-page">
            <section class="relative min-h-screen flex items-center justify-center overflow-hidden hero-bg">
                <div class="relative z-10 max-w-7xl mx-auto px-4 md:px-8 py-32 text-center w-full">
                    <h1 class="font-extrabold text-5xl md:text-7xl italic mb-6 text-white leading-tight">
                        { "Master the Game" }
                        <span class="block text-brand-gold-light mt-2">{ "Win with Strategy" }</span>
                    </h1>
                    <p class="text-lg md:text-xl text-white/90 mb-8 max-w-3xl mx-auto leading-relaxed">
                        { "Expert insights on pokies, sports betting, slots, and live casino games in Australia. Learn proven strategies and play responsibly." }
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center items-center">
                        <Link<Route> to={Route::Guides} classes={classes!("btn-gold")}>{ "Explore Guides" }</Link<Route>>
                        <Link<Route> to={Route::Glossary} classes={classes!("btn-outline")}>{ "Gaming Glossary" }</Link<Route>>
                    </div>
                    <div class="mt-12 flex items-center justify-center gap-8 text-sm text-brand-neutral">
                        <span class="flex items-center gap-2">
                            <i class="ri-article-line text-brand-gold text-xl"></i>
                            { format!("{} Expert Articles", articles.len()) }
                        </span>
                        <span class="flex items-center gap-2">
                            <i class="ri-shield-check-line text-brand-gold text-xl"></i>
                            { "18+ Responsible Gaming" }
                        </span>
                    </div>
                </div>
            </section>

            <section class="py-16 bg-brand-dark">
                <div class="max-w-7xl mx-auto px-4 md:px-8">
                    <h2 class="font-bold text-3xl md:text-4xl italic text-white mb-2">{ "Featured Articles" }</h2>
                    <p class="text-brand-neutral mb-8">{ "Hand-picked guides from our editors" }</p>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                        { for featured(articles, FEATURED_COUNT).into_iter().map(|article| html! {
                            <ArticleCard article={article.clone()} />
                        }) }
                    </div>
                </div>
            </section>

            <section class="py-16">
                <div class="max-w-7xl mx-auto px-4 md:px-8">
                    <h2 class="font-bold text-3xl md:text-4xl italic text-white mb-4 text-center">{ "Explore Categories" }</h2>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                        { for store.categories().iter().map(|category| html! {
                            <Link<Route>
                                to={Route::Category { slug: category.slug.clone() }}
                                classes={classes!("block", "rounded-xl", "border", "border-brand-gold/20", "p-8", "hover:border-brand-gold")}
                            >
                                <i class={classes!(category.icon.clone(), "text-4xl", "text-brand-gold")}></i>
                                <h3 class="font-bold text-xl text-white mt-4 mb-3">{ &category.name }</h3>
                                <p class="text-sm text-brand-neutral">{ &category.description }</p>
                            </Link<Route>>
                        }) }
                    </div>
                </div>
            </section>

            <section class="py-16 bg-brand-dark">
                <div class="max-w-7xl mx-auto px-4 md:px-8">
                    <h2 class="font-bold text-3xl md:text-4xl italic text-white mb-8">{ "Latest Articles" }</h2>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                        { for latest(articles, LATEST_COUNT).into_iter().map(|article| html! {
                            <ArticleCard article={article.clone()} />
                        }) }
                    </div>
                </div>
            </section>

            <section class="py-16">
                <div class="max-w-7xl mx-auto px-4 md:px-8 grid grid-cols-1 lg:grid-cols-3 gap-8">
                    <div class="lg:col-span-2">
                        <h2 class="font-bold text-3xl md:text-4xl italic text-white mb-8">{ "Most Popular" }</h2>
                        <ol class="space-y-4">
                            { for popular(articles, POPULAR_COUNT).into_iter().enumerate().map(|(rank, article)| html! {
                                <li>
                                    <Link<Route>
                                        to={Route::Post { slug: article.slug.clone() }}
                                        classes={classes!("flex", "gap-6", "items-center", "rounded-xl", "border", "border-brand-gold/10", "p-4")}
                                    >
                                        <span class="text-4xl font-extrabold text-brand-gold">{ format!("{:02}", rank + 1) }</span>
                                        <div>
                                            <h3 class="font-bold text-lg text-white mb-2">{ &article.title }</h3>
                                            <p class="text-xs text-brand-neutral">
                                                { format!("{} · {} views", article.category, article.views) }
                                            </p>
                                        </div>
                                    </Link<Route>>
                                </li>
                            }) }
                        </ol>
                    </div>

                    <aside class="space-y-6">
                        <div class="rounded-xl border border-brand-gold/20 p-6">
                            <h3 class="font-bold text-2xl text-white mb-4 text-center">{ "Stay Updated" }</h3>
                            <p class="text-sm text-brand-neutral mb-6 text-center">
                                { "Get weekly insights, strategies, and exclusive tips delivered to your inbox." }
                            </p>
                            <form class="space-y-4" onsubmit={on_newsletter_submit}>
                                <input
                                    type="email"
                                    required=true
                                    placeholder="Your email address"
                                    value={(*newsletter_email).clone()}
                                    oninput={on_email_input}
                                    class="w-full px-4 py-3 bg-brand-black border border-brand-gold/30 rounded-lg text-white text-sm"
                                />
                                <button type="submit" class="btn-gold w-full">{ "Subscribe Now" }</button>
                            </form>
                            if *newsletter_notice {
                                <p class="text-xs text-brand-gold mt-4 text-center">
                                    { "Newsletter subscriptions are opening soon. Thanks for your interest!" }
                                </p>
                            } else {
                                <p class="text-xs text-brand-neutral mt-4 text-center">{ "No spam. Unsubscribe anytime." }</p>
                            }
                        </div>
                        <div class="rounded-xl border border-brand-gold/20 p-6">
                            <h4 class="font-bold text-lg text-white mb-2">{ "18+ Only" }</h4>
                            <p class="text-sm text-brand-neutral mb-4">
                                { "Gambling should be entertaining. Play responsibly and within your limits." }
                            </p>
                            <Link<Route> to={Route::ResponsibleGambling} classes={classes!("btn-outline", "w-full")}>
                                { "Learn More" }
                            </Link<Route>>
                        </div>
                    </aside>
                </div>
            </section>

            <section class="py-20 bg-brand-dark text-center">
                <h2 class="font-bold text-3xl md:text-5xl italic text-white mb-6">
                    { "Ready to Level Up Your " }
                    <span class="text-brand-gold">{ "Gaming Knowledge?" }</span>
                </h2>
                <p class="text-lg text-brand-neutral mb-8">
                    { "Access our complete library of guides, strategies, and tools designed for Australian players." }
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <Link<Route> to={Route::Guides} classes={classes!("btn-gold")}>{ "Browse All Guides" }</Link<Route>>
                    <Link<Route> to={Route::Tools} classes={classes!("btn-outline")}>{ "Try Our Tools" }</Link<Route>>
                </div>
            </section>
            <ScrollToTopButton />
        </main>
    }
}
