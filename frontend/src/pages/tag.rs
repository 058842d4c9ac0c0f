use ee9_shared::{Article, ArticleQuery, ContentStore, SortMode, TagSlug};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    components::{
        article_card::ArticleCard,
        breadcrumbs::{Breadcrumbs, Crumb},
        scroll_to_top_button::ScrollToTopButton,
    },
    hooks::use_scroll_to_top,
    pages::category::{article_count_label, sort_controls},
    router::Route,
};

#[derive(Properties, Clone, PartialEq)]
pub struct TagPageProps {
    pub slug: String,
}

#[function_component(TagPage)]
pub fn tag_page(props: &TagPageProps) -> Html {
    use_scroll_to_top();
    let sort = use_state(SortMode::default);
    let tag = TagSlug::from_url(&props.slug);
    let display_name = tag.display_name();

    let articles = use_memo((tag.clone(), *sort), |(tag, sort)| {
        ArticleQuery::new()
            .tag(tag.as_str())
            .sort(*sort)
            .apply(ContentStore::global().articles())
            .into_iter()
            .cloned()
            .collect::<Vec<Article>>()
    });

    let on_sort = {
        let sort = sort.clone();
        Callback::from(move |mode: SortMode| sort.set(mode))
    };

    html! {
        <main class="tag-page">
            <section class="relative pt-32 pb-12 md:pt-40">
                <div class="max-w-7xl mx-auto px-4 md:px-8">
                    <Breadcrumbs crumbs={vec![
                        Crumb::link("Home", Route::Home),
                        Crumb::text("Tags"),
                        Crumb::text(display_name.clone()),
                    ]} />
                    <div class="flex items-center gap-4 mb-4">
                        <div class="w-16 h-16 bg-brand-gold rounded-2xl flex items-center justify-center">
                            <i class="ri-price-tag-3-line text-3xl text-brand-black"></i>
                        </div>
                        <div>
                            <h1 class="font-bold text-4xl md:text-5xl italic text-white">{ &display_name }</h1>
                            <p class="text-brand-neutral mt-2">
                                { format!("{} {} tagged with {}", articles.len(), if articles.len() == 1 { "article" } else { "articles" }, display_name) }
                            </p>
                        </div>
                    </div>
                </div>
            </section>

            <section class="py-12 bg-brand-dark">
                <div class="max-w-7xl mx-auto px-4 md:px-8">
                    if articles.is_empty() {
                        <div class="text-center py-16">
                            <i class="ri-price-tag-3-line text-6xl text-brand-gold/40"></i>
                            <h2 class="font-bold text-2xl text-white mt-4 mb-2">{ "No Articles Found" }</h2>
                            <p class="text-brand-neutral mb-6">{ format!("There are no articles tagged with \"{}\" yet.", display_name) }</p>
                            <Link<Route> to={Route::Home} classes={classes!("btn-gold")}>{ "Back to Home" }</Link<Route>>
                        </div>
                    } else {
                        <div class="flex items-center justify-between mb-8">
                            <p class="text-brand-neutral">{ article_count_label(articles.len()) }</p>
                            { sort_controls(*sort, &on_sort) }
                        </div>
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                            { for articles.iter().map(|article| html! {
                                <ArticleCard article={article.clone()} max_tags={3} />
                            }) }
                        </div>
                    }
                </div>
            </section>
            <ScrollToTopButton />
        </main>
    }
}
