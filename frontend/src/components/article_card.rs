use ee9_shared::Article;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::router::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct ArticleCardProps {
    pub article: Article,
    /// Number of tags shown above the title.
    #[prop_or(2)]
    pub max_tags: usize,
}

#[function_component(ArticleCard)]
pub fn article_card(props: &ArticleCardProps) -> Html {
    let article = &props.article;
    let detail_route = Route::Post {
        slug: article.slug.clone(),
    };

    html! {
        <Link<Route> to={detail_route} classes={classes!("article-card", "block", "h-full")}>
            <article class="h-full rounded-xl border border-brand-gold/10 bg-brand-black overflow-hidden hover:border-brand-gold/40 transition-all duration-300">
                <div class="h-56 relative overflow-hidden">
                    <img
                        src={article.image_url.clone()}
                        alt={article.title.clone()}
                        loading="lazy"
                        class="w-full h-full object-cover"
                    />
                    <span class="absolute top-4 left-4 px-3 py-1 bg-brand-gold text-brand-black text-xs font-bold rounded-full">
                        { &article.category }
                    </span>
                </div>
                <div class="p-6">
                    <div class="flex flex-wrap gap-2 mb-3">
                        { for article.tags.iter().take(props.max_tags).map(|tag| html! {
                            <span class="px-2 py-1 bg-brand-gold/20 text-brand-gold text-xs font-semibold rounded">
                                { tag }
                            </span>
                        }) }
                    </div>
                    <h3 class="font-bold text-xl text-white mb-3 line-clamp-2">{ &article.title }</h3>
                    <p class="text-sm text-brand-neutral mb-4 line-clamp-2">{ &article.excerpt }</p>
                    <div class="flex items-center justify-between text-xs text-brand-neutral pt-4 border-t border-brand-gold/10">
                        <span>{ &article.author }</span>
                        <div class="flex items-center gap-3">
                            <span class="flex items-center gap-1">
                                <i class="ri-time-line" aria-hidden="true"></i>
                                { format!("{}m", article.reading_time) }
                            </span>
                            <span class="flex items-center gap-1">
                                <i class="ri-eye-line" aria-hidden="true"></i>
                                { article.views }
                            </span>
                        </div>
                    </div>
                </div>
            </article>
        </Link<Route>>
    }
}
