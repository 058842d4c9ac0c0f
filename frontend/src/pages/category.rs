use ee9_shared::{
    models::slugify_tag,
    query::{distinct_tags, filter_by_category},
    Article, ArticleQuery, ContentStore, SortMode,
};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    components::{
        article_card::ArticleCard,
        breadcrumbs::{Breadcrumbs, Crumb},
        scroll_to_top_button::ScrollToTopButton,
    },
    hooks::use_scroll_to_top,
    router::Route,
};

#[derive(Properties, Clone, PartialEq)]
pub struct CategoryPageProps {
    pub slug: String,
}

pub fn pill_classes(active: bool) -> Classes {
    classes!(
        "px-4",
        "py-2",
        "rounded-full",
        "text-sm",
        "transition-all",
        "duration-300",
        if active {
            "bg-brand-gold text-brand-black"
        } else {
            "bg-brand-black border border-brand-gold/30 text-brand-gold hover:bg-brand-gold/10"
        }
    )
}

/// Latest/Popular toggle shared by listing pages.
pub fn sort_controls(current: SortMode, on_sort: &Callback<SortMode>) -> Html {
    html! {
        <div class="flex items-center gap-2">
            <span class="text-sm text-brand-neutral">{ "Sort by:" }</span>
            { for [(SortMode::Latest, "Latest"), (SortMode::Popular, "Popular")].into_iter().map(|(mode, label)| {
                let on_sort = on_sort.clone();
                html! {
                    <button
                        class={pill_classes(current == mode)}
                        onclick={Callback::from(move |_: MouseEvent| on_sort.emit(mode))}
                    >
                        { label }
                    </button>
                }
            }) }
        </div>
    }
}

pub fn article_count_label(count: usize) -> String {
    format!("Showing {} {}", count, if count == 1 { "article" } else { "articles" })
}

#[function_component(CategoryPage)]
pub fn category_page(props: &CategoryPageProps) -> Html {
    use_scroll_to_top();
    let store = ContentStore::global();
    let sort = use_state(SortMode::default);
    let selected_tag = use_state(|| None::<String>);

    // A new category starts unfiltered.
    {
        let sort = sort.clone();
        let selected_tag = selected_tag.clone();
        use_effect_with(props.slug.clone(), move |_| {
            sort.set(SortMode::default());
            selected_tag.set(None);
            || ()
        });
    }

    let listing = use_memo(
        (props.slug.clone(), (*selected_tag).clone(), *sort),
        |(slug, tag, sort)| {
            let in_category = filter_by_category(store.articles(), slug);
            let tags = distinct_tags(in_category.iter().copied())
                .into_iter()
                .map(str::to_string)
                .collect::<Vec<_>>();
            let mut query = ArticleQuery::new().category(slug.as_str()).sort(*sort);
            if let Some(tag) = tag {
                query = query.tag(tag.as_str());
            }
            let sorted: Vec<Article> =
                query.apply(store.articles()).into_iter().cloned().collect();
            (in_category.len(), tags, sorted)
        },
    );

    let Some(category) = store.category_by_slug(&props.slug) else {
        return html! {
            <main class="min-h-screen flex items-center justify-center pt-32">
                <div class="text-center">
                    <h1 class="font-bold text-4xl mb-4">{ "Category Not Found" }</h1>
                    <Link<Route> to={Route::Home} classes={classes!("btn-gold")}>{ "Return Home" }</Link<Route>>
                </div>
            </main>
        };
    };
    let (total, tags, sorted) = &*listing;

    let on_sort = {
        let sort = sort.clone();
        Callback::from(move |mode: SortMode| sort.set(mode))
    };
    let select_tag = |tag: Option<String>| {
        let selected_tag = selected_tag.clone();
        Callback::from(move |_: MouseEvent| selected_tag.set(tag.clone()))
    };

    html! {
        <main class="category-page">
            <section class="relative pt-32 pb-16 md:pt-40 md:pb-24">
                <div class="max-w-7xl mx-auto px-4 md:px-8">
                    <Breadcrumbs crumbs={vec![
                        Crumb::link("Home", Route::Home),
                        Crumb::text("Categories"),
                        Crumb::text(category.name.clone()),
                    ]} />
                    <div class="flex items-center gap-4 mb-6">
                        <div class="w-20 h-20 bg-brand-gold rounded-2xl flex items-center justify-center">
                            <i class={classes!(category.icon.clone(), "text-4xl", "text-brand-black")}></i>
                        </div>
                        <div>
                            <h1 class="font-bold text-4xl md:text-6xl italic text-white">{ &category.name }</h1>
                            <p class="text-brand-neutral mt-2">{ format!("{} articles available", total) }</p>
                        </div>
                    </div>
                    <p class="text-lg text-white/80 max-w-4xl leading-relaxed">{ &category.long_description }</p>
                </div>
            </section>

            <section class="py-12 bg-brand-dark">
                <div class="max-w-7xl mx-auto px-4 md:px-8">
                    <div class="mb-8">
                        <h3 class="font-semibold text-lg text-white mb-4">{ "Filter by Topic" }</h3>
                        <div class="flex flex-wrap gap-2">
                            <button class={pill_classes(selected_tag.is_none())} onclick={select_tag(None)}>
                                { "All Topics" }
                            </button>
                            { for tags.iter().map(|tag| {
                                let slug = slugify_tag(tag);
                                let active = selected_tag.as_deref() == Some(slug.as_str());
                                html! {
                                    <button class={pill_classes(active)} onclick={select_tag(Some(slug))}>
                                        { tag }
                                    </button>
                                }
                            }) }
                        </div>
                    </div>

                    <div class="flex items-center justify-between mb-8">
                        <p class="text-brand-neutral">{ article_count_label(sorted.len()) }</p>
                        { sort_controls(*sort, &on_sort) }
                    </div>

                    if sorted.is_empty() {
                        <div class="text-center py-16">
                            <i class="ri-file-search-line text-6xl text-brand-gold/40"></i>
                            <p class="text-brand-neutral mt-4">{ "No articles found with the selected filter." }</p>
                        </div>
                    } else {
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                            { for sorted.iter().map(|article| html! {
                                <ArticleCard article={article.clone()} />
                            }) }
                        </div>
                    }
                </div>
            </section>
            <ScrollToTopButton />
        </main>
    }
}
