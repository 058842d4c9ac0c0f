use ee9_shared::{
    glossary::{filter_glossary, glossary_categories, group_by_letter, search_param},
    ContentStore, GlossaryTerm,
};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::use_location;

use crate::{
    components::scroll_to_top_button::ScrollToTopButton, hooks::use_scroll_to_top,
    pages::category::pill_classes,
};

fn term_card(term: &GlossaryTerm, on_related: &Callback<String>) -> Html {
    html! {
        <div class="rounded-xl border border-brand-gold/20 bg-brand-black p-6">
            <div class="flex items-start justify-between gap-4 mb-3">
                <div>
                    <h3 class="font-bold text-xl text-brand-gold">{ &term.term }</h3>
                    if let Some(full_name) = term.full_name.as_ref() {
                        <p class="text-sm text-brand-neutral">{ full_name }</p>
                    }
                </div>
                <span class="px-3 py-1 bg-brand-gold/10 text-brand-gold text-xs rounded-full whitespace-nowrap">
                    { &term.category }
                </span>
            </div>
            <p class="text-white/90 leading-relaxed">{ &term.definition }</p>
            if !term.related_terms.is_empty() {
                <div class="mt-4 flex flex-wrap items-center gap-2 text-sm">
                    <span class="text-brand-neutral">{ "Related Terms:" }</span>
                    { for term.related_terms.iter().map(|related| {
                        let on_related = on_related.clone();
                        let value = related.clone();
                        html! {
                            <button
                                class="text-brand-gold hover:underline"
                                onclick={Callback::from(move |_: MouseEvent| on_related.emit(value.clone()))}
                            >
                                { related }
                            </button>
                        }
                    }) }
                </div>
            }
        </div>
    }
}

#[function_component(GlossaryPage)]
pub fn glossary_page() -> Html {
    use_scroll_to_top();
    let terms = ContentStore::global().glossary();
    let requested = use_location()
        .and_then(|location| search_param(location.query_str()))
        .unwrap_or_default();
    let search = use_state(|| requested.clone());
    let category = use_state(|| None::<String>);

    // Following a `?q=` link while on the page replaces the search.
    {
        let search = search.clone();
        let category = category.clone();
        use_effect_with(requested, move |requested| {
            if !requested.is_empty() {
                category.set(None);
                search.set(requested.clone());
            }
            || ()
        });
    }

    let grouped = use_memo(((*search).clone(), (*category).clone()), move |(search, category)| {
        group_by_letter(filter_glossary(terms, search, category.as_deref()))
            .into_iter()
            .map(|(letter, group)| (letter, group.into_iter().cloned().collect::<Vec<_>>()))
            .collect::<Vec<_>>()
    });

    let on_search_input = {
        let search = search.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                search.set(target.value());
            }
        })
    };
    let on_related = {
        let search = search.clone();
        let category = category.clone();
        Callback::from(move |term: String| {
            category.set(None);
            search.set(term);
        })
    };
    let clear_filters = {
        let search = search.clone();
        let category = category.clone();
        Callback::from(move |_: MouseEvent| {
            search.set(String::new());
            category.set(None);
        })
    };
    let select_category = |value: Option<String>| {
        let category = category.clone();
        Callback::from(move |_: MouseEvent| category.set(value.clone()))
    };

    html! {
        <main class="glossary-page">
            <section class="pt-32 pb-12 md:pt-40 text-center">
                <div class="max-w-4xl mx-auto px-4 md:px-8">
                    <h1 class="font-bold text-4xl md:text-6xl italic text-white mb-6">
                        { "Gaming " }<span class="text-brand-gold">{ "Glossary" }</span>
                    </h1>
                    <p class="text-lg text-brand-neutral mb-8">
                        { "Your comprehensive dictionary of gaming terms, strategies, and concepts. Master the language of pokies, sports betting, slots, and live casino games." }
                    </p>
                    <div class="relative max-w-2xl mx-auto">
                        <i class="ri-search-line absolute left-4 top-1/2 -translate-y-1/2 text-brand-neutral"></i>
                        <input
                            type="search"
                            placeholder="Search terms or definitions..."
                            value={(*search).clone()}
                            oninput={on_search_input}
                            class="w-full pl-12 pr-4 py-4 bg-brand-dark border border-brand-gold/30 rounded-xl text-white"
                        />
                    </div>
                </div>
            </section>

            <section class="py-12 bg-brand-dark">
                <div class="max-w-5xl mx-auto px-4 md:px-8">
                    <div class="flex flex-wrap gap-2 mb-10 justify-center">
                        <button class={pill_classes(category.is_none())} onclick={select_category(None)}>
                            { "All Categories" }
                        </button>
                        { for glossary_categories(terms).into_iter().map(|name| {
                            let active = category.as_deref() == Some(name);
                            html! {
                                <button class={pill_classes(active)} onclick={select_category(Some(name.to_string()))}>
                                    { name }
                                </button>
                            }
                        }) }
                    </div>

                    if grouped.is_empty() {
                        <div class="text-center py-16">
                            <i class="ri-book-open-line text-6xl text-brand-gold/40"></i>
                            <h2 class="font-bold text-2xl text-white mt-4 mb-2">{ "No Terms Found" }</h2>
                            <p class="text-brand-neutral mb-6">{ "Try a different search term or category" }</p>
                            <button class="btn-gold" onclick={clear_filters}>{ "Clear Filters" }</button>
                        </div>
                    } else {
                        <nav class="flex flex-wrap gap-2 mb-8 justify-center" aria-label="Letters">
                            { for grouped.iter().map(|(letter, _)| html! {
                                <a href={format!("#letter-{}", letter)} class="w-9 h-9 rounded-lg border border-brand-gold/30 text-brand-gold flex items-center justify-center">
                                    { letter.to_string() }
                                </a>
                            }) }
                        </nav>
                        <div class="space-y-10">
                            { for grouped.iter().map(|(letter, group)| html! {
                                <div id={format!("letter-{}", letter)}>
                                    <h2 class="font-extrabold text-3xl text-brand-gold mb-4">{ letter.to_string() }</h2>
                                    <div class="space-y-4">
                                        { for group.iter().map(|term| term_card(term, &on_related)) }
                                    </div>
                                </div>
                            }) }
                        </div>
                    }
                </div>
            </section>
            <ScrollToTopButton />
        </main>
    }
}
