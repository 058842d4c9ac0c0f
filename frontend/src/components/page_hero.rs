use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PageHeroProps {
    pub title: AttrValue,
    /// Second half of the heading, rendered in the brand colour.
    pub highlight: AttrValue,
    pub subtitle: AttrValue,
}

#[function_component(PageHero)]
pub fn page_hero(props: &PageHeroProps) -> Html {
    html! {
        <section class="pt-32 pb-12 md:pt-40 text-center">
            <div class="max-w-4xl mx-auto px-4 md:px-8">
                <h1 class="font-bold text-4xl md:text-6xl italic text-white mb-6">
                    { format!("{} ", props.title) }
                    <span class="text-brand-gold">{ props.highlight.clone() }</span>
                </h1>
                <p class="text-lg text-brand-neutral">{ props.subtitle.clone() }</p>
            </div>
        </section>
    }
}
