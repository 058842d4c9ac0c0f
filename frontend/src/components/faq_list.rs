use ee9_shared::seo::Faq;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FaqListProps {
    pub title: AttrValue,
    pub faqs: &'static [Faq],
}

/// Accordion of question/answer pairs, one open at a time.
#[function_component(FaqList)]
pub fn faq_list(props: &FaqListProps) -> Html {
    let open_index = use_state(|| None::<usize>);

    html! {
        <section class="mt-12">
            <h2 class="font-bold text-2xl text-white mb-6">{ props.title.clone() }</h2>
            <div class="space-y-4">
                { for props.faqs.iter().enumerate().map(|(index, faq)| {
                    let is_open = *open_index == Some(index);
                    let toggle = {
                        let open_index = open_index.clone();
                        Callback::from(move |_: MouseEvent| {
                            open_index.set(if is_open { None } else { Some(index) });
                        })
                    };
                    html! {
                        <div class="rounded-xl border border-brand-gold/20 bg-brand-black">
                            <button
                                class="w-full flex items-center justify-between p-5 text-left"
                                onclick={toggle}
                                aria-expanded={is_open.to_string()}
                            >
                                <span class="font-semibold text-white">{ faq.question }</span>
                                <i class={if is_open { "ri-subtract-line text-brand-gold" } else { "ri-add-line text-brand-gold" }}></i>
                            </button>
                            if is_open {
                                <p class="px-5 pb-5 text-brand-neutral leading-relaxed">{ faq.answer }</p>
                            }
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}
