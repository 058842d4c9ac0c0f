use ee9_shared::guides::GUIDE_SECTIONS;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{hooks::use_scroll_to_top, router::Route};

#[function_component(GuidesPage)]
pub fn guides_page() -> Html {
    use_scroll_to_top();

    html! {
        <main class="guides-page">
            <section class="pt-32 pb-12 md:pt-40 text-center">
                <div class="max-w-4xl mx-auto px-4 md:px-8">
                    <h1 class="font-bold text-4xl md:text-6xl italic text-white mb-6">
                        { "Gaming " }<span class="text-brand-gold">{ "Guides Hub" }</span>
                    </h1>
                    <p class="text-lg text-brand-neutral">
                        { "Comprehensive guides covering everything from beginner basics to advanced strategies. Pick a track and start learning." }
                    </p>
                </div>
            </section>

            <section class="py-12 bg-brand-dark">
                <div class="max-w-7xl mx-auto px-4 md:px-8 grid grid-cols-1 md:grid-cols-2 gap-8">
                    { for GUIDE_SECTIONS.iter().map(|section| html! {
                        <div class="rounded-2xl border border-brand-gold/20 bg-brand-black p-8">
                            <div class="flex items-center gap-4 mb-4">
                                <div class="w-14 h-14 bg-brand-gold rounded-xl flex items-center justify-center">
                                    <i class={classes!(section.icon, "text-3xl", "text-brand-black")}></i>
                                </div>
                                <h2 class="font-bold text-2xl text-white">{ section.title }</h2>
                            </div>
                            <p class="text-brand-neutral mb-6">{ section.description }</p>
                            <ul class="space-y-3">
                                { for section.links.iter().map(|link| html! {
                                    <li>
                                        <Link<Route>
                                            to={Route::recognize(link.path).unwrap_or(Route::NotFound)}
                                            classes={classes!("flex", "items-center", "justify-between", "text-white", "hover:text-brand-gold")}
                                        >
                                            <span>{ link.title }</span>
                                            <i class="ri-arrow-right-line" aria-hidden="true"></i>
                                        </Link<Route>>
                                    </li>
                                }) }
                            </ul>
                        </div>
                    }) }
                </div>
            </section>

            <section class="py-16 text-center">
                <h2 class="font-bold text-3xl text-white mb-4">{ "Put the Theory to Work" }</h2>
                <p class="text-brand-neutral mb-8">{ "Plan sessions and check bonus terms with our free calculators." }</p>
                <Link<Route> to={Route::Tools} classes={classes!("btn-gold")}>{ "Open the Tools" }</Link<Route>>
            </section>
        </main>
    }
}
