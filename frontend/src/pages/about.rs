use yew::prelude::*;
use yew_router::prelude::*;

use crate::{components::page_hero::PageHero, hooks::use_scroll_to_top, router::Route};

const OFFERINGS: &[(&str, &str, &str)] = &[
    (
        "ri-article-line",
        "Expert Articles",
        "In-depth guides covering everything from beginner basics to advanced strategies, written by experienced gaming analysts.",
    ),
    (
        "ri-calculator-line",
        "Gaming Tools",
        "Free calculators and planners to help you manage your bankroll and understand bonus requirements.",
    ),
    (
        "ri-book-2-line",
        "Comprehensive Glossary",
        "A complete dictionary of gaming terms, helping you understand the language of pokies, sports betting, and casino games.",
    ),
    (
        "ri-shield-check-line",
        "Responsible Gaming",
        "Resources and information to help you maintain healthy gaming habits and recognize problem gambling signs.",
    ),
];

const VALUES: &[(&str, &str)] = &[
    (
        "Independence",
        "We maintain editorial independence and provide unbiased information. Our content is not influenced by gaming operators or affiliates.",
    ),
    (
        "Accuracy",
        "All our content is thoroughly researched and fact-checked. We cite sources and update information regularly to ensure accuracy.",
    ),
    (
        "Responsibility",
        "We prioritize responsible gambling in all our content. Every article includes reminders about safe gaming practices and available support resources.",
    ),
    (
        "Transparency",
        "We're open about our methods, sources, and any potential conflicts of interest. You deserve to know where our information comes from.",
    ),
];

const COMMITMENTS: &[&str] = &[
    "Provide accurate, up-to-date information you can trust",
    "Promote responsible gambling in all our content",
    "Maintain editorial independence and transparency",
    "Respect your privacy and data security",
    "Continuously improve our content based on user feedback",
    "Support problem gambling awareness and prevention",
    "Ensure all content is accessible and easy to understand",
];

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    use_scroll_to_top();

    html! {
        <main class="about-page">
            <PageHero
                title="About"
                highlight="EE9.com"
                subtitle="Your trusted source for gaming insights, strategies, and responsible gambling information in Australia."
            />

            <section class="py-12 bg-brand-dark">
                <div class="max-w-4xl mx-auto px-4 md:px-8 space-y-6">
                    <h2 class="font-bold text-3xl text-white">{ "Who We Are" }</h2>
                    <p class="text-white/85 leading-relaxed">
                        { "EE9.com is an independent gaming information platform dedicated to providing Australian players with comprehensive, accurate, and unbiased content about pokies, sports betting, slots, and live casino games. We're not a gambling operator - we're educators and enthusiasts who believe that informed players make better decisions and have more enjoyable gaming experiences." }
                    </p>
                    <p class="text-white/85 leading-relaxed">
                        { "Our team consists of experienced gaming analysts, strategy experts, and responsible gambling advocates who understand the Australian gaming landscape. We've spent years studying game mechanics, analyzing strategies, and observing player behavior to bring you insights that actually matter." }
                    </p>
                    <div class="rounded-2xl bg-brand-gold/10 border border-brand-gold/30 p-8">
                        <h2 class="font-bold text-2xl text-brand-gold mb-3">{ "Our Mission" }</h2>
                        <p class="text-white">
                            { "To empower Australian players with knowledge, strategies, and tools that enhance their gaming experience while promoting responsible gambling practices. We believe that education is the key to enjoyable, sustainable gaming." }
                        </p>
                    </div>
                </div>
            </section>

            <section class="py-12">
                <div class="max-w-6xl mx-auto px-4 md:px-8">
                    <h2 class="font-bold text-3xl text-white mb-8 text-center">{ "What We Offer" }</h2>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        { for OFFERINGS.iter().map(|(icon, title, text)| html! {
                            <div class="rounded-xl border border-brand-gold/20 bg-brand-black p-6">
                                <i class={classes!(*icon, "text-3xl", "text-brand-gold")} aria-hidden="true"></i>
                                <h3 class="font-semibold text-xl text-white mt-3 mb-2">{ *title }</h3>
                                <p class="text-brand-neutral">{ *text }</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="py-12 bg-brand-dark">
                <div class="max-w-6xl mx-auto px-4 md:px-8">
                    <h2 class="font-bold text-3xl text-white mb-8 text-center">{ "Our Values" }</h2>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        { for VALUES.iter().map(|(title, text)| html! {
                            <div class="p-6">
                                <h3 class="font-semibold text-xl text-brand-gold mb-2">{ *title }</h3>
                                <p class="text-white/85">{ *text }</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="py-12">
                <div class="max-w-4xl mx-auto px-4 md:px-8 space-y-6">
                    <h2 class="font-bold text-3xl text-white">{ "Australian Focus" }</h2>
                    <p class="text-white/85 leading-relaxed">
                        { "We specifically cater to Australian players, understanding the unique aspects of the Australian gaming landscape including local regulations, popular games, and cultural preferences. Our content reflects Australian terminology, currency, and gaming contexts." }
                    </p>
                    <p class="text-white/85 leading-relaxed">
                        { "Whether you're interested in AFL and NRL betting strategies, understanding pokies regulations in Australia, or learning about games popular in Australian venues, our content is tailored to your needs." }
                    </p>

                    <h2 class="font-bold text-3xl text-white pt-6">{ "Our Commitment to You" }</h2>
                    <ul class="space-y-3">
                        { for COMMITMENTS.iter().map(|item| html! {
                            <li class="flex gap-3 text-white/85">
                                <i class="ri-check-line text-brand-gold" aria-hidden="true"></i>
                                <span>{ *item }</span>
                            </li>
                        }) }
                    </ul>
                </div>
            </section>

            <section class="py-16 bg-brand-dark text-center">
                <div class="max-w-3xl mx-auto px-4 md:px-8">
                    <h2 class="font-bold text-3xl text-white mb-4">{ "Contact Us" }</h2>
                    <p class="text-brand-neutral mb-8">
                        { "We value your feedback and questions. Whether you have suggestions for content, spotted an error, or just want to share your thoughts, we'd love to hear from you." }
                    </p>
                    <div class="flex flex-wrap justify-center gap-4">
                        <Link<Route> to={Route::Contact} classes={classes!("btn-gold")}>{ "Get in Touch" }</Link<Route>>
                        <Link<Route> to={Route::EditorialPolicy} classes={classes!("btn-outline")}>{ "Editorial Policy" }</Link<Route>>
                    </div>
                </div>
            </section>

            <section class="py-10">
                <div class="max-w-4xl mx-auto px-4 md:px-8 rounded-xl border border-red-500/40 bg-red-500/10 p-6">
                    <h3 class="font-bold text-white mb-2">{ "18+ Responsible Gaming" }</h3>
                    <p class="text-sm text-white/85">
                        { "EE9.com is committed to promoting responsible gambling. All content is intended for adults 18 years and older. If you or someone you know has a gambling problem, please seek help through Gambling Help Online (1800 858 858) or other support services." }
                    </p>
                </div>
            </section>
        </main>
    }
}
