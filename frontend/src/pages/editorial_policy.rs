use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::{
        page_hero::PageHero,
        policy_section::{render_sections, PolicySection},
    },
    hooks::use_scroll_to_top,
    router::Route,
};

const LAST_UPDATED: &str = "January 2025";

fn editorial_sections() -> [PolicySection; 9] {
    [
        PolicySection::new("Independence and Objectivity").items(&[
            "We maintain complete editorial independence from gaming operators and affiliates",
            "Our content is not influenced by commercial relationships or advertising",
            "We provide honest, objective analysis based on facts and research",
            "We clearly disclose any potential conflicts of interest",
            "Our recommendations are based solely on merit and user benefit",
        ]),
        PolicySection::new("Accuracy and Fact-Checking")
            .paragraphs(&["We take accuracy seriously and implement rigorous fact-checking processes:"])
            .definitions(&[
                (
                    "Research",
                    "All content is thoroughly researched using reliable sources including official regulations, academic studies, and industry data.",
                ),
                (
                    "Verification",
                    "Facts, statistics, and claims are verified through multiple sources before publication.",
                ),
                (
                    "Updates",
                    "We regularly review and update content to ensure information remains current and accurate.",
                ),
                ("Corrections", "Errors are corrected promptly and transparently when identified."),
            ]),
        PolicySection::new("Content Creation Process")
            .paragraphs(&["Our content goes through a structured creation and review process:"])
            .definitions(&[
                (
                    "1. Topic Selection",
                    "Topics are chosen based on user needs, industry relevance, and educational value.",
                ),
                (
                    "2. Research and Writing",
                    "Experienced writers research thoroughly and create comprehensive, well-structured content.",
                ),
                (
                    "3. Editorial Review",
                    "Content is reviewed for accuracy, clarity, and adherence to our editorial standards.",
                ),
                ("4. Fact-Checking", "All factual claims are verified against reliable sources."),
                (
                    "5. Publication",
                    "Content is published with proper metadata, citations, and responsible gambling reminders.",
                ),
            ]),
        PolicySection::new("Responsible Gambling Commitment")
            .paragraphs(&["Promoting responsible gambling is central to our mission:"])
            .items(&[
                "Every article includes responsible gambling reminders",
                "We never encourage excessive gambling or unrealistic expectations",
                "We provide clear information about risks and house edges",
                "We prominently feature problem gambling resources and support services",
                "We emphasize that gambling should be entertainment, not income",
                "We include 18+ age restrictions on all gaming content",
            ]),
        PolicySection::new("Transparency")
            .paragraphs(&["We believe in complete transparency with our readers:"])
            .items(&[
                "We clearly identify content types (guides, reviews, news, opinion)",
                "We disclose any affiliate relationships or sponsored content",
                "We cite sources and provide references where applicable",
                "We acknowledge limitations in our knowledge or data",
                "We welcome feedback and corrections from readers",
            ]),
        PolicySection::new("User Privacy and Data")
            .paragraphs(&["We respect user privacy and handle data responsibly:"])
            .items(&[
                "We collect only necessary data for site functionality",
                "We never sell or share personal information with third parties",
                "We comply with Australian privacy laws and regulations",
                "We provide clear privacy policies and cookie notices",
                "Users can request data deletion at any time",
            ]),
        PolicySection::new("Content Standards")
            .paragraphs(&["All content published on EE9.com must meet these standards:"])
            .definitions(&[
                ("Accuracy", "Information must be factually correct and properly sourced."),
                ("Clarity", "Content must be clear, well-organized, and easy to understand."),
                ("Relevance", "Content must be relevant to Australian players and their needs."),
                ("Responsibility", "Content must promote responsible gambling practices."),
            ]),
        PolicySection::new("Corrections and Updates")
            .paragraphs(&["When errors are identified or information becomes outdated:"])
            .items(&[
                "Corrections are made promptly and clearly noted",
                "Significant updates are documented with revision dates",
                "We acknowledge errors transparently rather than silently editing",
                "Readers can report errors through our contact form",
                "We maintain version history for major content updates",
            ]),
        PolicySection::new("Feedback and Complaints")
            .paragraphs(&[
                "We welcome feedback and take complaints seriously.",
                "If you have concerns about our content, editorial practices, or believe we've made an error, please contact us. We will:",
            ])
            .items(&[
                "Acknowledge your feedback within 48 hours",
                "Investigate the issue thoroughly",
                "Take appropriate corrective action if needed",
                "Respond with our findings and actions taken",
            ]),
    ]
}

#[function_component(EditorialPolicyPage)]
pub fn editorial_policy_page() -> Html {
    use_scroll_to_top();
    let sections = editorial_sections();

    html! {
        <main class="editorial-policy-page">
            <PageHero
                title="Editorial"
                highlight="Policy"
                subtitle="At EE9.com, we are committed to providing accurate, unbiased, and helpful information to Australian gaming enthusiasts. Our editorial policy outlines the principles and standards that guide our content creation and publication process."
            />

            <section class="py-12 bg-brand-dark">
                <div class="max-w-4xl mx-auto px-4 md:px-8">
                    { render_sections(&sections) }

                    <div class="rounded-2xl bg-brand-gold/10 border border-brand-gold/30 p-8 mt-12">
                        <h2 class="font-bold text-2xl text-brand-gold mb-3">{ "Our Promise" }</h2>
                        <p class="text-white mb-4">
                            { "We are committed to maintaining the highest editorial standards and continuously improving our content to serve the Australian gaming community better. Your trust is our most valuable asset." }
                        </p>
                        <p class="text-sm text-brand-neutral mb-6">{ format!("Last updated: {LAST_UPDATED}") }</p>
                        <Link<Route> to={Route::Contact} classes={classes!("btn-gold")}>{ "Contact Us" }</Link<Route>>
                    </div>
                </div>
            </section>
        </main>
    }
}
