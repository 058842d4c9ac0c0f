use ee9_shared::seo::RESPONSIBLE_GAMBLING_FAQS;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::{
        faq_list::FaqList,
        page_hero::PageHero,
        policy_section::{render_sections, PolicySection},
    },
    hooks::use_scroll_to_top,
    router::Route,
};

struct HelpService {
    name: &'static str,
    summary: &'static str,
    phone: Option<&'static str>,
    website: &'static str,
    availability: &'static str,
}

const HELP_SERVICES: &[HelpService] = &[
    HelpService {
        name: "Gambling Help Online",
        summary: "Free, confidential support available 24/7 for anyone affected by problem gambling.",
        phone: Some("1800 858 858"),
        website: "gamblinghelponline.org.au",
        availability: "Available 24 hours, 7 days a week",
    },
    HelpService {
        name: "Lifeline Australia",
        summary: "Crisis support and suicide prevention services for anyone experiencing emotional distress.",
        phone: Some("13 11 14"),
        website: "lifeline.org.au",
        availability: "Available 24 hours, 7 days a week",
    },
    HelpService {
        name: "Gamblers Anonymous",
        summary: "Peer support groups for people who want to stop gambling.",
        phone: None,
        website: "gamblersanonymous.org.au",
        availability: "Find local meetings and support groups",
    },
    HelpService {
        name: "Financial Counselling",
        summary: "Free financial counseling services to help manage gambling-related debt.",
        phone: Some("1800 007 007"),
        website: "ndh.org.au",
        availability: "National Debt Helpline",
    },
];

fn guidance_sections() -> [PolicySection; 5] {
    [
        PolicySection::new("What is Responsible Gambling?")
            .paragraphs(&[
                "Responsible gambling means enjoying gaming as a form of entertainment while maintaining control over your time and money. It involves understanding the risks, setting personal limits, and recognizing when gaming stops being fun.",
            ])
            .items(&[
                "Gamble only with money you can afford to lose",
                "Set time and money limits before you start",
                "Never chase your losses",
                "Take regular breaks during gaming sessions",
                "Don't gamble when upset, stressed, or under the influence",
                "Balance gambling with other activities and interests",
                "Keep gambling separate from daily finances",
            ]),
        PolicySection::new("Setting Limits")
            .paragraphs(&[
                "One of the most effective ways to maintain control is by setting clear limits before you begin gaming. These limits should be realistic and based on your personal financial situation.",
            ])
            .definitions(&[
                (
                    "Deposit Limits",
                    "Set a maximum amount you can deposit over a specific period (daily, weekly, or monthly). This prevents overspending and helps you stay within your budget.",
                ),
                (
                    "Loss Limits",
                    "Decide in advance how much you're willing to lose in a session. Once you reach this limit, stop playing regardless of the urge to continue.",
                ),
                (
                    "Time Limits",
                    "Set a maximum time for each gaming session. Use alarms or timers to remind yourself when it's time to take a break or stop.",
                ),
                (
                    "Win Goals",
                    "Set a realistic win target. If you reach it, consider stopping or withdrawing your winnings to secure your profit.",
                ),
            ]),
        PolicySection::new("Warning Signs of Problem Gambling")
            .paragraphs(&[
                "It's important to recognize the warning signs that gambling may be becoming a problem. If you identify with any of these signs, it's time to seek help.",
            ])
            .items(&[
                "Spending more money or time gambling than you can afford",
                "Chasing losses by gambling more to win back money",
                "Borrowing money or selling possessions to gamble",
                "Neglecting work, family, or personal responsibilities",
                "Lying to others about your gambling activities",
                "Feeling guilty, anxious, or depressed about gambling",
                "Gambling to escape problems or relieve stress",
                "Unable to stop or reduce gambling despite wanting to",
                "Relationship problems caused by gambling",
                "Thinking about gambling constantly",
            ]),
        PolicySection::new("Self-Exclusion Programs")
            .paragraphs(&[
                "If you feel you need a break from gambling, self-exclusion programs allow you to voluntarily ban yourself from gaming venues or online platforms for a specified period. This can range from a few months to permanent exclusion.",
            ])
            .definitions(&[
                (
                    "1. Choose Your Period",
                    "Decide how long you want to be excluded (e.g., 3 months, 6 months, 1 year, or indefinitely).",
                ),
                ("2. Register", "Contact the gaming operator or use their online self-exclusion tools."),
                (
                    "3. Enforcement",
                    "During the exclusion period, you won't be able to access gaming services.",
                ),
                (
                    "4. Cooling-Off",
                    "After the period ends, there's usually a cooling-off period before you can resume.",
                ),
            ]),
        PolicySection::new("Getting Help").paragraphs(&[
            "If you or someone you know is struggling with problem gambling, help is available. Professional support services offer confidential assistance, counseling, and resources to help you regain control.",
        ]),
    ]
}

const FAMILY_TIPS: &[&str] = &[
    "Talk to them in a calm, non-judgmental way about your concerns",
    "Encourage them to seek professional help",
    "Offer to accompany them to counseling or support groups",
    "Don't lend them money or pay their gambling debts",
    "Take care of your own wellbeing and seek support if needed",
    "Be patient - recovery takes time and may involve setbacks",
];

fn help_service_card(service: &HelpService) -> Html {
    html! {
        <div class="rounded-xl border border-brand-gold/20 bg-brand-black p-6">
            <h3 class="font-semibold text-xl text-white mb-2">{ service.name }</h3>
            <p class="text-brand-neutral mb-4">{ service.summary }</p>
            if let Some(phone) = service.phone {
                <p class="text-white">
                    { "Phone: " }
                    <a class="text-brand-gold" href={format!("tel:{}", phone.replace(' ', ""))}>{ phone }</a>
                </p>
            }
            <p class="text-white">
                { "Website: " }
                <a
                    class="text-brand-gold"
                    href={format!("https://{}", service.website)}
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    { service.website }
                </a>
            </p>
            <p class="text-sm text-brand-neutral mt-2">{ service.availability }</p>
        </div>
    }
}

#[function_component(ResponsibleGamblingPage)]
pub fn responsible_gambling_page() -> Html {
    use_scroll_to_top();
    let sections = guidance_sections();

    html! {
        <main class="responsible-gambling-page">
            <PageHero
                title="Responsible"
                highlight="Gambling"
                subtitle="Gaming should be entertaining and enjoyable. Learn how to play responsibly and maintain healthy gaming habits."
            />

            <section class="py-12 bg-brand-dark">
                <div class="max-w-4xl mx-auto px-4 md:px-8">
                    <div class="rounded-xl border border-red-500/40 bg-red-500/10 p-6 mb-12">
                        <h2 class="font-bold text-xl text-white mb-2">{ "18+ Only" }</h2>
                        <p class="text-white/85">
                            { "All gambling activities in Australia are restricted to individuals aged 18 years and older. It is illegal for anyone under 18 to participate in gambling activities, and operators are required to verify age before allowing access to gaming services." }
                        </p>
                    </div>

                    { render_sections(&sections) }

                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6 mt-8">
                        { for HELP_SERVICES.iter().map(help_service_card) }
                    </div>

                    <section class="mt-12">
                        <h2 class="font-bold text-2xl md:text-3xl text-white mb-4">{ "Tips for Friends and Family" }</h2>
                        <p class="text-white/85 mb-4">{ "If you're concerned about someone's gambling, here are ways you can help:" }</p>
                        <ul class="space-y-2">
                            { for FAMILY_TIPS.iter().map(|tip| html! {
                                <li class="flex gap-2 text-white/85">
                                    <i class="ri-heart-line text-brand-gold mt-1" aria-hidden="true"></i>
                                    <span>{ *tip }</span>
                                </li>
                            }) }
                        </ul>
                        <div class="rounded-2xl bg-brand-gold/10 border border-brand-gold/30 p-6 mt-8">
                            <h3 class="font-bold text-xl text-brand-gold mb-2">{ "Remember" }</h3>
                            <p class="text-white">
                                { "Gambling should be entertainment, not a way to make money or solve financial problems. If it stops being fun, it's time to stop. Help is always available, and recovery is possible." }
                            </p>
                        </div>
                    </section>

                    <FaqList title="Frequently Asked Questions" faqs={RESPONSIBLE_GAMBLING_FAQS} />
                </div>
            </section>

            <section class="py-16 text-center">
                <h2 class="font-bold text-3xl text-white mb-4">{ "Need More Information?" }</h2>
                <p class="text-brand-neutral mb-8">{ "Explore our guides on responsible gaming practices and bankroll management" }</p>
                <div class="flex flex-wrap justify-center gap-4">
                    <Link<Route> to={Route::Guides} classes={classes!("btn-gold")}>{ "Browse Guides" }</Link<Route>>
                    <Link<Route> to={Route::Contact} classes={classes!("btn-outline")}>{ "Contact Us" }</Link<Route>>
                </div>
            </section>
        </main>
    }
}
