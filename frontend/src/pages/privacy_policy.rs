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

const EFFECTIVE_DATE: &str = "January 1, 2025";
const PRIVACY_EMAIL: &str = "privacy@ee9.com";

fn privacy_sections() -> [PolicySection; 11] {
    [
        PolicySection::new("Personal Information")
            .paragraphs(&[
                "We may collect personal information that you voluntarily provide to us when you:",
            ])
            .items(&[
                "Subscribe to our newsletter",
                "Contact us through our contact form",
                "Participate in surveys or promotions",
                "Leave comments or feedback",
                "This information may include: name, email address, and any other information you choose to provide.",
            ]),
        PolicySection::new("Automatically Collected Information")
            .paragraphs(&[
                "When you visit our website, we automatically collect certain information about your device, including:",
            ])
            .items(&[
                "IP address",
                "Browser type and version",
                "Operating system",
                "Pages visited and time spent on pages",
                "Referring website addresses",
                "Device identifiers",
            ]),
        PolicySection::new("How We Use Your Information")
            .paragraphs(&["We use the information we collect to:"])
            .items(&[
                "Provide, operate, and maintain our website",
                "Improve and personalize your experience",
                "Understand how you use our website",
                "Develop new features and functionality",
                "Communicate with you, including for customer service and updates",
                "Send you newsletters and marketing communications (with your consent)",
                "Detect and prevent fraud or abuse",
                "Comply with legal obligations",
            ]),
        PolicySection::new("Cookies and Tracking Technologies")
            .paragraphs(&[
                "We use cookies and similar tracking technologies to track activity on our website and store certain information. Cookies are files with a small amount of data that are sent to your browser from a website and stored on your device.",
                "You can instruct your browser to refuse all cookies or to indicate when a cookie is being sent. However, if you do not accept cookies, you may not be able to use some portions of our website.",
            ])
            .definitions(&[
                ("Essential Cookies", "Required for the website to function properly"),
                ("Analytics Cookies", "Help us understand how visitors interact with our website"),
                ("Preference Cookies", "Remember your preferences and settings"),
                ("Marketing Cookies", "Track your browsing habits to show relevant advertisements"),
            ]),
        PolicySection::new("Information Sharing and Disclosure")
            .paragraphs(&[
                "We do not sell, trade, or rent your personal information to third parties. We may share your information in the following circumstances:",
            ])
            .definitions(&[
                (
                    "Service Providers",
                    "With third-party service providers who perform services on our behalf (e.g., email delivery, analytics)",
                ),
                ("Legal Requirements", "When required by law or to protect our rights"),
                ("Business Transfers", "In connection with a merger, sale, or acquisition"),
                ("With Your Consent", "When you have given us explicit permission"),
            ]),
        PolicySection::new("Data Security").paragraphs(&[
            "We implement appropriate technical and organizational security measures to protect your personal information against unauthorized access, alteration, disclosure, or destruction. However, no method of transmission over the internet or electronic storage is 100% secure, and we cannot guarantee absolute security.",
        ]),
        PolicySection::new("Your Rights")
            .paragraphs(&["Under Australian privacy law, you have the right to:"])
            .items(&[
                "Access your personal information",
                "Correct inaccurate or incomplete information",
                "Request deletion of your personal information",
                "Object to processing of your personal information",
                "Request restriction of processing",
                "Data portability",
                "Withdraw consent at any time",
            ]),
        PolicySection::new("Third-Party Links").paragraphs(&[
            "Our website may contain links to third-party websites. We are not responsible for the privacy practices or content of these external sites. We encourage you to read the privacy policies of any third-party sites you visit.",
        ]),
        PolicySection::new("Children's Privacy").paragraphs(&[
            "Our website is not intended for individuals under the age of 18. We do not knowingly collect personal information from children. If you are a parent or guardian and believe your child has provided us with personal information, please contact us so we can delete it.",
        ]),
        PolicySection::new("Changes to This Privacy Policy").paragraphs(&[
            "We may update this Privacy Policy from time to time. We will notify you of any changes by posting the new Privacy Policy on this page and updating the \"Effective Date\" at the top. You are advised to review this Privacy Policy periodically for any changes.",
        ]),
        PolicySection::new("Contact Us").paragraphs(&[
            "If you have any questions about this Privacy Policy or our privacy practices, please contact us:",
        ]),
    ]
}

#[function_component(PrivacyPolicyPage)]
pub fn privacy_policy_page() -> Html {
    use_scroll_to_top();
    let sections = privacy_sections();

    html! {
        <main class="privacy-policy-page">
            <PageHero
                title="Privacy"
                highlight="Policy"
                subtitle={format!("Effective Date: {EFFECTIVE_DATE}")}
            />

            <section class="py-12 bg-brand-dark">
                <div class="max-w-4xl mx-auto px-4 md:px-8">
                    <p class="text-white/85 leading-relaxed mb-12">
                        { "EE9.com (\"we,\" \"our,\" or \"us\") is committed to protecting your privacy. This Privacy Policy explains how we collect, use, disclose, and safeguard your information when you visit our website." }
                    </p>

                    { render_sections(&sections) }

                    <div class="mt-6 space-y-2 text-white">
                        <p>
                            { "Email: " }
                            <a class="text-brand-gold" href={format!("mailto:{PRIVACY_EMAIL}")}>{ PRIVACY_EMAIL }</a>
                        </p>
                        <p>
                            { "Website: " }
                            <Link<Route> to={Route::Contact} classes={classes!("text-brand-gold")}>{ "Contact Form" }</Link<Route>>
                        </p>
                    </div>

                    <div class="rounded-xl border border-red-500/40 bg-red-500/10 p-6 mt-12">
                        <h3 class="font-bold text-white mb-2">{ "Disclaimer" }</h3>
                        <p class="text-sm text-white/85">
                            { "This website provides information about gaming for educational purposes only. We are not a gambling operator. All gambling activities should be conducted responsibly and in accordance with applicable laws. You must be 18 years or older to participate in gambling activities in Australia." }
                        </p>
                    </div>
                </div>
            </section>
        </main>
    }
}
