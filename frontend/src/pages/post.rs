use ee9_shared::{related, seo::ARTICLE_FAQS, Article, ContentStore, TagSlug};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    components::{
        article_card::ArticleCard,
        breadcrumbs::{Breadcrumbs, Crumb},
        faq_list::FaqList,
        scroll_to_top_button::ScrollToTopButton,
    },
    hooks::{use_reading_progress, use_scroll_to_top},
    router::Route,
};

#[derive(Properties, Clone, PartialEq)]
pub struct PostPageProps {
    pub slug: String,
}

const COMMON_MISTAKES: &[&str] = &[
    "Chasing losses by increasing bet sizes",
    "Playing without understanding the rules",
    "Ignoring bankroll limits",
    "Gaming while under the influence or emotional",
    "Believing in \"hot\" or \"cold\" streaks",
];

fn neighbour_card(article: Option<&Article>, label: &'static str, align_right: bool) -> Html {
    let Some(article) = article else {
        return html! { <div></div> };
    };
    html! {
        <Link<Route>
            to={Route::Post { slug: article.slug.clone() }}
            classes={classes!("block", "rounded-xl", "border", "border-brand-gold/20", "p-6", "hover:border-brand-gold", align_right.then_some("text-right"))}
        >
            <span class="text-sm text-brand-gold">{ label }</span>
            <h4 class="font-bold text-lg text-white mt-2 line-clamp-2">{ &article.title }</h4>
        </Link<Route>>
    }
}

#[function_component(PostPage)]
pub fn post_page(props: &PostPageProps) -> Html {
    use_scroll_to_top();
    let progress = use_reading_progress();
    let store = ContentStore::global();

    let Some(article) = store.article_by_slug(&props.slug) else {
        return html! {
            <main class="min-h-screen flex items-center justify-center pt-32">
                <div class="text-center">
                    <h1 class="font-bold text-4xl mb-4">{ "Article Not Found" }</h1>
                    <p class="text-brand-neutral mb-6">{ "The article you are looking for does not exist or has been moved." }</p>
                    <Link<Route> to={Route::Home} classes={classes!("btn-gold")}>{ "Return Home" }</Link<Route>>
                </div>
            </main>
        };
    };

    let related = related::resolve(store.articles(), article);
    let lower_title = article.title.to_lowercase();

    html! {
        <main class="post-page">
            <div class="fixed top-0 left-0 h-1 bg-brand-gold z-[60]" style={format!("width: {:.1}%", progress)}></div>

            <article class="max-w-4xl mx-auto px-4 md:px-8 pt-32 pb-16">
                <Breadcrumbs crumbs={vec![
                    Crumb::link("Home", Route::Home),
                    Crumb::link(article.category.clone(), Route::Category { slug: article.category_slug() }),
                    Crumb::text(article.title.clone()),
                ]} />

                <span class="inline-block px-3 py-1 bg-brand-gold text-brand-black text-xs font-bold rounded-full mb-4">
                    { &article.category }
                </span>
                <h1 class="font-bold text-4xl md:text-5xl text-white leading-tight mb-6">{ &article.title }</h1>
                <p class="text-lg text-brand-neutral mb-8">{ &article.excerpt }</p>

                <div class="flex flex-wrap items-center justify-between gap-4 pb-8 border-b border-brand-gold/20 mb-8">
                    <div class="flex items-center gap-3">
                        <div class="w-12 h-12 rounded-full bg-brand-gold text-brand-black font-bold flex items-center justify-center">
                            { article.author_initials() }
                        </div>
                        <div>
                            <p class="font-semibold text-white">{ &article.author }</p>
                            <p class="text-sm text-brand-neutral">{ &article.publish_date }</p>
                        </div>
                    </div>
                    <div class="flex items-center gap-4 text-sm text-brand-neutral">
                        <span class="flex items-center gap-1">
                            <i class="ri-time-line"></i>
                            { format!("{} min read", article.reading_time) }
                        </span>
                        <span class="flex items-center gap-1">
                            <i class="ri-eye-line"></i>
                            { format!("{} views", article.views) }
                        </span>
                    </div>
                </div>

                <img src={article.image_url.clone()} alt={article.title.clone()} class="w-full h-96 object-cover rounded-2xl mb-12" />

                <div class="prose-article text-white/90 leading-relaxed space-y-6">
                    <h2 class="font-bold text-3xl text-white">{ "Introduction" }</h2>
                    <p>
                        { format!("Welcome to this comprehensive guide where we'll explore everything you need to know about {}. Whether you're a beginner just starting out or an experienced player looking to refine your approach, this article will provide valuable insights and practical strategies you can apply immediately.", lower_title) }
                    </p>

                    <h2 class="font-bold text-3xl text-white">{ "Understanding the Basics" }</h2>
                    <p>
                        { "Before diving into advanced strategies, it's crucial to understand the fundamental concepts. In the Australian gaming landscape, knowledge is your most powerful tool. Let's break down the key elements that every player should master to make informed decisions and enhance their overall experience." }
                    </p>
                    <div class="rounded-xl border-l-4 border-brand-gold bg-brand-gold/10 p-6">
                        <h4 class="font-bold text-xl text-white mb-2">{ "Pro Tip" }</h4>
                        <p>{ "Always start with a clear budget and stick to it. Successful players treat gaming as entertainment, not as a way to make money. Set both win and loss limits before you begin, and have the discipline to walk away when you reach them." }</p>
                    </div>

                    <h2 class="font-bold text-3xl text-white">{ "Key Strategies and Techniques" }</h2>
                    <p>
                        { "Now that we've covered the basics, let's explore proven strategies that can significantly improve your results. These techniques have been tested by experienced players and are backed by mathematical principles and real-world experience." }
                    </p>
                    <h3 class="font-semibold text-2xl text-brand-gold">{ "Strategy 1: Bankroll Management" }</h3>
                    <p>{ "Proper bankroll management is the foundation of sustainable gaming. Divide your total bankroll into smaller session budgets, typically 5-10% of your total funds per session. This approach ensures you can weather losing streaks while maximizing your playing time and enjoyment." }</p>
                    <h3 class="font-semibold text-2xl text-brand-gold">{ "Strategy 2: Understanding Probability" }</h3>
                    <p>{ "Every game has underlying mathematics that determine outcomes. Understanding concepts like RTP (Return to Player), house edge, and variance helps you make smarter choices about which games to play and how to approach them. Knowledge of probability doesn't guarantee wins, but it does help you set realistic expectations." }</p>
                    <h3 class="font-semibold text-2xl text-brand-gold">{ "Strategy 3: Timing and Session Control" }</h3>
                    <p>{ "Knowing when to play and when to stop is crucial. Set time limits for your sessions and take regular breaks. Fatigue and emotional decision-making are the enemies of smart gaming. Fresh, focused players make better decisions and enjoy the experience more." }</p>
                    <div class="rounded-xl border-l-4 border-red-500 bg-red-500/10 p-6">
                        <h4 class="font-bold text-xl text-white mb-2">{ "Common Mistakes to Avoid" }</h4>
                        <ul class="list-disc pl-6 space-y-1">
                            { for COMMON_MISTAKES.iter().map(|mistake| html! { <li>{ *mistake }</li> }) }
                        </ul>
                    </div>

                    <h2 class="font-bold text-3xl text-white">{ "Real-World Examples" }</h2>
                    <p>{ "Let's look at practical scenarios that illustrate these concepts in action. These examples are based on common situations Australian players encounter and demonstrate how applying the right strategies can make a significant difference." }</p>
                    <div class="rounded-xl border border-brand-gold/20 p-6">
                        <h4 class="font-bold text-xl text-brand-gold mb-3">{ "Example Scenario" }</h4>
                        <p class="mb-3">{ "Sarah has a $500 bankroll and wants to enjoy a weekend of gaming. Instead of betting large amounts hoping for quick wins, she divides her bankroll into 10 sessions of $50 each. She sets a win goal of $25 per session and a loss limit of $50. This approach allows her to enjoy multiple sessions, and even if she has some losing sessions, she still has funds to continue playing responsibly." }</p>
                        <p class="text-brand-neutral">{ "Result: Sarah enjoys her weekend, has several winning sessions, and leaves with $480 - only $20 down but with hours of entertainment value." }</p>
                    </div>

                    <h2 class="font-bold text-3xl text-white">{ "Advanced Considerations" }</h2>
                    <p>{ "For those looking to take their understanding to the next level, consider these advanced factors that can further optimize your approach. These concepts require more study but can provide additional edges when applied correctly." }</p>

                    <FaqList title="Frequently Asked Questions" faqs={ARTICLE_FAQS} />

                    <h2 class="font-bold text-3xl text-white">{ "Conclusion" }</h2>
                    <p>
                        { format!("Understanding {} is essential for any Australian player looking to maximize their enjoyment while minimizing risks. By applying the strategies and principles outlined in this guide, you'll be better equipped to make informed decisions and maintain healthy gaming habits.", lower_title) }
                    </p>
                    <p>{ "Remember, the goal is entertainment, not profit. Set realistic expectations, manage your bankroll wisely, and always play responsibly. If you ever feel gaming is becoming a problem, don't hesitate to seek help from professional resources." }</p>

                    <div class="rounded-xl border border-brand-gold/30 bg-brand-gold/5 p-6">
                        <h4 class="font-bold text-lg text-white mb-2">
                            <i class="ri-shield-check-line text-brand-gold mr-2"></i>
                            { "Responsible Gambling Reminder" }
                        </h4>
                        <p class="text-sm text-brand-neutral">{ "This article is for educational purposes only. Always gamble responsibly, set limits, and seek help if needed. You must be 18+ to participate in gambling activities in Australia." }</p>
                    </div>
                </div>

                if !article.tags.is_empty() {
                    <div class="mt-12 pt-8 border-t border-brand-gold/20">
                        <h4 class="font-semibold text-lg text-white mb-4">{ "Related Topics" }</h4>
                        <div class="flex flex-wrap gap-2">
                            { for article.tags.iter().map(|tag| {
                                let slug = TagSlug::from_display(tag);
                                html! {
                                    <Link<Route> to={Route::Tag { slug: slug.as_str().to_string() }} classes={classes!("tag-pill")}>
                                        { tag }
                                    </Link<Route>>
                                }
                            }) }
                        </div>
                    </div>
                }

                <nav class="grid grid-cols-1 md:grid-cols-2 gap-6 mt-12" aria-label="Article navigation">
                    { neighbour_card(related.adjacent.previous, "Previous Article", false) }
                    { neighbour_card(related.adjacent.next, "Next Article", true) }
                </nav>
            </article>

            if !related.related.is_empty() {
                <section class="py-16 bg-brand-dark">
                    <div class="max-w-7xl mx-auto px-4 md:px-8">
                        <h2 class="font-bold text-3xl italic text-white mb-8">{ "Related Articles" }</h2>
                        <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                            { for related.related.iter().map(|item| html! {
                                <ArticleCard article={(*item).clone()} />
                            }) }
                        </div>
                    </div>
                </section>
            }
            <ScrollToTopButton />
        </main>
    }
}
