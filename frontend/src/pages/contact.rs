use ee9_shared::contact::{ContactFieldError, ContactForm, ContactSubject};
use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{hooks::use_scroll_to_top, router::Route};

const THANK_YOU_VISIBLE_MS: u32 = 6_000;

#[derive(Clone, Copy, PartialEq)]
enum Field {
    Name,
    Email,
    Subject,
    Message,
}

fn field_of(error: ContactFieldError) -> Field {
    match error {
        ContactFieldError::MissingName => Field::Name,
        ContactFieldError::MissingEmail | ContactFieldError::InvalidEmail => Field::Email,
        ContactFieldError::UnknownSubject => Field::Subject,
        ContactFieldError::MissingMessage => Field::Message,
    }
}

fn field_error(errors: &[ContactFieldError], field: Field) -> Html {
    match errors.iter().find(|error| field_of(**error) == field) {
        Some(error) => html! { <p class="text-sm text-red-400 mt-1">{ error.to_string() }</p> },
        None => html! {},
    }
}

fn update_form(
    form: &UseStateHandle<ContactForm>,
    apply: impl Fn(&mut ContactForm, String) + 'static,
) -> impl Fn(String) {
    let form = form.clone();
    move |value: String| {
        let mut next = (*form).clone();
        apply(&mut next, value);
        form.set(next);
    }
}

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    use_scroll_to_top();
    let form = use_state(ContactForm::default);
    let errors = use_state(Vec::<ContactFieldError>::new);
    let submitted = use_state(|| false);
    let timeout = use_mut_ref(|| None::<Timeout>);

    let on_name = {
        let set = update_form(&form, |form, value| form.name = value);
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                set(target.value());
            }
        })
    };
    let on_email = {
        let set = update_form(&form, |form, value| form.email = value);
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                set(target.value());
            }
        })
    };
    let on_subject = {
        let set = update_form(&form, |form, value| form.subject = value);
        Callback::from(move |event: Event| {
            if let Some(target) = event.target_dyn_into::<HtmlSelectElement>() {
                set(target.value());
            }
        })
    };
    let on_message = {
        let set = update_form(&form, |form, value| form.message = value);
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlTextAreaElement>() {
                set(target.value());
            }
        })
    };

    let on_submit = {
        let form = form.clone();
        let errors = errors.clone();
        let submitted = submitted.clone();
        let timeout = timeout.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let problems = form.validate();
            if !problems.is_empty() {
                errors.set(problems);
                submitted.set(false);
                return;
            }
            errors.set(Vec::new());
            form.set(ContactForm::default());
            submitted.set(true);

            let submitted = submitted.clone();
            *timeout.borrow_mut() =
                Some(Timeout::new(THANK_YOU_VISIBLE_MS, move || submitted.set(false)));
        })
    };

    html! {
        <main class="contact-page">
            <section class="pt-32 pb-12 md:pt-40 text-center">
                <h1 class="font-bold text-4xl md:text-6xl italic text-white mb-6">
                    { "Contact " }<span class="text-brand-gold">{ "Us" }</span>
                </h1>
                <p class="text-lg text-brand-neutral">{ "Have questions, suggestions, or feedback? We'd love to hear from you." }</p>
            </section>

            <section class="py-12 bg-brand-dark">
                <div class="max-w-7xl mx-auto px-4 md:px-8 grid grid-cols-1 lg:grid-cols-3 gap-8">
                    <div class="lg:col-span-2 rounded-2xl border border-brand-gold/20 bg-brand-black p-8">
                        <h2 class="font-bold text-2xl text-white mb-6">{ "Send Us a Message" }</h2>
                        if *submitted {
                            <div class="mb-6 rounded-lg border border-green-500/40 bg-green-500/10 p-4 text-green-300" role="status">
                                { "Thank you for your message! We will get back to you soon." }
                            </div>
                        }
                        <form class="space-y-6" onsubmit={on_submit} novalidate=true>
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                                <label class="block">
                                    <span class="block text-sm text-white mb-2">{ "Your Name *" }</span>
                                    <input
                                        type="text"
                                        value={form.name.clone()}
                                        oninput={on_name}
                                        class="w-full px-4 py-3 bg-brand-dark border border-brand-gold/30 rounded-lg text-white"
                                    />
                                    { field_error(&errors, Field::Name) }
                                </label>
                                <label class="block">
                                    <span class="block text-sm text-white mb-2">{ "Email Address *" }</span>
                                    <input
                                        type="email"
                                        value={form.email.clone()}
                                        oninput={on_email}
                                        class="w-full px-4 py-3 bg-brand-dark border border-brand-gold/30 rounded-lg text-white"
                                    />
                                    { field_error(&errors, Field::Email) }
                                </label>
                            </div>
                            <label class="block">
                                <span class="block text-sm text-white mb-2">{ "Subject *" }</span>
                                <select
                                    onchange={on_subject}
                                    class="w-full px-4 py-3 bg-brand-dark border border-brand-gold/30 rounded-lg text-white"
                                >
                                    <option value="" selected={form.subject.is_empty()}>{ "Select a subject" }</option>
                                    { for ContactSubject::ALL.into_iter().map(|subject| html! {
                                        <option value={subject.value()} selected={form.subject == subject.value()}>
                                            { subject.label() }
                                        </option>
                                    }) }
                                </select>
                                { field_error(&errors, Field::Subject) }
                            </label>
                            <label class="block">
                                <span class="block text-sm text-white mb-2">{ "Message *" }</span>
                                <textarea
                                    rows="6"
                                    value={form.message.clone()}
                                    oninput={on_message}
                                    class="w-full px-4 py-3 bg-brand-dark border border-brand-gold/30 rounded-lg text-white"
                                />
                                { field_error(&errors, Field::Message) }
                            </label>
                            <button type="submit" class="btn-gold w-full">{ "Send Message" }</button>
                            <p class="text-sm text-brand-neutral text-center">
                                { "We typically respond within 24-48 hours during business days." }
                            </p>
                        </form>
                    </div>

                    <aside class="space-y-6">
                        <div class="rounded-2xl border border-brand-gold/20 bg-brand-black p-6">
                            <h3 class="font-bold text-lg text-white mb-2">{ "Frequently Asked" }</h3>
                            <p class="text-sm text-brand-neutral mb-3">{ "Check our guides and glossary for quick answers to common questions." }</p>
                            <Link<Route> to={Route::Guides} classes={classes!("text-brand-gold")}>{ "Browse Guides →" }</Link<Route>>
                        </div>
                        <div class="rounded-2xl border border-brand-gold/20 bg-brand-black p-6">
                            <h3 class="font-bold text-lg text-white mb-2">{ "Need Help?" }</h3>
                            <p class="text-sm text-brand-neutral mb-3">{ "If you're experiencing gambling problems, please contact support services." }</p>
                            <Link<Route> to={Route::ResponsibleGambling} classes={classes!("text-brand-gold")}>{ "Get Support →" }</Link<Route>>
                        </div>
                        <div class="rounded-2xl border border-brand-gold/20 bg-brand-black p-6">
                            <h3 class="font-bold text-lg text-white mb-2">{ "Editorial Policy" }</h3>
                            <p class="text-sm text-brand-neutral mb-3">{ "Learn about our content standards and editorial guidelines." }</p>
                            <Link<Route> to={Route::EditorialPolicy} classes={classes!("text-brand-gold")}>{ "Read Policy →" }</Link<Route>>
                        </div>
                    </aside>
                </div>
            </section>

            <section class="py-16">
                <div class="max-w-5xl mx-auto px-4 md:px-8 text-center">
                    <h2 class="font-bold text-3xl text-white mb-2">{ "Other Ways to Connect" }</h2>
                    <p class="text-brand-neutral mb-10">{ "Choose the method that works best for you" }</p>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                        { for [
                            ("ri-mail-line", "Email", "Send us an email anytime", "contact@ee9.com"),
                            ("ri-feedback-line", "Feedback", "Share your thoughts", "feedback@ee9.com"),
                            ("ri-bug-line", "Report Issue", "Found an error?", "support@ee9.com"),
                        ].into_iter().map(|(icon, title, blurb, address)| html! {
                            <div class="rounded-2xl border border-brand-gold/20 p-6">
                                <i class={classes!(icon, "text-3xl", "text-brand-gold")}></i>
                                <h3 class="font-bold text-lg text-white mt-3">{ title }</h3>
                                <p class="text-sm text-brand-neutral mb-2">{ blurb }</p>
                                <a href={format!("mailto:{}", address)} class="text-brand-gold">{ address }</a>
                            </div>
                        }) }
                    </div>
                </div>
            </section>
        </main>
    }
}
