use yew::prelude::*;

/// A titled block of prose followed by an optional list.
pub struct PolicySection {
    pub title: &'static str,
    pub paragraphs: &'static [&'static str],
    pub items: &'static [&'static str],
    /// Items rendered as `label: text` definition rows instead of bullets.
    pub definitions: &'static [(&'static str, &'static str)],
}

impl PolicySection {
    pub const fn new(title: &'static str) -> Self {
        Self {
            title,
            paragraphs: &[],
            items: &[],
            definitions: &[],
        }
    }

    pub const fn paragraphs(mut self, paragraphs: &'static [&'static str]) -> Self {
        self.paragraphs = paragraphs;
        self
    }

    pub const fn items(mut self, items: &'static [&'static str]) -> Self {
        self.items = items;
        self
    }

    pub const fn definitions(mut self, definitions: &'static [(&'static str, &'static str)]) -> Self {
        self.definitions = definitions;
        self
    }
}

pub fn render_sections(sections: &[PolicySection]) -> Html {
    html! {
        <div class="space-y-12">
            { for sections.iter().map(render_section) }
        </div>
    }
}

fn render_section(section: &PolicySection) -> Html {
    html! {
        <section>
            <h2 class="font-bold text-2xl md:text-3xl text-white mb-4">{ section.title }</h2>
            { for section.paragraphs.iter().map(|paragraph| html! {
                <p class="text-white/85 leading-relaxed mb-4">{ *paragraph }</p>
            }) }
            if !section.definitions.is_empty() {
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4 mb-4">
                    { for section.definitions.iter().map(|(label, text)| html! {
                        <div class="rounded-xl border border-brand-gold/20 p-5">
                            <h3 class="font-semibold text-brand-gold mb-2">{ *label }</h3>
                            <p class="text-sm text-brand-neutral">{ *text }</p>
                        </div>
                    }) }
                </div>
            }
            if !section.items.is_empty() {
                <ul class="space-y-2">
                    { for section.items.iter().map(|item| html! {
                        <li class="flex gap-2 text-white/85">
                            <i class="ri-checkbox-circle-line text-brand-gold mt-1" aria-hidden="true"></i>
                            <span>{ *item }</span>
                        </li>
                    }) }
                </ul>
            }
        </section>
    }
}
