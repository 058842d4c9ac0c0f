use yew::prelude::*;

use crate::hooks::{scroll_window_to_top, use_scrolled_past};

#[function_component(ScrollToTopButton)]
pub fn scroll_to_top_button() -> Html {
    // Shown after 400px of scrolling.
    let show = use_scrolled_past(400.0);

    let onclick = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_window_to_top();
    });

    if show {
        html! {
            <button
                class="scroll-to-top fixed bottom-8 right-8 w-12 h-12 rounded-full bg-brand-gold text-brand-black"
                onclick={onclick}
                aria-label="Back to top"
                title="Back to top"
            >
                <i class="ri-arrow-up-line text-xl" aria-hidden="true"></i>
            </button>
        }
    } else {
        html! {}
    }
}
