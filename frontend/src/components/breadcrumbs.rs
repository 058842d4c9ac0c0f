use yew::prelude::*;
use yew_router::prelude::Link;

use crate::router::Route;

/// One breadcrumb; the last crumb is rendered without a link.
#[derive(Clone, PartialEq)]
pub struct Crumb {
    pub label: String,
    pub route: Option<Route>,
}

impl Crumb {
    pub fn link(label: impl Into<String>, route: Route) -> Self {
        Self {
            label: label.into(),
            route: Some(route),
        }
    }

    pub fn text(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            route: None,
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct BreadcrumbsProps {
    pub crumbs: Vec<Crumb>,
}

#[function_component(Breadcrumbs)]
pub fn breadcrumbs(props: &BreadcrumbsProps) -> Html {
    let last = props.crumbs.len().saturating_sub(1);

    html! {
        <nav class="flex items-center gap-2 text-sm text-brand-neutral mb-4" aria-label="Breadcrumb">
            { for props.crumbs.iter().enumerate().map(|(index, crumb)| {
                let label = match crumb.route.clone() {
                    Some(route) => html! {
                        <Link<Route> to={route} classes={classes!("hover:text-brand-gold")}>
                            { &crumb.label }
                        </Link<Route>>
                    },
                    None if index == last => html! { <span class="text-white">{ &crumb.label }</span> },
                    None => html! { <span class="text-brand-gold">{ &crumb.label }</span> },
                };
                html! {
                    <>
                        { label }
                        if index < last {
                            <i class="ri-arrow-right-s-line" aria-hidden="true"></i>
                        }
                    </>
                }
            }) }
        </nav>
    }
}
