pub mod article_card;
pub mod breadcrumbs;
pub mod faq_list;
pub mod footer;
pub mod header;
pub mod page_hero;
pub mod policy_section;
pub mod scroll_to_top_button;
