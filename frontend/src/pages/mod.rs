pub mod about;
pub mod category;
pub mod contact;
pub mod editorial_policy;
pub mod glossary;
pub mod guides;
pub mod home;
pub mod not_found;
pub mod post;
pub mod privacy_policy;
pub mod responsible_gambling;
pub mod tag;
pub mod tools;
