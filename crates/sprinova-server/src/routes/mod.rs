pub mod analytics;
pub mod config;
pub mod contact;
pub mod events;
pub mod generate;
pub mod notifications;
pub mod seo;
pub mod site;
