pub mod account;
pub mod dashboard;
pub mod event_detail;
pub mod events;
pub mod fixtures;
pub mod forgot_password;
pub mod login;
pub mod match_detail;
pub mod matches;
pub mod member_card;
pub mod news;
pub mod news_detail;
pub mod not_found;
pub mod profile;
pub mod reset_password;
pub mod standings;
