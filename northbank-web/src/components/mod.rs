pub mod events;
pub mod football;
pub mod layout;
pub mod matches;
pub mod member;
pub mod news;
pub mod standings;
pub mod ui;
