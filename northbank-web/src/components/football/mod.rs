pub mod season_selector;

pub use season_selector::SeasonSelector;
