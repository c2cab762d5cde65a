pub mod competition_filter;
pub mod countdown;
pub mod latest_match_hero;
pub mod match_card;
pub mod match_list;
pub mod next_match_banner;

pub use competition_filter::CompetitionFilter;
pub use countdown::Countdown;
pub use latest_match_hero::LatestMatchHero;
pub use match_card::MatchCard;
pub use match_list::MatchList;
pub use next_match_banner::NextMatchBanner;
