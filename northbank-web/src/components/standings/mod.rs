pub mod cup_groups;
pub mod standings_table;

pub use cup_groups::CupGroups;
pub use standings_table::StandingsTable;
