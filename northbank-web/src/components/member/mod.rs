pub mod member_card;

pub use member_card::MemberCard;
