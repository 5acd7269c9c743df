pub mod campsite;
pub mod favorite;
pub mod user;
