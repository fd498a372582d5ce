pub mod boss;
pub mod collision;
pub mod compute;
pub mod constants;
pub mod entities;
pub mod events;
pub mod menu;
pub mod score_store;
pub mod skills;
