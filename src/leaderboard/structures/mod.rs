pub mod player_rank_info;
pub mod rank_entry;
