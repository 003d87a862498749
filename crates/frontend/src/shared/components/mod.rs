pub mod area_preview;
pub mod finish_controls;
pub mod stat_card;
