pub mod icons;
pub mod sidebar;
pub mod status_card;
