pub mod badge;
pub mod format;
pub mod icons;
pub mod stat_card;
pub mod toast;
