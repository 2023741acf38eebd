pub mod admin_page;
pub mod bookings_table;
pub mod reviews_list;
pub mod sidebar;
pub mod stat_cards;
pub mod toast;
pub mod users_table;
