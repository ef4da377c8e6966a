pub mod confirm_dialog;
pub mod nav_bar;
pub mod post_detail;
pub mod post_form;
pub mod post_item;
pub mod station_panels;
