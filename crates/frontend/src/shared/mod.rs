pub mod api_utils;
pub mod i18n;
pub mod icons;
pub mod list_binding;
pub mod message_box;
pub mod modal;
pub mod state;
