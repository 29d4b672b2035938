mod admin_tests;
mod auth_tests;
mod form_tests;
mod listing_tests;
mod upload_tests;
