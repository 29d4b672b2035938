pub mod contact;
pub mod dashboard;
pub mod home;
pub mod listing_detail;
pub mod listings;
pub mod login;
pub mod new_listing;

pub use contact::{contact_page, contact_sent_page};
pub use dashboard::{dashboard_page, SettingsVm};
pub use home::home_page;
pub use listing_detail::{listing_detail_page, InquiryPanel};
pub use listings::listings_page;
pub use login::{auth_error_page, login_page};
pub use new_listing::{image_uploader, new_listing_page, UploaderVm};
