pub mod errors;
pub mod html;

pub use crate::errors::ResultResp;
pub use errors::html_error_response;
pub use html::{css_response, html_response, html_with_status, redirect, redirect_with_cookie};
