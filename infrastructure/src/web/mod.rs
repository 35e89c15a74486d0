//! Web page acquisition
//!
//! [`HttpContentSource`] implements the
//! [`ContentSource`](tmclass_application::ContentSource) port with reqwest and
//! reduces HTML to readable text with scraper.

mod fetch;
mod html;

pub use fetch::{HttpContentSource, MAX_BODY_SIZE};
pub use html::html_to_text;
