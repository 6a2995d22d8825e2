//! Browser implementations of the seams defined in `common::resource`.

pub mod console;
pub mod feedback;
pub mod http;
pub mod previews;

pub use feedback::BrowserFeedback;
pub use http::HttpTransport;
pub use previews::ObjectUrls;
