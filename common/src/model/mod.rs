//! Records managed by the console, one module per storefront area.
//!
//! Field names follow the backend's JSON (`_id`, `createdAt`, ...). Values
//! the backend sometimes sends as numbers and sometimes as strings are read
//! leniently through [`lenient`].

mod about;
mod banner;
mod card;
mod contact;
mod customer;
mod faq;
pub mod lenient;
mod marquee;
mod order;
mod review;

pub use about::{About, AboutCard};
pub use banner::Banner;
pub use card::Card;
pub use contact::{ContactInfo, ContactSubmission};
pub use customer::Customer;
pub use faq::Faq;
pub use marquee::Marquee;
pub use order::Order;
pub use review::Review;
