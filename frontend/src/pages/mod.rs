//! The console's pages. Each one is a thin composition of resource panels.

use common::config::AppConfig;
use common::model::{
    About, AboutCard, Banner, Card, ContactInfo, ContactSubmission, Customer, Faq, Marquee, Order,
    Review,
};
use std::rc::Rc;
use yew::prelude::*;

use crate::components::resource::ResourceComponent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Customers,
    Banners,
    Faqs,
    Reviews,
    AboutUs,
    ContactUs,
    Scroller,
    Orders,
    Cards,
}

impl Page {
    pub const ALL: [Page; 9] = [
        Page::Customers,
        Page::Banners,
        Page::Faqs,
        Page::Reviews,
        Page::AboutUs,
        Page::ContactUs,
        Page::Scroller,
        Page::Orders,
        Page::Cards,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Page::Customers => "Customers",
            Page::Banners => "Banners",
            Page::Faqs => "FAQs",
            Page::Reviews => "Reviews",
            Page::AboutUs => "About Us",
            Page::ContactUs => "Contact Us",
            Page::Scroller => "Scroller",
            Page::Orders => "Orders",
            Page::Cards => "Cards",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Page::Customers => "fa-users",
            Page::Banners => "fa-image",
            Page::Faqs => "fa-circle-question",
            Page::Reviews => "fa-star",
            Page::AboutUs => "fa-circle-info",
            Page::ContactUs => "fa-envelope",
            Page::Scroller => "fa-scroll",
            Page::Orders => "fa-cart-shopping",
            Page::Cards => "fa-credit-card",
        }
    }
}

pub fn render(page: Page, app: &Rc<AppConfig>) -> Html {
    let app = app.clone();
    match page {
        Page::Customers => html! { <ResourceComponent<Customer> app={app} heading="Customer List" /> },
        Page::Banners => html! { <ResourceComponent<Banner> app={app} heading="Banner Management" /> },
        Page::Faqs => html! { <ResourceComponent<Faq> app={app} heading="FAQ Management" /> },
        Page::Reviews => html! { <ResourceComponent<Review> app={app} heading="Customer Reviews" /> },
        Page::AboutUs => html! {
            <>
                <ResourceComponent<About> app={app.clone()} heading="About Us" />
                <ResourceComponent<AboutCard> app={app} heading="About Cards" />
            </>
        },
        Page::ContactUs => html! {
            <>
                <ResourceComponent<ContactInfo> app={app.clone()} heading="Contact Information" />
                <ResourceComponent<ContactSubmission> app={app} heading="Contact Submissions" />
            </>
        },
        Page::Scroller => html! { <ResourceComponent<Marquee> app={app} heading="Marquee Manager" /> },
        Page::Orders => html! { <ResourceComponent<Order> app={app} /> },
        Page::Cards => html! { <ResourceComponent<Card> app={app} /> },
    }
}
