use common::config::AppConfig;
use gloo_net::http::Request;
use std::rc::Rc;
use yew::platform::spawn_local;
use yew::{classes, html, Component, Context, Html};

use crate::pages::{self, Page};

pub enum Msg {
    ConfigLoaded(AppConfig),
    Select(Page),
}

/// Shell: loads `/config.json` once, then renders the tab bar and the
/// selected page.
pub struct App {
    config: Option<Rc<AppConfig>>,
    page: Page,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::ConfigLoaded(fetch_config().await));
        });
        Self {
            config: None,
            page: Page::Customers,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ConfigLoaded(config) => {
                log::info!("backend at {}", config.api_base_url);
                self.config = Some(Rc::new(config));
                true
            }
            Msg::Select(page) => {
                if self.page == page {
                    return false;
                }
                self.page = page;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="admin-root">
                <nav class="tab-bar">
                    <span class="brand">{"Store Admin"}</span>
                    { for Page::ALL.iter().map(|&page| html! {
                        <button
                            class={classes!("tab-btn", (page == self.page).then_some("active"))}
                            onclick={link.callback(move |_| Msg::Select(page))}
                        >
                            <i class={classes!("fa", page.icon())}></i>
                            <span class="tab-label">{ page.label() }</span>
                        </button>
                    }) }
                </nav>
                <main class="page">
                    {
                        match &self.config {
                            Some(config) => pages::render(self.page, config),
                            None => html! { <p class="muted">{"Loading configuration..."}</p> },
                        }
                    }
                </main>
            </div>
        }
    }
}

/// The host's `/config.json`, or the local default when it is missing or
/// malformed.
async fn fetch_config() -> AppConfig {
    match Request::get("/config.json").send().await {
        Ok(response) if response.ok() => match response.json::<AppConfig>().await {
            Ok(config) => return config,
            Err(err) => log::warn!("invalid /config.json: {err}"),
        },
        Ok(response) => log::warn!("/config.json answered {}", response.status()),
        Err(err) => log::warn!("could not fetch /config.json: {err}"),
    }
    AppConfig::default()
}
