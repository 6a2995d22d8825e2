use crate::app::App;

mod app;
mod components;
mod pages;
mod platform;
mod tops_sheet;

fn main() {
    platform::console::init(log::LevelFilter::Info);
    yew::Renderer::<App>::new().render();
}
