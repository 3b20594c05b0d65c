use crate::app::App;

mod app;
mod components;
mod helpers;
mod services;
mod tops_sheet;

fn main() {
    yew::Renderer::<App>::new().render();
}
