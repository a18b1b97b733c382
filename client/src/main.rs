pub mod app;
pub mod config;
mod match_card;
pub mod results_grid;
pub mod upload_form;
pub mod workflow;

use crate::app::App;
use leptos::mount::mount_to_body;

fn main() {
    console_log::init_with_level(log::Level::Info).expect("logger already initialized");
    mount_to_body(App);
}
