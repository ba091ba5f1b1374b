mod api;
mod components;
mod config;
mod error;
mod game;
mod logger;

use components::app::{App, Props};
use config::ClientConfig;
use std::rc::Rc;

fn main() {
    console_error_panic_hook::set_once();
    let logging = logger::init(log::LevelFilter::Info).is_ok();

    let config = ClientConfig::from_build_env().unwrap_or_else(|err| {
        log::error!("{err}; falling back to defaults");
        ClientConfig::default()
    });
    if logging {
        log::set_max_level(config.log_level);
    }
    log::info!("using game server at {}", config.api_base);

    yew::start_app_with_props::<App>(Props {
        config: Rc::new(config),
    });
}
