mod widgets;
mod controllers;
mod constants;
mod models;
mod repository;
mod application;
mod prelude;
mod ui;
mod populator;
mod pricing;
mod quote;
mod contact;
mod checkout;
mod storefront;
mod configuration;
mod logging;

fn main() -> anyhow::Result<()> {
    logging::init();
    let configuration = configuration::Configuration::load()?;
    application::Application::new(&configuration).activate()
}
