use std::cell::RefCell;
use std::rc::Rc;

use super::prelude::*;
use super::constants;
use super::checkout::PlaceholderCheckout;
use super::configuration::Configuration;
use super::contact::ContactLinkBuilder;
use super::controllers::{ActionsController, StorefrontActionsController};
use super::populator::Populator;
use super::repository::Repository;
use super::storefront::Storefront;
use super::ui::Ui;
use super::widgets::Window;

/// Keeps the window and its controllers alive for the life of the app.
struct Session {
    ui: Ui,
    _actions: ActionsController,
    _storefront_actions: StorefrontActionsController
}

struct ApplicationState {
    application: adw::Application,
    storefront: Storefront,
    session: RefCell<Option<Session>>
}

pub struct Application {
    state: Rc<ApplicationState>,
}

impl Application {

    pub fn new(configuration: &Configuration) -> Self {
        let application = adw::Application::new(
            Some(constants::APP_ID),
            adw::gio::ApplicationFlags::default()
        );

        let repository = Repository::new(&constants::APP_CATALOG);
        let links = ContactLinkBuilder::new(&configuration.contact_number);
        tracing::info!(
            destination = links.destination(),
            products = repository.products().len(),
            "storefront configured"
        );

        let storefront = Storefront::new(repository, links, PlaceholderCheckout);
        let state = Rc::new(ApplicationState {
            application,
            storefront,
            session: RefCell::new(None)
        });

        Self::setup_signals(&state);

        Self { state }
    }

    fn setup_signals(state: &Rc<ApplicationState>) {
        Self::setup_activate_event(state);
        Self::setup_startup_event(state);
    }

    fn setup_activate_event(state: &Rc<ApplicationState>) {
        let state_weak = Rc::downgrade(state);
        state.application.connect_activate(move |_application| {
            let Some(state) = state_weak.upgrade() else { return };
            let this = Self { state };
            this.setup_ui();
        });
    }

    fn setup_startup_event(state: &Rc<ApplicationState>) {
        state.application.connect_startup(move |application| {
            if let Err(error) = Self::setup_resources() {
                tracing::error!("{error:#}");
                application.quit();
            }
        });
    }

    fn setup_ui(&self) {
        if let Some(session) = self.state.session.borrow().as_ref() {
            session.ui.window().present();
            return;
        }

        let ui = Ui::new(Window::new(&self.state.application));
        Populator::populate(&ui, &self.state.storefront);

        let actions = ActionsController::new(self.state.application.clone(), ui.clone());
        let storefront_actions = StorefrontActionsController::new(ui.clone(), self.state.storefront.clone());

        ui.window().present();
        self.state.session.replace(Some(Session {
            ui,
            _actions: actions,
            _storefront_actions: storefront_actions
        }));
    }

    fn setup_resources() -> Result<()> {
        gtk::glib::set_application_name(constants::APP_TITLE);
        gtk::glib::set_prgname(Some(constants::APP_NAME));
        gtk::gio::resources_register_include_impl(constants::APP_RESOURCES)
            .context("Failed to register bundled resources")?;

        let css_provider = gtk::CssProvider::new();
        css_provider.load_from_resource(&format!("{}/style.css", constants::APP_PREFIX));

        let style_manager = adw::StyleManager::default();
        style_manager.set_color_scheme(adw::ColorScheme::PreferLight);

        let display = gtk::gdk::Display::default().context("Failed to add style provider")?;

        gtk::style_context_add_provider_for_display(
            &display,
            &css_provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );

        Ok(())
    }

    pub fn activate(&self) -> Result<()> {
        let result = self.state.application.run();
        if matches!(result, adw::glib::ExitCode::FAILURE) {
            bail!("Application exited with code {}", result.get());
        }

        Ok(())
    }

}
