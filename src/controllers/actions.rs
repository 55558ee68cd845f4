use super::super::prelude::*;
use super::super::constants;
use super::super::ui::Ui;

pub struct Actions {
    application: adw::Application,
    ui: Ui,
}

impl Actions {
    pub fn new(application: adw::Application, ui: Ui) -> Self {
        let this = Self { application, ui };
        this.setup_quit_action();
        this.setup_about_action();
        this
    }

    fn setup_quit_action(&self) {
        let quit_action = gtk::gio::SimpleAction::new("quit", None);
        let application_weak = self.application.downgrade();
        quit_action.connect_activate(move |_action, _| {
            if let Some(application) = application_weak.upgrade() {
                application.quit();
            }
        });
        self.application.add_action(&quit_action);
        self.application.set_accels_for_action("app.quit", &["<Ctrl>q"]);
    }

    fn setup_about_action(&self) {
        let about_action = gtk::gio::SimpleAction::new("about", None);
        let ui_weak = self.ui.downgrade();
        about_action.connect_activate(move |_action, _| {
            if let Some(ui) = ui_weak.upgrade() {
                Self::present_about_dialog(&ui);
            }
        });
        self.application.add_action(&about_action);
    }

    fn present_about_dialog(ui: &Ui) {
        let dialog = adw::AboutDialog::builder()
            .application_name(constants::APP_TITLE)
            .application_icon(constants::APP_ID)
            .version(constants::APP_VERSION)
            .developer_name(constants::APP_AUTHOR)
            .comments(constants::APP_DESCRIPTION)
            .build();
        dialog.present(Some(ui.window()));
    }

}
