use super::super::prelude::*;
use super::super::quote::{QuoteField, QuoteRequest};

use std::sync::OnceLock;
use glib::subclass::Signal;

const SEND_QUOTE_SIGNAL: &str = "send-quote";
const EMAIL_QUOTE_SIGNAL: &str = "email-quote";

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate)]
    #[template(resource = "/in/zunera/storefront/quote_form.ui")]
    pub struct QuoteForm {
        #[template_child(id = "quote-form-company-entry")]
        pub company_entry: TemplateChild<gtk::Entry>,
        #[template_child(id = "quote-form-phone-entry")]
        pub phone_entry: TemplateChild<gtk::Entry>,
        #[template_child(id = "quote-form-details-view")]
        pub details_view: TemplateChild<gtk::TextView>,
        #[template_child(id = "quote-form-send-button")]
        pub send_button: TemplateChild<gtk::Button>,
        #[template_child(id = "quote-form-email-button")]
        pub email_button: TemplateChild<gtk::Button>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for QuoteForm {
        const NAME: &'static str = "QuoteForm";
        type Type = super::QuoteForm;
        type ParentType = gtk::Box;

        fn class_init(class: &mut Self::Class) {
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    impl ObjectImpl for QuoteForm {
        fn constructed(&self) {
            self.parent_constructed();
            self.obj().setup_buttons();
        }

        fn signals() -> &'static [Signal] {
            static SIGNALS: OnceLock<[Signal; 2]> = OnceLock::new();
            SIGNALS.get_or_init(|| {
                [
                    Signal::builder(SEND_QUOTE_SIGNAL).build(),
                    Signal::builder(EMAIL_QUOTE_SIGNAL).build(),
                ]
            })
        }
    }

    impl WidgetImpl for QuoteForm {}
    impl BoxImpl for QuoteForm {}
}

glib::wrapper! {
    pub struct QuoteForm(ObjectSubclass<imp::QuoteForm>)
        @extends gtk::Box, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::Orientable;
}

impl QuoteForm {

    fn setup_buttons(&self) {
        let this_weak = self.downgrade();
        self.imp().send_button.connect_clicked(move |_| {
            if let Some(this) = this_weak.upgrade() {
                this.emit_by_name::<()>(SEND_QUOTE_SIGNAL, &[]);
            }
        });

        let this_weak = self.downgrade();
        self.imp().email_button.connect_clicked(move |_| {
            if let Some(this) = this_weak.upgrade() {
                this.emit_by_name::<()>(EMAIL_QUOTE_SIGNAL, &[]);
            }
        });
    }

    fn details_text(&self) -> glib::GString {
        let buffer = self.imp().details_view.buffer();
        let (start, end) = buffer.bounds();
        buffer.text(&start, &end, false)
    }

    /// Snapshot of what the customer has typed so far.
    pub fn request(&self) -> QuoteRequest {
        let imp = self.imp();
        QuoteRequest::new()
            .with(QuoteField::Company, &imp.company_entry.text())
            .with(QuoteField::Phone, &imp.phone_entry.text())
            .with(QuoteField::Details, &self.details_text())
    }

    pub fn connect_send_quote<F>(&self, callback: F) -> glib::SignalHandlerId
    where
        F: Fn(&Self) + 'static
    {
        self.connect_local(SEND_QUOTE_SIGNAL, false, move |values| {
            if let Ok(this) = values[0].get::<Self>() {
                callback(&this);
            }
            None
        })
    }

    pub fn connect_email_quote<F>(&self, callback: F) -> glib::SignalHandlerId
    where
        F: Fn(&Self) + 'static
    {
        self.connect_local(EMAIL_QUOTE_SIGNAL, false, move |values| {
            if let Ok(this) = values[0].get::<Self>() {
                callback(&this);
            }
            None
        })
    }

}
