use super::super::prelude::*;
use super::super::storefront::ProductCardModel;
use super::load_product_image;

use std::cell::{Cell, RefCell};
use std::sync::OnceLock;
use glib::subclass::Signal;

const BUY_NOW_SIGNAL: &str = "buy-now";
const CONTACT_SIGNAL: &str = "contact";

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate, glib::Properties)]
    #[template(resource = "/in/zunera/storefront/product_card.ui")]
    #[properties(wrapper_type = super::ProductCard)]
    pub struct ProductCard {
        #[template_child(id = "product-card-picture")]
        pub picture: TemplateChild<gtk::Picture>,
        #[template_child(id = "product-card-buy-button")]
        pub buy_button: TemplateChild<gtk::Button>,
        #[template_child(id = "product-card-contact-button")]
        pub contact_button: TemplateChild<gtk::Button>,

        #[property(get, set)]
        pub product_name: RefCell<String>,
        #[property(get, set)]
        pub description: RefCell<String>,
        #[property(get, set)]
        pub price_label: RefCell<String>,
        #[property(get, set)]
        pub tags_label: RefCell<String>,
        #[property(get, construct_only)]
        pub index: Cell<u32>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for ProductCard {
        const NAME: &'static str = "ProductCard";
        type Type = super::ProductCard;
        type ParentType = gtk::Box;

        fn class_init(class: &mut Self::Class) {
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    #[glib::derived_properties]
    impl ObjectImpl for ProductCard {
        fn constructed(&self) {
            self.parent_constructed();
            self.obj().setup_buttons();
        }

        fn signals() -> &'static [Signal] {
            static SIGNALS: OnceLock<[Signal; 2]> = OnceLock::new();
            SIGNALS.get_or_init(|| {
                [
                    Signal::builder(BUY_NOW_SIGNAL).build(),
                    Signal::builder(CONTACT_SIGNAL).build(),
                ]
            })
        }
    }

    impl WidgetImpl for ProductCard {}
    impl BoxImpl for ProductCard {}
}

glib::wrapper! {
    pub struct ProductCard(ObjectSubclass<imp::ProductCard>)
        @extends gtk::Box, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::Orientable;
}

impl ProductCard {

    pub fn new(model: &ProductCardModel) -> Self {
        let this: Self = glib::Object::builder()
            .property("product-name", model.product.name)
            .property("description", model.product.description)
            .property("price-label", model.price_label.as_str())
            .property("tags-label", model.tags_label.as_str())
            .property("index", u32::try_from(model.index).unwrap_or(u32::MAX))
            .build();

        load_product_image(&this.imp().picture, model.product.image);
        this
    }

    fn setup_buttons(&self) {
        let this_weak = self.downgrade();
        self.imp().buy_button.connect_clicked(move |_| {
            if let Some(this) = this_weak.upgrade() {
                this.emit_by_name::<()>(BUY_NOW_SIGNAL, &[]);
            }
        });

        let this_weak = self.downgrade();
        self.imp().contact_button.connect_clicked(move |_| {
            if let Some(this) = this_weak.upgrade() {
                this.emit_by_name::<()>(CONTACT_SIGNAL, &[]);
            }
        });
    }

    fn connect_card_signal<F>(&self, signal: &str, callback: F) -> glib::SignalHandlerId
    where
        F: Fn(&Self) + 'static
    {
        self.connect_local(signal, false, move |values| {
            if let Ok(this) = values[0].get::<Self>() {
                callback(&this);
            }
            None
        })
    }

    pub fn connect_buy_now<F>(&self, callback: F) -> glib::SignalHandlerId
    where
        F: Fn(&Self) + 'static
    {
        self.connect_card_signal(BUY_NOW_SIGNAL, callback)
    }

    pub fn connect_contact<F>(&self, callback: F) -> glib::SignalHandlerId
    where
        F: Fn(&Self) + 'static
    {
        self.connect_card_signal(CONTACT_SIGNAL, callback)
    }

}
