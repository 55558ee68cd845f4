use super::super::prelude::*;
use super::super::storefront::ProductCardModel;
use super::load_product_image;

use std::cell::RefCell;
use std::sync::OnceLock;
use glib::subclass::Signal;

const QUICK_QUOTE_SIGNAL: &str = "quick-quote";
const VIEW_PRODUCTS_SIGNAL: &str = "view-products";

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate, glib::Properties)]
    #[template(resource = "/in/zunera/storefront/hero_section.ui")]
    #[properties(wrapper_type = super::HeroSection)]
    pub struct HeroSection {
        #[template_child(id = "hero-section-revealer")]
        pub revealer: TemplateChild<gtk::Revealer>,
        #[template_child(id = "hero-section-picture")]
        pub picture: TemplateChild<gtk::Picture>,
        #[template_child(id = "hero-section-quote-button")]
        pub quote_button: TemplateChild<gtk::Button>,
        #[template_child(id = "hero-section-products-button")]
        pub products_button: TemplateChild<gtk::Button>,

        #[property(get, set)]
        pub product_name: RefCell<String>,
        #[property(get, set)]
        pub description: RefCell<String>,
        #[property(get, set)]
        pub price_label: RefCell<String>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for HeroSection {
        const NAME: &'static str = "HeroSection";
        type Type = super::HeroSection;
        type ParentType = gtk::Box;

        fn class_init(class: &mut Self::Class) {
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    #[glib::derived_properties]
    impl ObjectImpl for HeroSection {
        fn constructed(&self) {
            self.parent_constructed();
            let obj = self.obj();
            obj.setup_buttons();
            obj.setup_reveal();
        }

        fn signals() -> &'static [Signal] {
            static SIGNALS: OnceLock<[Signal; 2]> = OnceLock::new();
            SIGNALS.get_or_init(|| {
                [
                    Signal::builder(QUICK_QUOTE_SIGNAL).build(),
                    Signal::builder(VIEW_PRODUCTS_SIGNAL).build(),
                ]
            })
        }
    }

    impl WidgetImpl for HeroSection {}
    impl BoxImpl for HeroSection {}
}

glib::wrapper! {
    pub struct HeroSection(ObjectSubclass<imp::HeroSection>)
        @extends gtk::Box, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::Orientable;
}

impl HeroSection {

    fn setup_buttons(&self) {
        let this_weak = self.downgrade();
        self.imp().quote_button.connect_clicked(move |_| {
            if let Some(this) = this_weak.upgrade() {
                this.emit_by_name::<()>(QUICK_QUOTE_SIGNAL, &[]);
            }
        });

        let this_weak = self.downgrade();
        self.imp().products_button.connect_clicked(move |_| {
            if let Some(this) = this_weak.upgrade() {
                this.emit_by_name::<()>(VIEW_PRODUCTS_SIGNAL, &[]);
            }
        });
    }

    // Slide the featured card in the first time the hero is shown.
    fn setup_reveal(&self) {
        self.connect_map(|this| {
            this.imp().revealer.set_reveal_child(true);
        });
    }

    pub fn set_featured(&self, model: &ProductCardModel) {
        self.set_product_name(model.product.name);
        self.set_description(model.product.description);
        self.set_price_label(model.price_label.as_str());
        load_product_image(&self.imp().picture, model.product.image);
    }

    pub fn connect_quick_quote<F>(&self, callback: F) -> glib::SignalHandlerId
    where
        F: Fn(&Self) + 'static
    {
        self.connect_local(QUICK_QUOTE_SIGNAL, false, move |values| {
            if let Ok(this) = values[0].get::<Self>() {
                callback(&this);
            }
            None
        })
    }

    pub fn connect_view_products<F>(&self, callback: F) -> glib::SignalHandlerId
    where
        F: Fn(&Self) + 'static
    {
        self.connect_local(VIEW_PRODUCTS_SIGNAL, false, move |values| {
            if let Ok(this) = values[0].get::<Self>() {
                callback(&this);
            }
            None
        })
    }

}
