use super::super::prelude::*;
use super::super::constants;

use std::cell::RefCell;

const COMPANY: &str = "Zunera Co.";

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate, glib::Properties)]
    #[template(resource = "/in/zunera/storefront/site_footer.ui")]
    #[properties(wrapper_type = super::SiteFooter)]
    pub struct SiteFooter {
        #[property(get, set)]
        pub copyright: RefCell<String>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for SiteFooter {
        const NAME: &'static str = "SiteFooter";
        type Type = super::SiteFooter;
        type ParentType = gtk::Box;

        fn class_init(class: &mut Self::Class) {
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    #[glib::derived_properties]
    impl ObjectImpl for SiteFooter {
        fn constructed(&self) {
            self.parent_constructed();
            self.obj().update_copyright();
        }
    }

    impl WidgetImpl for SiteFooter {}
    impl BoxImpl for SiteFooter {}
}

glib::wrapper! {
    pub struct SiteFooter(ObjectSubclass<imp::SiteFooter>)
        @extends gtk::Box, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::Orientable;
}

impl SiteFooter {
    fn update_copyright(&self) {
        let year = glib::DateTime::now_local()
            .map(|now| now.year().to_string())
            .unwrap_or_default();

        self.set_copyright(format!(
            "© {year} {COMPANY} All rights reserved. Developed by {author}",
            author = constants::APP_AUTHOR
        ));
    }
}
