use super::super::prelude::*;
use super::product_card::ProductCard;

use std::cell::{Ref, RefCell};

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate)]
    #[template(resource = "/in/zunera/storefront/product_grid.ui")]
    pub struct ProductGrid {
        #[template_child(id = "product-grid-flow-box")]
        pub flow_box: TemplateChild<gtk::FlowBox>,

        pub cards: RefCell<Vec<ProductCard>>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for ProductGrid {
        const NAME: &'static str = "ProductGrid";
        type Type = super::ProductGrid;
        type ParentType = gtk::Box;

        fn class_init(class: &mut Self::Class) {
            Self::bind_template(class);
            ProductCard::ensure_type();
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    impl ObjectImpl for ProductGrid {}
    impl WidgetImpl for ProductGrid {}
    impl BoxImpl for ProductGrid {}
}

glib::wrapper! {
    pub struct ProductGrid(ObjectSubclass<imp::ProductGrid>)
        @extends gtk::Box, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::Orientable;
}

impl ProductGrid {

    /// Cards are shown in the order they are appended.
    pub fn append_card(&self, card: ProductCard) {
        let imp = self.imp();
        imp.flow_box.append(&card);
        imp.cards.borrow_mut().push(card);
    }

    pub fn cards(&self) -> Ref<'_, Vec<ProductCard>> {
        self.imp().cards.borrow()
    }

}
