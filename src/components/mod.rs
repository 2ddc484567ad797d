pub mod add_to_cart;
pub mod feature_list;
pub mod loader;
pub mod message;
pub mod product_header;
pub mod rating;
pub mod review_form;
pub mod reviews_list;
