pub mod model;
pub mod view;
pub mod view_model;

pub use model::{CreateFormFields, EditFormFields};
pub use view::{CreateProductDialog, EditProductDialog};
