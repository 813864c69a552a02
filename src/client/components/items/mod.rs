pub mod form;
pub mod table;

pub use form::ItemFormModal;
pub use table::ItemTable;
