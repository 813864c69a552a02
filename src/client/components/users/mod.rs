pub mod form;
pub mod table;

pub use form::UserFormModal;
pub use table::UserTable;
