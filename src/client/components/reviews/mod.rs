pub mod form;
pub mod table;

pub use form::ReviewFormModal;
pub use table::ReviewTable;
