pub mod document_modal;
pub mod table;

pub use document_modal::DocumentModal;
pub use table::SellerRequestTable;
