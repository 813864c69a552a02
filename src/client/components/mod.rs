pub mod banner;
pub mod items;
pub mod modal;
pub mod page;
pub mod reviews;
pub mod sellers;
pub mod shell;
pub mod users;

pub use banner::ErrorBanner;
pub use modal::{ConfirmDialog, Modal};
pub use page::Page;
pub use shell::Shell;
