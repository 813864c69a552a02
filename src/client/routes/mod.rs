pub mod dashboard;
pub mod items;
pub mod login;
pub mod not_found;
pub mod reviews;
pub mod seller_requests;
pub mod users;

pub use dashboard::Dashboard;
pub use items::Items;
pub use login::Login;
pub use not_found::NotFound;
pub use reviews::Reviews;
pub use seller_requests::SellerRequests;
pub use users::Users;
