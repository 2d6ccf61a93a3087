pub mod flash;
pub mod header;
pub mod layout;
pub mod modal;
pub mod page;
pub mod pagination;
pub mod protected_layout;
pub mod spinner;

pub use flash::FlashMessages;
pub use header::Header;
pub use layout::Layout;
pub use modal::{ConfirmationModal, Modal};
pub use page::{ErrorPage, LoadingPage, Page};
pub use pagination::Pagination;
pub use protected_layout::{RequiresAdmin, RequiresLoggedIn};
pub use spinner::LoadingIndicator;
