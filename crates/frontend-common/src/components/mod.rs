mod layout;
mod spinner;

pub use layout::{Layout, NavLink, NavLinks};
pub use spinner::LoadingSpinner as Spinner;
