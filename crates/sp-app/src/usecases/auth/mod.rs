//! Login session use cases.

mod get_session;
mod login;
mod logout;

pub use get_session::GetAuthSession;
pub use login::{Login, LoginError};
pub use logout::Logout;
