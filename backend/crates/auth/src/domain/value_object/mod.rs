//! Value Objects

pub mod avatar;
pub mod email;
pub mod user_id;
pub mod user_password;

pub use avatar::AvatarUrl;
pub use email::Email;
pub use user_id::UserId;
pub use user_password::{RawPassword, UserPassword};
