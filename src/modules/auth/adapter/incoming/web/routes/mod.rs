pub mod login_admin;
pub mod logout_admin;
pub mod session;

pub use login_admin::{login_admin_handler, LoginRequestDto, LoginResponse};
pub use logout_admin::{logout_admin_handler, LogoutResponseBody};
pub use session::{get_session_handler, SessionResponse};
