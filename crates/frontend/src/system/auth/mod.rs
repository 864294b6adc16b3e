pub mod api;
pub mod guard;
pub mod session;
pub mod storage;

pub use guard::{AccessDenied, RequireAuth, RequirePermission};
pub use session::{use_session, SessionManager, SessionState};
