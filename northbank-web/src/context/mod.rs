//! Application-scoped stores: session and toasts. Both are Yew context
//! providers mounted once at the app root, so their lifecycle is tied to
//! the application rather than to ambient globals.

pub mod session;
pub mod toast;

pub use session::{SessionHandle, SessionProvider, SessionState, use_session};
pub use toast::{ToastHandle, ToastLevel, ToastProvider, use_toast};
