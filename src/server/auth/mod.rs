pub mod login;

pub use login::{AuthLoginContext, AuthLoginRoute};
