pub mod hash;
pub mod login;
pub mod migrate;
pub mod salt;

pub use hash::{hash_password, hash_password_salted};
pub use login::authenticate;
pub use migrate::hash_existing_passwords;
pub use salt::generate_salt;

/// Hex length of a stored password digest. A stored password of any other
/// length is a legacy plaintext value.
pub const HASH_HEX_LENGTH: usize = 64;
/// Number of chained digest rounds applied to `password + salt`.
pub const HASH_ROUNDS: usize = 3;
/// Salt length matches the digest hex length.
pub const SALT_LENGTH: usize = HASH_HEX_LENGTH;
