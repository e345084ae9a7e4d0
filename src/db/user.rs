/// A user in the database
#[derive(Clone, Debug)]
pub struct User {
    /// The user ID
    pub id: u64,
    /// The user's name
    pub name: String,
    /// Unique user name
    pub username: String,
    /// Stored password. Either a legacy plaintext value or the salted hex
    /// digest.
    pub password: String,
    /// Per-user salt. Empty until the password is hashed.
    pub salt: String,
}
