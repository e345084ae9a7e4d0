use super::SALT_LENGTH;
use rand::Rng;

/// Generate a random per-user salt.
///
/// Only uppercase letters are used so the value is accepted by any storage
/// collation.
pub fn generate_salt() -> String {
    let mut rng = rand::thread_rng();
    let mut salt = String::with_capacity(SALT_LENGTH);
    for _ in 0..SALT_LENGTH {
        salt.push(rng.gen_range(b'A'..=b'Z') as char);
    }
    salt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_salt() {
        let salt = generate_salt();
        assert_eq!(salt.len(), SALT_LENGTH);
        assert!(salt.chars().all(|c| c.is_ascii_uppercase()));
        assert_ne!(salt, generate_salt());
    }
}
