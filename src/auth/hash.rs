use super::HASH_ROUNDS;
use sha2::{Digest, Sha256};

/// SHA-256 hex digest of a string.
pub fn hash_password<S: AsRef<str> + ?Sized>(s: &S) -> String {
    let mut digest = Sha256::new();
    digest.update(s.as_ref().as_bytes());
    hex::encode(digest.finalize())
}

/// The stored form of a password: [HASH_ROUNDS] chained digest rounds over
/// `password + salt`.
pub fn hash_password_salted(password: &str, salt: &str) -> String {
    let mut hashed = hash_password(&format!("{}{}", password, salt));
    for _ in 1..HASH_ROUNDS {
        hashed = hash_password(&hashed);
    }
    hashed
}

#[cfg(test)]
mod tests {
    use super::super::HASH_HEX_LENGTH;
    use super::*;

    #[test]
    fn test_hash_password() {
        assert_eq!(
            hash_password("hunter2"),
            "f52fbd32b2b3b86ff88ef6c490628285f482af15ddcb29541f94bcf526a3f6c7"
        );
        assert_eq!(
            hash_password(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_hash_password_salted() {
        let hashed = hash_password_salted("hunter2", "AAAA");
        assert_eq!(hashed, hash_password_salted("hunter2", "AAAA"));
        assert_eq!(hashed.len(), HASH_HEX_LENGTH);
        assert_eq!(
            hashed,
            "5c995457075d6b5c77527c9c6ce31c607ffba8ebb2c8753d8509431ceb0403e6"
        );
        assert_eq!(
            hashed,
            hash_password(&hash_password(&hash_password("hunter2AAAA")))
        );
        assert_ne!(hashed, hash_password_salted("hunter2", "AAAB"));
        assert_ne!(hashed, hash_password_salted("hunter", "2AAAA"));
    }
}
