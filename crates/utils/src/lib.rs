use rand::{distributions::Alphanumeric, thread_rng, Rng};

/// Random alphanumeric string of the given length
pub fn create_random_secret(secret_len: usize) -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(secret_len)
        .map(char::from)
        .collect()
}

/// Keeps only the ascii digits of the input, e.g. "(19) 3656-4903" -> "1936564903"
pub fn only_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_secret_of_given_length() {
        let secret = create_random_secret(16);
        assert_eq!(secret.len(), 16);
        assert!(secret.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(secret, create_random_secret(16));
    }

    #[test]
    fn strips_non_digits() {
        assert_eq!(only_digits("+55 (19) 3656-4903"), "551936564903");
        assert_eq!(only_digits("abc"), "");
    }
}
