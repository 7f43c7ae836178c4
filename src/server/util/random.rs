use rand::{distr::Alphanumeric, Rng};

/// Generates a random alphanumeric string of the given length.
///
/// Used for authentication token keys and stored upload file names.
pub fn alphanumeric(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}
