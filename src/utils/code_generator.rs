//! Short code generation.

/// Characters allowed in generated codes.
///
/// 32 characters, visually unambiguous (no `0`, `o`, `i`, `l`). The length
/// divides 256, so indexing by a random byte carries no modulo bias.
const CODE_ALPHABET: &[u8] = b"abcdefghjkmnpqrstuvwxyz123456789";

/// Length of a generated short code.
const CODE_LENGTH: usize = 6;

/// Generates a random short code from OS entropy.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_code() -> String {
    let mut buffer = [0u8; CODE_LENGTH];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    buffer
        .iter()
        .map(|&b| CODE_ALPHABET[b as usize % CODE_ALPHABET.len()] as char)
        .collect()
}
