/// Literal appended to every transformed object.
pub const DECRYPTION_TRAILER: &str = "\n I Decrypted this - Samuel Colon\n";

/// Placeholder "decryption": the input reversed, followed by
/// [`DECRYPTION_TRAILER`]. Consumers depend on this exact output.
pub fn decrypt_bytes(input: &[u8]) -> Vec<u8> {
    let mut output = Vec::with_capacity(input.len() + DECRYPTION_TRAILER.len());
    output.extend(input.iter().rev());
    output.extend_from_slice(DECRYPTION_TRAILER.as_bytes());
    output
}
