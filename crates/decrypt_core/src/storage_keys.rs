pub const DECRYPTED_PREFIX: &str = "decrypted/";

/// Destination key for the transformed copy of `source_key`. The source key
/// is used verbatim, so nested paths keep their structure under the prefix.
pub fn decrypted_object_key(source_key: &str) -> String {
    format!("{DECRYPTED_PREFIX}{source_key}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_flat_key() {
        assert_eq!(decrypted_object_key("a.txt"), "decrypted/a.txt");
    }

    #[test]
    fn keeps_nested_key_structure() {
        assert_eq!(
            decrypted_object_key("uploads/2026/10/report.bin"),
            "decrypted/uploads/2026/10/report.bin"
        );
    }

    #[test]
    fn prefixes_already_decrypted_key_again() {
        assert_eq!(
            decrypted_object_key("decrypted/a.txt"),
            "decrypted/decrypted/a.txt"
        );
    }
}
