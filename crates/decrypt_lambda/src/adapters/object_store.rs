/// Storage collaborator addressed by (bucket, key).
pub trait ObjectStore {
    /// Full content of an existing object; errors when it is absent.
    fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, String>;

    /// Writes `body` at (bucket, key), replacing any existing object.
    fn put_object(&self, bucket: &str, key: &str, body: &[u8]) -> Result<(), String>;
}
