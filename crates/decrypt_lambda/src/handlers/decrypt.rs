use decrypt_core::contract::{InvocationOutcome, InvocationResponse, ObjectCreatedEvent};
use decrypt_core::error::DecryptError;
use decrypt_core::storage_keys::decrypted_object_key;
use decrypt_core::transform::decrypt_bytes;
use serde_json::Value;
use tracing::{error, info, info_span};

use crate::adapters::object_store::ObjectStore;

/// Runs one invocation and renders the outcome for the runtime. Every failure
/// is reported as a 500 response; nothing is propagated to the caller.
pub fn handle_decrypt_event(event: Value, store: &dyn ObjectStore) -> InvocationResponse {
    let span = info_span!("decrypt_handler");
    let _entered = span.enter();

    info!(event = %event, "received event");

    let result = process_event(event, store);
    if let Err(failure) = &result {
        error!(error_kind = failure.kind(), error = %failure, "decrypt failed");
    }

    InvocationOutcome::from(result).into_response()
}

/// Reads the object named by `event`, transforms it and writes the result
/// under the derived key. Returns the derived key.
pub fn process_event(event: Value, store: &dyn ObjectStore) -> Result<String, DecryptError> {
    let event = ObjectCreatedEvent::from_value(event)?;
    let bucket = event.bucket();
    let key = event.key();

    info!(
        bucket,
        key,
        event_id = ?event.id,
        event_time = ?event.time,
        reported_size = ?event.detail.object.size,
        "processing file"
    );

    let content = store
        .get_object(bucket, key)
        .map_err(|message| DecryptError::StorageRead {
            bucket: bucket.to_string(),
            key: key.to_string(),
            message,
        })?;
    info!(bytes = content.len(), "file downloaded");

    let decrypted = decrypt_bytes(&content);
    info!(bytes = decrypted.len(), "file decrypted");

    let derived_key = decrypted_object_key(key);
    store
        .put_object(bucket, &derived_key, &decrypted)
        .map_err(|message| DecryptError::StorageWrite {
            bucket: bucket.to_string(),
            key: derived_key.clone(),
            message,
        })?;
    info!(bucket, derived_key = %derived_key, "decrypted file saved");

    Ok(derived_key)
}
