use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use decrypt_core::contract::InvocationResponse;
use decrypt_lambda::adapters::object_store::ObjectStore;
use decrypt_lambda::config::RuntimeConfig;
use decrypt_lambda::handlers::decrypt::handle_decrypt_event;
use decrypt_lambda::telemetry::init_tracing;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

struct S3ObjectStore {
    s3_client: aws_sdk_s3::Client,
}

impl ObjectStore for S3ObjectStore {
    fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, String> {
        let bucket = bucket.to_string();
        let object_key = key.to_string();
        let client = self.s3_client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                let output = client
                    .get_object()
                    .bucket(bucket)
                    .key(object_key)
                    .send()
                    .await
                    .map_err(|error| DisplayErrorContext(&error).to_string())?;
                let body = output
                    .body
                    .collect()
                    .await
                    .map_err(|error| format!("incomplete object body: {error}"))?;
                Ok::<_, String>(body.into_bytes().to_vec())
            })
        })
    }

    fn put_object(&self, bucket: &str, key: &str, body: &[u8]) -> Result<(), String> {
        let bucket = bucket.to_string();
        let object_key = key.to_string();
        let body_bytes = body.to_vec();
        let client = self.s3_client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .put_object()
                    .bucket(bucket)
                    .key(object_key)
                    .body(ByteStream::from(body_bytes))
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| DisplayErrorContext(&error).to_string())
            })
        })
    }
}

async fn handle_request(
    event: LambdaEvent<Value>,
    store: &S3ObjectStore,
) -> Result<InvocationResponse, Error> {
    Ok(handle_decrypt_event(event.payload, store))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing(&RuntimeConfig::from_env());

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let store = S3ObjectStore {
        s3_client: aws_sdk_s3::Client::new(&aws_config),
    };

    lambda_runtime::run(service_fn(|event: LambdaEvent<Value>| {
        handle_request(event, &store)
    }))
    .await
}
