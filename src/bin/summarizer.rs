use lambda_runtime::{Error, run, service_fn};
use photo_catalog::clients::{DynamoRecordStore, LlmClient, S3ObjectStore};
use photo_catalog::prompt::MAX_OUTPUT_TOKENS;
use photo_catalog::summarizer::{SummarizerContext, handler};

#[tokio::main]
async fn main() -> Result<(), Error> {
    photo_catalog::setup_logging();
    let config = photo_catalog::load_config()?;

    let shared = aws_config::from_env().load().await;
    let model = LlmClient::new(
        aws_sdk_bedrockruntime::Client::new(&shared),
        config.model_id.clone(),
        MAX_OUTPUT_TOKENS,
    );
    let ctx = SummarizerContext {
        objects: S3ObjectStore::new(aws_sdk_s3::Client::new(&shared)),
        records: DynamoRecordStore::new(aws_sdk_dynamodb::Client::new(&shared)),
        model,
        config,
    };

    run(service_fn(|event| handler(&ctx, event))).await
}
