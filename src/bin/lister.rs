use lambda_runtime::{Error, run, service_fn};
use photo_catalog::clients::DynamoRecordStore;
use photo_catalog::lister::{ListerContext, handler};

#[tokio::main]
async fn main() -> Result<(), Error> {
    photo_catalog::setup_logging();
    let config = photo_catalog::load_config()?;

    let shared = aws_config::from_env().load().await;
    let ctx = ListerContext {
        config,
        records: DynamoRecordStore::new(aws_sdk_dynamodb::Client::new(&shared)),
    };

    run(service_fn(|event| handler(&ctx, event))).await
}
