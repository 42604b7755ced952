use lambda_runtime::{Error, run, service_fn};
use photo_catalog::clients::S3ObjectStore;
use photo_catalog::renamer::{RenamerContext, handler};

#[tokio::main]
async fn main() -> Result<(), Error> {
    photo_catalog::setup_logging();
    let config = photo_catalog::load_config()?;

    let shared = aws_config::from_env().load().await;
    let ctx = RenamerContext {
        config,
        objects: S3ObjectStore::new(aws_sdk_s3::Client::new(&shared)),
    };

    run(service_fn(|event| handler(&ctx, event))).await
}
