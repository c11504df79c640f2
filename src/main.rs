use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    offerbot::run().await
}
