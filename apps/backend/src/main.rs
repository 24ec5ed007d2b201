#[tokio::main]
async fn main() -> anyhow::Result<()> {
    studyly_backend::run().await
}
