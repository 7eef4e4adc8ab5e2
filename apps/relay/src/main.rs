#[tokio::main]
async fn main() -> anyhow::Result<()> {
    els_relay_backend::run().await
}
