#[tokio::main]
async fn main() -> anyhow::Result<()> {
    mir_flashcards_server::run().await
}
