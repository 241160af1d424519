use anyhow::Result;
use blog_storage::Storage;

pub async fn handle(database_url: &str) -> Result<()> {
    let storage = Storage::connect(database_url, 1).await?;
    storage.init_schema().await?;
    storage.close().await;

    println!("posts table ready in {}", database_url);
    Ok(())
}
