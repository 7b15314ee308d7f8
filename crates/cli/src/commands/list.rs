use anyhow::Result;
use notehub_core::QueryKey;

use super::Client;

pub(crate) async fn run(client: &Client, page: u32, per_page: u32, search: String) -> Result<()> {
    let key = QueryKey::new(page.max(1), search).with_per_page(per_page);
    let listing = client.fetch(&key).await?;
    println!("{}", serde_json::to_string_pretty(&*listing)?);
    Ok(())
}
