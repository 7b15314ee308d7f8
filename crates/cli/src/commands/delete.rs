use anyhow::Result;

use super::Client;

pub(crate) async fn run(client: &Client, id: &str) -> Result<()> {
    let note = client.delete(id).await?;
    println!("{}", serde_json::to_string_pretty(&note)?);
    Ok(())
}
