use anyhow::Result;
use notehub_core::NoteDraft;

use super::Client;

pub(crate) async fn run(client: &Client, title: &str, content: &str, tag: &str) -> Result<()> {
    let draft = match NoteDraft::from_input(title, content, tag) {
        Ok(draft) => draft,
        Err(errors) => {
            for (field, message) in errors.entries() {
                eprintln!("{field}: {message}");
            }
            anyhow::bail!("note rejected by validation");
        },
    };
    let note = client.create(&draft).await?;
    println!("{}", serde_json::to_string_pretty(&note)?);
    Ok(())
}
