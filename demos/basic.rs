//! Basic example demonstrating the Ethos person hold client.
//!
//! Run with:
//! ```
//! ETHOS_PROXY_URL=https://proxy.example.edu/ethos/ ETHOS_API_KEY=your-key \
//!     cargo run --example basic -- 0123456
//! ```

use ethos_client::{EthosClient, Get, Person};

#[tokio::main]
async fn main() -> ethos_client::Result<()> {
    tracing_subscriber::fmt::init();

    let rcid = std::env::args().nth(1).unwrap_or_else(|| "0123456".to_string());

    println!("Connecting to Ethos proxy...");
    let client = EthosClient::from_env().await?;
    println!("Connected to: {}", client.api_url());

    println!("\n--- Hold Type Catalog ---");
    let types = client.list_hold_types().await?;
    for hold_type in &types {
        println!(
            "  {:<6} {} ({})",
            hold_type.code,
            hold_type.title.as_deref().unwrap_or("-"),
            hold_type.id
        );
    }

    println!("\n--- Person {} ---", rcid);
    let person = Person::get(&client, rcid.clone()).await?;
    println!(
        "  {} {}",
        person.id,
        person.display_name().unwrap_or("(no name)")
    );

    println!("\n--- Holds ---");
    let holds = client.get_holds_by_person_guid(&person.id).await?;
    let now = chrono::Utc::now();
    for hold in &holds {
        let code = hold
            .type_guid()
            .and_then(|guid| types.iter().find(|t| t.id == guid))
            .map_or("?", |t| t.code.as_str());
        let status = if hold.is_active_at(now) { "active" } else { "ended" };
        println!("  {} {:<6} {}", hold.guid().unwrap_or("-"), code, status);
    }
    println!("Found {} holds", holds.len());

    Ok(())
}
