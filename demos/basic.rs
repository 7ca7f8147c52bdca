//! Basic example demonstrating the ConnectWise API client.
//!
//! Run with:
//! ```
//! CONNECTWISE_COMPANY_ID=acme CONNECTWISE_PUBLIC_KEY=... \
//! CONNECTWISE_PRIVATE_KEY=... CONNECTWISE_CLIENT_ID=... \
//! cargo run --example basic
//! ```

use cwapi::{ConnectWiseClient, RequestParams};
use futures::TryStreamExt;

#[tokio::main]
async fn main() -> cwapi::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    // Create client from environment variables
    println!("Creating ConnectWise client...");
    let client = ConnectWiseClient::from_env()?;
    println!("Connected to: {}", client.base_url());

    // Open tickets, first page only
    println!("\n--- Open Tickets (first page) ---");
    let open = RequestParams::new()
        .conditions("closedFlag = false")
        .order_by("id desc");
    let tickets = client.service_tickets();
    let mut seq = tickets.paginated(1, 10, &open).await?;
    let first_page = seq.advance().await?;
    println!(
        "Found {} tickets ({})",
        first_page.len(),
        if seq.is_exhausted() { "no more pages" } else { "more available" }
    );

    for ticket in &first_page {
        println!(
            "  - #{} {} [{}]",
            ticket.id,
            ticket.summary,
            ticket.status_name().unwrap_or("unknown")
        );
    }

    // Notes for the newest ticket
    if let Some(ticket) = first_page.first() {
        println!("\n--- Notes on #{} ---", ticket.id);
        let notes = client
            .service_ticket_notes(ticket.id)
            .list_all(&RequestParams::new())
            .await?;
        println!("Found {} notes", notes.len());
        for note in notes.iter().take(5) {
            let kind = if note.internal_analysis_flag {
                "internal"
            } else if note.resolution_flag {
                "resolution"
            } else {
                "discussion"
            };
            let text = note.text.as_deref().unwrap_or("");
            println!("  - ({kind}) {}", text.lines().next().unwrap_or(""));
        }
    }

    // Every company status, streamed record by record
    println!("\n--- Company Statuses ---");
    let statuses = client.company_statuses();
    let names: Vec<String> = statuses
        .pages(50, &RequestParams::new())?
        .into_items()
        .map_ok(|status| status.name)
        .try_collect()
        .await?;
    println!("{}", names.join(", "));

    // Open projects
    println!("\n--- Open Projects ---");
    let count = client
        .project_projects()
        .count(&RequestParams::new().conditions("closedFlag = false"))
        .await?;
    println!("{count} open projects");

    println!("\nDone!");
    Ok(())
}
