//! Walks through the TempMailChecker API.
//!
//! Run with `TEMPMAILCHECKER_API_KEY=... cargo run --example basic`.
//! Set `TEMPMAILCHECKER_ENDPOINT` to use another region.

use tempmailchecker::{ClientBuilder, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let client = ClientBuilder::from_env()?.build()?;
    println!("Using endpoint {}", client.endpoint());

    println!("\nEmail addresses");
    for email in ["user@gmail.com", "test@10minutemail.com", "spam@guerrillamail.com"] {
        match client.is_disposable(email).await {
            Ok(true) => println!("{email:<30} disposable"),
            Ok(false) => println!("{email:<30} legitimate"),
            Err(e) => println!("{email:<30} error: {e}"),
        }
    }

    println!("\nFull response");
    match client.check("user@tempmail.com").await {
        Ok(result) => println!(
            "{}",
            serde_json::to_string_pretty(&result).unwrap_or_default()
        ),
        Err(e) => println!("error: {e}"),
    }

    println!("\nDomains");
    for domain in ["gmail.com", "https://tempmail.com/inbox", "mailinator.com"] {
        match client.is_disposable_domain(domain).await {
            Ok(true) => println!("{domain:<30} disposable"),
            Ok(false) => println!("{domain:<30} legitimate"),
            Err(e) => println!("{domain:<30} error: {e}"),
        }
    }

    println!("\nUsage");
    match client.usage().await {
        Ok(usage) => {
            println!("Used today: {} / {}", usage.usage_today, usage.limit);
            println!("Resets: {}", usage.reset);
        }
        Err(e) if e.is_rate_limited() => println!("quota exhausted: {e}"),
        Err(e) => println!("error: {e}"),
    }

    Ok(())
}
