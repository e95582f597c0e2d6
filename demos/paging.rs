use restkit::{PaginatedClient, Resource, ResourceClient};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Product {
    id: u64,
    title: String,
}

impl Resource for Product {}

/// The metadata shape is whatever the server puts under `"page"`.
#[derive(Debug, Deserialize)]
struct PageMeta {
    page: u32,
    size: u32,
    total: u32,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let base_url =
        std::env::var("RESTKIT_BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());

    // Page endpoints answer `{ "page": {...}, "results": [...] }`.
    println!("=== Default page/pageSize keys ===");
    let client = PaginatedClient::new(ResourceClient::new(base_url.clone())?);
    match client.page::<Product, PageMeta>(1, 5, None).await {
        Ok(page) => {
            println!(
                "page {} (size {}) of {} products",
                page.page.page, page.page.size, page.page.total
            );
            for product in &page.results {
                println!("  #{} {}", product.id, product.title);
            }
        }
        Err(e) => eprintln!("Paged fetch failed: {}", e),
    }

    // Servers that name the parameters differently only need renamed keys.
    println!("\n=== Renamed offset/limit keys ===");
    let offset_based = PaginatedClient::new(ResourceClient::new(base_url)?)
        .with_page_keys("offset".to_string(), "limit".to_string());
    match offset_based.page::<Product, PageMeta>(0, 5, None).await {
        Ok(page) => println!("fetched {} products", page.results.len()),
        Err(e) => eprintln!("Paged fetch failed: {}", e),
    }

    // The wrapped client still does plain CRUD against the same backend.
    println!("\n=== Unpaged access through the same client ===");
    match offset_based.resources().all::<Product>(None).await {
        Ok(products) => println!("{} products in total", products.len()),
        Err(e) => eprintln!("Collection fetch failed: {}", e),
    }

    Ok(())
}
