use restkit::{IdentifiedResource, Resource, ResourceClient};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

#[derive(Debug, Serialize, Deserialize)]
struct Post {
    id: u64,
    title: String,
    body: String,
    #[serde(rename = "userId")]
    user_id: u64,
}

impl Resource for Post {}

impl IdentifiedResource for Post {
    type Id = u64;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Creation payload: no id yet, the server assigns one. It still posts to
/// the posts collection.
#[derive(Debug, Serialize, Deserialize)]
struct NewPost {
    title: String,
    body: String,
    #[serde(rename = "userId")]
    user_id: u64,
}

impl Resource for NewPost {
    fn path() -> Cow<'static, str> {
        Cow::Borrowed("posts")
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let base_url = std::env::var("RESTKIT_BASE_URL")
        .unwrap_or_else(|_| "https://jsonplaceholder.typicode.com".to_string());
    let client = ResourceClient::new(base_url)?;

    // Example 1: fetch a whole collection
    println!("=== Fetching Posts ===");
    let posts: Vec<Post> = client.all(None).await?;
    println!("Fetched {} posts", posts.len());
    for post in posts.iter().take(5) {
        println!("  #{} {}", post.id, post.title);
    }

    // Example 2: single resource by id
    println!("\n=== Finding One ===");
    let post: Post = client.find(&1, None).await?;
    println!("Post 1 is titled: {}", post.title);

    // Example 3: create from a dedicated payload type
    println!("\n=== Creating ===");
    let created: Post = client
        .create(
            &NewPost {
                title: "hello from restkit".to_string(),
                body: "typed CRUD without hand-rolled URLs".to_string(),
                user_id: 1,
            },
            None,
        )
        .await?;
    println!("Server assigned id {}", created.id);

    // Example 4: update, then delete
    println!("\n=== Updating and Deleting ===");
    match client.update(&post, None).await {
        Ok(updated) => println!("Updated post #{}", updated.id),
        Err(e) => eprintln!("Update failed: {}", e),
    }

    client.delete(&post, None).await?;
    println!("Deleted post #{}", post.id);

    Ok(())
}
