//! HTTP surface: a landing page and the cached feed.
//!
//! Handlers only ever read the [`FeedStore`]; serving never blocks on a
//! refresh in flight.

use crate::feed;
use crate::store::FeedStore;
use rocket::http::{ContentType, Status};
use rocket::response::content::RawHtml;
use rocket::response::status;
use rocket::{get, routes, Build, Rocket, State};
use tracing::error;

/// Port the server listens on.
pub const PORT: u16 = 8080;

const LANDING_PAGE: &str = r#"<html><body><h1>Hytale News RSS Feed</h1><p>Access the feed at: <a href="/feed.xml">/feed.xml</a></p></body></html>"#;

#[get("/")]
fn home() -> RawHtml<&'static str> {
    RawHtml(LANDING_PAGE)
}

#[get("/feed.xml")]
async fn serve_feed(
    store: &State<FeedStore>,
) -> Result<(ContentType, String), status::Custom<&'static str>> {
    let Some(doc) = store.current().await else {
        return Err(status::Custom(Status::ServiceUnavailable, "Feed not ready yet"));
    };

    match feed::render_xml(&doc) {
        Ok(xml) => Ok((ContentType::XML, xml)),
        Err(e) => {
            error!(error = %e, "Failed to generate feed");
            Err(status::Custom(Status::InternalServerError, "Failed to generate feed"))
        }
    }
}

/// Assemble the Rocket instance serving the given store.
pub fn rocket(store: FeedStore) -> Rocket<Build> {
    let figment = rocket::Config::figment()
        .merge(("port", PORT))
        .merge(("address", "0.0.0.0"));

    rocket::custom(figment)
        .manage(store)
        .mount("/", routes![home, serve_feed])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::{build_feed, CHANNEL_DESCRIPTION, CHANNEL_LINK, CHANNEL_TITLE};
    use crate::models::NewsItem;
    use rocket::local::asynchronous::Client;

    async fn client_for(store: FeedStore) -> Client {
        Client::tracked(rocket(store))
            .await
            .expect("valid rocket instance")
    }

    fn one_item() -> Vec<NewsItem> {
        vec![NewsItem {
            title: "A New Adventure".to_string(),
            link: "https://hytale.com/news/a-new-adventure".to_string(),
            date: "Fri, 01 Mar 2024 00:00:00 +0000".to_string(),
            description: "The team has been hard at work.".to_string(),
        }]
    }

    #[rocket::async_test]
    async fn test_home_links_to_feed() {
        let client = client_for(FeedStore::new()).await;

        let response = client.get("/").dispatch().await;
        assert_eq!(response.status(), Status::Ok);
        assert_eq!(response.content_type(), Some(ContentType::HTML));

        let body = response.into_string().await.unwrap();
        assert!(body.contains(r#"<a href="/feed.xml">/feed.xml</a>"#));
    }

    #[rocket::async_test]
    async fn test_feed_returns_503_before_first_publish() {
        let client = client_for(FeedStore::new()).await;

        let response = client.get("/feed.xml").dispatch().await;
        assert_eq!(response.status(), Status::ServiceUnavailable);
        assert_eq!(response.into_string().await.unwrap(), "Feed not ready yet");
    }

    #[rocket::async_test]
    async fn test_feed_serves_published_document() {
        let store = FeedStore::new();
        store
            .publish(build_feed(CHANNEL_TITLE, CHANNEL_LINK, CHANNEL_DESCRIPTION, one_item()))
            .await;
        let client = client_for(store).await;

        let response = client.get("/feed.xml").dispatch().await;
        assert_eq!(response.status(), Status::Ok);
        assert_eq!(response.content_type(), Some(ContentType::XML));

        let body = response.into_string().await.unwrap();
        assert!(body.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(body.contains("<title>A New Adventure</title>"));
        assert!(body.contains("<pubDate>Fri, 01 Mar 2024 00:00:00 +0000</pubDate>"));
    }

    #[rocket::async_test]
    async fn test_feed_reflects_latest_publish() {
        let store = FeedStore::new();
        store
            .publish(build_feed(CHANNEL_TITLE, CHANNEL_LINK, CHANNEL_DESCRIPTION, one_item()))
            .await;
        let client = client_for(store.clone()).await;

        let mut replacement = one_item();
        replacement[0].title = "Fresh Update".to_string();
        store
            .publish(build_feed(CHANNEL_TITLE, CHANNEL_LINK, CHANNEL_DESCRIPTION, replacement))
            .await;

        let body = client.get("/feed.xml").dispatch().await.into_string().await.unwrap();
        assert!(body.contains("<title>Fresh Update</title>"));
        assert!(!body.contains("<title>A New Adventure</title>"));
    }
}
