mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::{extract::State, routing::get, Router};
use common::spawn_mock;
use motamot::images::ImageStore;

async fn bucket_server(hits: Arc<AtomicUsize>) -> String {
    let router = Router::new()
        .route(
            "/storage/v1/object/public/images/chat.webp",
            get(|State(hits): State<Arc<AtomicUsize>>| async move {
                hits.fetch_add(1, Ordering::SeqCst);
                b"RIFF fake webp".to_vec()
            }),
        )
        .route(
            "/storage/v1/object/public/images/vide.webp",
            get(|| async { Vec::<u8>::new() }),
        )
        .with_state(hits);
    spawn_mock(router).await
}

fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    format!("http://{}/chat.webp", addr)
}

#[tokio::test]
async fn prefetch_counts_only_loaded_images() {
    let hits = Arc::new(AtomicUsize::new(0));
    let store = ImageStore::new(bucket_server(Arc::clone(&hits)).await, "images");
    let urls = vec![
        store.public_url("chat.webp"),
        store.public_url("absent.webp"),
        unreachable_url(),
    ];

    let loaded = store.prefetch(&urls).await;

    assert_eq!(loaded, 1);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn prefetch_treats_empty_bodies_as_failures() {
    let store = ImageStore::new(bucket_server(Arc::new(AtomicUsize::new(0))).await, "images");
    let urls = vec![store.public_url("vide.webp"), store.public_url("chat.webp")];

    assert_eq!(store.prefetch(&urls).await, 1);
}

#[tokio::test]
async fn prefetch_with_every_url_failing_loads_nothing() {
    let store = ImageStore::new(bucket_server(Arc::new(AtomicUsize::new(0))).await, "images");
    let urls = vec![store.public_url("absent.webp"), unreachable_url()];

    assert_eq!(store.prefetch(&urls).await, 0);
}
