//! Search history service tests over an in-memory repository.

mod common;

use std::sync::Arc;

use uuid::Uuid;

use cinedex::errors::AppError;
use cinedex::services::{HistoryManager, HistoryService};
use cinedex::types::PageRequest;

use common::{MemorySearches, TestRepos};

fn service() -> (HistoryManager<TestRepos>, Arc<TestRepos>) {
    let repos = Arc::new(TestRepos {
        searches: Some(Arc::new(MemorySearches::default())),
        ..TestRepos::default()
    });

    (HistoryManager::new(repos.clone()), repos)
}

#[tokio::test]
async fn test_record_and_list_history() {
    let (service, repos) = service();
    let user_id = Uuid::new_v4();

    service
        .record_search(user_id, "blade runner".to_string())
        .await
        .unwrap();
    service
        .record_search(user_id, "alien".to_string())
        .await
        .unwrap();

    let (entries, total) = service
        .list_history(user_id, PageRequest::default())
        .await
        .unwrap();

    assert_eq!(total, 2);
    assert_eq!(entries.len(), 2);
    assert_eq!(
        repos.events.event_names(),
        vec!["search_recorded", "search_recorded"]
    );
}

#[tokio::test]
async fn test_history_is_per_user() {
    let (service, _repos) = service();
    let user_a = Uuid::new_v4();
    let user_b = Uuid::new_v4();

    service
        .record_search(user_a, "blade runner".to_string())
        .await
        .unwrap();

    let (_, total) = service
        .list_history(user_b, PageRequest::default())
        .await
        .unwrap();
    assert_eq!(total, 0);
}

#[tokio::test]
async fn test_delete_single_entry() {
    let (service, _repos) = service();
    let user_id = Uuid::new_v4();

    let entry = service
        .record_search(user_id, "blade runner".to_string())
        .await
        .unwrap();

    service.delete_entry(user_id, entry.id).await.unwrap();

    let (_, total) = service
        .list_history(user_id, PageRequest::default())
        .await
        .unwrap();
    assert_eq!(total, 0);

    // Deleting again reports not found
    let result = service.delete_entry(user_id, entry.id).await;
    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn test_clear_reports_removed_count() {
    let (service, _repos) = service();
    let user_id = Uuid::new_v4();

    for query in ["one", "two", "three"] {
        service
            .record_search(user_id, query.to_string())
            .await
            .unwrap();
    }

    let removed = service.clear_history(user_id).await.unwrap();
    assert_eq!(removed, 3);

    let removed_again = service.clear_history(user_id).await.unwrap();
    assert_eq!(removed_again, 0);
}
