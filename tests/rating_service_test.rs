//! Rating service tests over in-memory repositories.

mod common;

use std::sync::Arc;

use uuid::Uuid;

use cinedex::domain::DomainEvent;
use cinedex::errors::AppError;
use cinedex::services::{RatingManager, RatingService};
use cinedex::types::PageRequest;

use common::{MemoryRatings, StubTitles, TestRepos};

fn service_with_title(title_id: Uuid) -> (RatingManager<TestRepos>, Arc<TestRepos>) {
    let repos = Arc::new(TestRepos {
        titles: Some(Arc::new(StubTitles::default().with_title(title_id, "Blade Runner"))),
        ratings: Some(Arc::new(MemoryRatings::default())),
        ..TestRepos::default()
    });

    (RatingManager::new(repos.clone()), repos)
}

#[tokio::test]
async fn test_first_rating_is_created() {
    let title_id = Uuid::new_v4();
    let user_id = Uuid::new_v4();
    let (service, repos) = service_with_title(title_id);

    let rating = service
        .rate_title(user_id, title_id, 8, Some("great".to_string()))
        .await
        .unwrap();

    assert_eq!(rating.score, 8);
    assert_eq!(rating.user_id, user_id);
    assert_eq!(repos.events.event_names(), vec!["title_rated"]);
}

#[tokio::test]
async fn test_re_rating_revises_in_place() {
    let title_id = Uuid::new_v4();
    let user_id = Uuid::new_v4();
    let (service, repos) = service_with_title(title_id);

    let first = service.rate_title(user_id, title_id, 5, None).await.unwrap();
    let second = service.rate_title(user_id, title_id, 9, None).await.unwrap();

    // Same row, revised score
    assert_eq!(first.id, second.id);
    assert_eq!(second.score, 9);

    let events = repos.events.recorded();
    assert_eq!(
        repos.events.event_names(),
        vec!["title_rated", "rating_revised"]
    );
    match &events[1] {
        DomainEvent::RatingRevised {
            score,
            previous_score,
            ..
        } => {
            assert_eq!(*score, 9);
            assert_eq!(*previous_score, 5);
        }
        other => panic!("unexpected event: {:?}", other),
    }

    // Only one rating survives for the pair
    let (ratings, total) = service
        .user_ratings(user_id, PageRequest::default())
        .await
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(ratings.len(), 1);
}

#[tokio::test]
async fn test_rating_unknown_title_is_not_found() {
    let (service, repos) = service_with_title(Uuid::new_v4());

    let result = service
        .rate_title(Uuid::new_v4(), Uuid::new_v4(), 7, None)
        .await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
    assert!(repos.events.recorded().is_empty());
}

#[tokio::test]
async fn test_delete_rating_records_event() {
    let title_id = Uuid::new_v4();
    let user_id = Uuid::new_v4();
    let (service, repos) = service_with_title(title_id);

    service.rate_title(user_id, title_id, 6, None).await.unwrap();
    service.delete_rating(user_id, title_id).await.unwrap();

    assert_eq!(
        repos.events.event_names(),
        vec!["title_rated", "rating_removed"]
    );
    assert!(service
        .get_own_rating(user_id, title_id)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_delete_missing_rating_is_not_found() {
    let title_id = Uuid::new_v4();
    let (service, _repos) = service_with_title(title_id);

    let result = service.delete_rating(Uuid::new_v4(), title_id).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn test_title_ratings_requires_existing_title() {
    let (service, _repos) = service_with_title(Uuid::new_v4());

    let result = service
        .title_ratings(Uuid::new_v4(), PageRequest::default())
        .await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}
