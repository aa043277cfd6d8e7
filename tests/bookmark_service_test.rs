//! Bookmark service tests over in-memory repositories.

mod common;

use std::sync::Arc;

use uuid::Uuid;

use cinedex::domain::BookmarkTarget;
use cinedex::errors::AppError;
use cinedex::services::{BookmarkManager, BookmarkService};
use cinedex::types::PageRequest;

use common::{MemoryBookmarks, StubPeople, StubTitles, TestRepos};

struct Fixture {
    service: BookmarkManager<TestRepos>,
    repos: Arc<TestRepos>,
    title_id: Uuid,
    person_id: Uuid,
}

fn fixture() -> Fixture {
    let title_id = Uuid::new_v4();
    let person_id = Uuid::new_v4();

    let repos = Arc::new(TestRepos {
        titles: Some(Arc::new(
            StubTitles::default().with_title(title_id, "Blade Runner"),
        )),
        people: Some(Arc::new(
            StubPeople::default().with_person(person_id, "Harrison Ford"),
        )),
        bookmarks: Some(Arc::new(MemoryBookmarks::default())),
        ..TestRepos::default()
    });

    Fixture {
        service: BookmarkManager::new(repos.clone()),
        repos,
        title_id,
        person_id,
    }
}

#[tokio::test]
async fn test_add_bookmark_for_title_and_person() {
    let f = fixture();
    let user_id = Uuid::new_v4();

    let title_bookmark = f
        .service
        .add_bookmark(user_id, BookmarkTarget::Title, f.title_id, None)
        .await
        .unwrap();
    let person_bookmark = f
        .service
        .add_bookmark(
            user_id,
            BookmarkTarget::Person,
            f.person_id,
            Some("favourite".to_string()),
        )
        .await
        .unwrap();

    assert_eq!(title_bookmark.target, BookmarkTarget::Title);
    assert_eq!(person_bookmark.target, BookmarkTarget::Person);
    assert_eq!(
        f.repos.events.event_names(),
        vec!["bookmark_added", "bookmark_added"]
    );
}

#[tokio::test]
async fn test_duplicate_bookmark_conflicts() {
    let f = fixture();
    let user_id = Uuid::new_v4();

    f.service
        .add_bookmark(user_id, BookmarkTarget::Title, f.title_id, None)
        .await
        .unwrap();
    let result = f
        .service
        .add_bookmark(user_id, BookmarkTarget::Title, f.title_id, None)
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
}

#[tokio::test]
async fn test_bookmarking_missing_target_is_not_found() {
    let f = fixture();

    let result = f
        .service
        .add_bookmark(Uuid::new_v4(), BookmarkTarget::Title, Uuid::new_v4(), None)
        .await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn test_list_resolves_target_names() {
    let f = fixture();
    let user_id = Uuid::new_v4();

    f.service
        .add_bookmark(user_id, BookmarkTarget::Title, f.title_id, None)
        .await
        .unwrap();
    f.service
        .add_bookmark(user_id, BookmarkTarget::Person, f.person_id, None)
        .await
        .unwrap();

    let (bookmarks, total) = f
        .service
        .list_bookmarks(user_id, None, PageRequest::default())
        .await
        .unwrap();

    assert_eq!(total, 2);
    let names: Vec<&str> = bookmarks.iter().map(|b| b.target_name.as_str()).collect();
    assert!(names.contains(&"Blade Runner"));
    assert!(names.contains(&"Harrison Ford"));
}

#[tokio::test]
async fn test_list_filters_by_kind() {
    let f = fixture();
    let user_id = Uuid::new_v4();

    f.service
        .add_bookmark(user_id, BookmarkTarget::Title, f.title_id, None)
        .await
        .unwrap();
    f.service
        .add_bookmark(user_id, BookmarkTarget::Person, f.person_id, None)
        .await
        .unwrap();

    let (bookmarks, total) = f
        .service
        .list_bookmarks(user_id, Some(BookmarkTarget::Person), PageRequest::default())
        .await
        .unwrap();

    assert_eq!(total, 1);
    assert_eq!(bookmarks[0].target, BookmarkTarget::Person);
}

#[tokio::test]
async fn test_remove_bookmark_records_event() {
    let f = fixture();
    let user_id = Uuid::new_v4();

    let bookmark = f
        .service
        .add_bookmark(user_id, BookmarkTarget::Title, f.title_id, None)
        .await
        .unwrap();

    f.service.remove_bookmark(user_id, bookmark.id).await.unwrap();

    assert_eq!(
        f.repos.events.event_names(),
        vec!["bookmark_added", "bookmark_removed"]
    );

    // Another user cannot remove someone else's bookmark
    let result = f.service.remove_bookmark(Uuid::new_v4(), bookmark.id).await;
    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}
