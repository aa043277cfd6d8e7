//! Shared in-memory test doubles for the service test suites.
#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use cinedex::domain::{
    Bookmark, BookmarkTarget, CastMember, DomainEvent, FilmographyEntry, Person, Rating,
    SearchEntry, Title, User, UserRole,
};
use cinedex::errors::{AppError, AppResult};
use cinedex::infra::{
    BookmarkRepository, EventRepository, PersonRepository, RatingRepository, RatingStats,
    Repositories, SearchRepository, TitleRepository, UserRepository,
};
use cinedex::types::PageRequest;

pub fn test_user(id: Uuid) -> User {
    User {
        id,
        email: "test@example.com".to_string(),
        password_hash: "hashed".to_string(),
        name: "Test User".to_string(),
        role: UserRole::User,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

// =============================================================================
// Event log double
// =============================================================================

/// Records appended events for assertions.
#[derive(Default)]
pub struct EventLog {
    events: Mutex<Vec<DomainEvent>>,
}

impl EventLog {
    pub fn recorded(&self) -> Vec<DomainEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn event_names(&self) -> Vec<&'static str> {
        self.recorded().iter().map(|e| e.name()).collect()
    }
}

#[async_trait]
impl EventRepository for EventLog {
    async fn append(&self, event: DomainEvent) -> AppResult<()> {
        self.events.lock().unwrap().push(event);
        Ok(())
    }
}

// =============================================================================
// Catalog doubles
// =============================================================================

/// Title repository double backed by a fixed ID/name set.
#[derive(Default)]
pub struct StubTitles {
    pub known: HashSet<Uuid>,
    pub names: HashMap<Uuid, String>,
}

impl StubTitles {
    pub fn with_title(mut self, id: Uuid, name: &str) -> Self {
        self.known.insert(id);
        self.names.insert(id, name.to_string());
        self
    }
}

#[async_trait]
impl TitleRepository for StubTitles {
    async fn find_by_id(&self, _id: Uuid) -> AppResult<Option<Title>> {
        Ok(None)
    }

    async fn list(
        &self,
        _search: Option<String>,
        _year: Option<i32>,
        _page: PageRequest,
    ) -> AppResult<(Vec<Title>, u64)> {
        Ok((Vec::new(), 0))
    }

    async fn cast(&self, _title_id: Uuid, _page: PageRequest) -> AppResult<(Vec<CastMember>, u64)> {
        Ok((Vec::new(), 0))
    }

    async fn exists(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.known.contains(&id))
    }

    async fn names_by_ids(&self, ids: Vec<Uuid>) -> AppResult<Vec<(Uuid, String)>> {
        Ok(ids
            .into_iter()
            .filter_map(|id| self.names.get(&id).map(|n| (id, n.clone())))
            .collect())
    }
}

/// Person repository double backed by a fixed ID/name set.
#[derive(Default)]
pub struct StubPeople {
    pub known: HashSet<Uuid>,
    pub names: HashMap<Uuid, String>,
}

impl StubPeople {
    pub fn with_person(mut self, id: Uuid, name: &str) -> Self {
        self.known.insert(id);
        self.names.insert(id, name.to_string());
        self
    }
}

#[async_trait]
impl PersonRepository for StubPeople {
    async fn find_by_id(&self, _id: Uuid) -> AppResult<Option<Person>> {
        Ok(None)
    }

    async fn list(
        &self,
        _search: Option<String>,
        _page: PageRequest,
    ) -> AppResult<(Vec<Person>, u64)> {
        Ok((Vec::new(), 0))
    }

    async fn filmography(
        &self,
        _person_id: Uuid,
        _page: PageRequest,
    ) -> AppResult<(Vec<FilmographyEntry>, u64)> {
        Ok((Vec::new(), 0))
    }

    async fn exists(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.known.contains(&id))
    }

    async fn names_by_ids(&self, ids: Vec<Uuid>) -> AppResult<Vec<(Uuid, String)>> {
        Ok(ids
            .into_iter()
            .filter_map(|id| self.names.get(&id).map(|n| (id, n.clone())))
            .collect())
    }
}

// =============================================================================
// Account double
// =============================================================================

/// In-memory user repository.
#[derive(Default)]
pub struct MemoryUsers {
    users: Mutex<HashMap<Uuid, User>>,
}

#[async_trait]
impl UserRepository for MemoryUsers {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_email(&self, email: String) -> AppResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn create(&self, email: String, password_hash: String, name: String) -> AppResult<User> {
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email,
            password_hash,
            name,
            role: UserRole::User,
            created_at: now,
            updated_at: now,
        };

        self.users.lock().unwrap().insert(user.id, user.clone());
        Ok(user)
    }

    async fn update_name(&self, id: Uuid, name: String) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();
        let user = users.get_mut(&id).ok_or(AppError::NotFound)?;
        user.name = name;
        user.updated_at = Utc::now();
        Ok(user.clone())
    }

    async fn update_password(&self, id: Uuid, password_hash: String) -> AppResult<()> {
        let mut users = self.users.lock().unwrap();
        let user = users.get_mut(&id).ok_or(AppError::NotFound)?;
        user.password_hash = password_hash;
        user.updated_at = Utc::now();
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.users
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or(AppError::NotFound)
    }
}

// =============================================================================
// Rating double
// =============================================================================

/// In-memory rating repository keyed by (user, title).
#[derive(Default)]
pub struct MemoryRatings {
    ratings: Mutex<HashMap<(Uuid, Uuid), Rating>>,
}

#[async_trait]
impl RatingRepository for MemoryRatings {
    async fn find_by_user_and_title(
        &self,
        user_id: Uuid,
        title_id: Uuid,
    ) -> AppResult<Option<Rating>> {
        Ok(self
            .ratings
            .lock()
            .unwrap()
            .get(&(user_id, title_id))
            .cloned())
    }

    async fn insert(
        &self,
        user_id: Uuid,
        title_id: Uuid,
        score: i16,
        review: Option<String>,
    ) -> AppResult<Rating> {
        let now = Utc::now();
        let rating = Rating {
            id: Uuid::new_v4(),
            user_id,
            title_id,
            score,
            review,
            created_at: now,
            updated_at: now,
        };

        self.ratings
            .lock()
            .unwrap()
            .insert((user_id, title_id), rating.clone());
        Ok(rating)
    }

    async fn update(&self, id: Uuid, score: i16, review: Option<String>) -> AppResult<Rating> {
        let mut ratings = self.ratings.lock().unwrap();
        let rating = ratings
            .values_mut()
            .find(|r| r.id == id)
            .ok_or(AppError::NotFound)?;

        rating.score = score;
        rating.review = review;
        rating.updated_at = Utc::now();
        Ok(rating.clone())
    }

    async fn delete_by_user_and_title(&self, user_id: Uuid, title_id: Uuid) -> AppResult<()> {
        self.ratings
            .lock()
            .unwrap()
            .remove(&(user_id, title_id))
            .map(|_| ())
            .ok_or(AppError::NotFound)
    }

    async fn list_for_title(
        &self,
        title_id: Uuid,
        _page: PageRequest,
    ) -> AppResult<(Vec<Rating>, u64)> {
        let ratings: Vec<Rating> = self
            .ratings
            .lock()
            .unwrap()
            .values()
            .filter(|r| r.title_id == title_id)
            .cloned()
            .collect();
        let total = ratings.len() as u64;
        Ok((ratings, total))
    }

    async fn list_for_user(
        &self,
        user_id: Uuid,
        _page: PageRequest,
    ) -> AppResult<(Vec<Rating>, u64)> {
        let ratings: Vec<Rating> = self
            .ratings
            .lock()
            .unwrap()
            .values()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        let total = ratings.len() as u64;
        Ok((ratings, total))
    }

    async fn stats_for_title(&self, title_id: Uuid) -> AppResult<RatingStats> {
        let ratings = self.ratings.lock().unwrap();
        let scores: Vec<i16> = ratings
            .values()
            .filter(|r| r.title_id == title_id)
            .map(|r| r.score)
            .collect();

        if scores.is_empty() {
            return Ok(RatingStats {
                average: None,
                count: 0,
            });
        }

        let sum: i64 = scores.iter().map(|s| *s as i64).sum();
        Ok(RatingStats {
            average: Some(sum as f64 / scores.len() as f64),
            count: scores.len() as u64,
        })
    }
}

// =============================================================================
// Bookmark double
// =============================================================================

/// In-memory bookmark repository.
#[derive(Default)]
pub struct MemoryBookmarks {
    bookmarks: Mutex<Vec<Bookmark>>,
}

#[async_trait]
impl BookmarkRepository for MemoryBookmarks {
    async fn find_by_user_and_target(
        &self,
        user_id: Uuid,
        target: BookmarkTarget,
        target_id: Uuid,
    ) -> AppResult<Option<Bookmark>> {
        Ok(self
            .bookmarks
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.user_id == user_id && b.target == target && b.target_id == target_id)
            .cloned())
    }

    async fn insert(
        &self,
        user_id: Uuid,
        target: BookmarkTarget,
        target_id: Uuid,
        note: Option<String>,
    ) -> AppResult<Bookmark> {
        let bookmark = Bookmark {
            id: Uuid::new_v4(),
            user_id,
            target,
            target_id,
            note,
            created_at: Utc::now(),
        };

        self.bookmarks.lock().unwrap().push(bookmark.clone());
        Ok(bookmark)
    }

    async fn delete(&self, user_id: Uuid, id: Uuid) -> AppResult<Bookmark> {
        let mut bookmarks = self.bookmarks.lock().unwrap();
        let index = bookmarks
            .iter()
            .position(|b| b.id == id && b.user_id == user_id)
            .ok_or(AppError::NotFound)?;

        Ok(bookmarks.remove(index))
    }

    async fn list_for_user(
        &self,
        user_id: Uuid,
        kind: Option<BookmarkTarget>,
        _page: PageRequest,
    ) -> AppResult<(Vec<Bookmark>, u64)> {
        let bookmarks: Vec<Bookmark> = self
            .bookmarks
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.user_id == user_id && kind.map_or(true, |k| b.target == k))
            .cloned()
            .collect();
        let total = bookmarks.len() as u64;
        Ok((bookmarks, total))
    }
}

// =============================================================================
// Search history double
// =============================================================================

/// In-memory search history repository.
#[derive(Default)]
pub struct MemorySearches {
    entries: Mutex<Vec<SearchEntry>>,
}

#[async_trait]
impl SearchRepository for MemorySearches {
    async fn insert(&self, user_id: Uuid, query: String) -> AppResult<SearchEntry> {
        let entry = SearchEntry {
            id: Uuid::new_v4(),
            user_id,
            query,
            searched_at: Utc::now(),
        };

        self.entries.lock().unwrap().push(entry.clone());
        Ok(entry)
    }

    async fn list_for_user(
        &self,
        user_id: Uuid,
        _page: PageRequest,
    ) -> AppResult<(Vec<SearchEntry>, u64)> {
        let entries: Vec<SearchEntry> = self
            .entries
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect();
        let total = entries.len() as u64;
        Ok((entries, total))
    }

    async fn delete(&self, user_id: Uuid, id: Uuid) -> AppResult<()> {
        let mut entries = self.entries.lock().unwrap();
        let index = entries
            .iter()
            .position(|e| e.id == id && e.user_id == user_id)
            .ok_or(AppError::NotFound)?;

        entries.remove(index);
        Ok(())
    }

    async fn clear_for_user(&self, user_id: Uuid) -> AppResult<u64> {
        let mut entries = self.entries.lock().unwrap();
        let before = entries.len();
        entries.retain(|e| e.user_id != user_id);
        Ok((before - entries.len()) as u64)
    }
}

// =============================================================================
// Repository set double
// =============================================================================

/// Test repository set; accessors panic for repositories a test
/// did not stub.
pub struct TestRepos {
    pub users: Option<Arc<dyn UserRepository>>,
    pub titles: Option<Arc<dyn TitleRepository>>,
    pub people: Option<Arc<dyn PersonRepository>>,
    pub ratings: Option<Arc<dyn RatingRepository>>,
    pub bookmarks: Option<Arc<dyn BookmarkRepository>>,
    pub searches: Option<Arc<dyn SearchRepository>>,
    pub events: Arc<EventLog>,
}

impl Default for TestRepos {
    fn default() -> Self {
        Self {
            users: None,
            titles: None,
            people: None,
            ratings: None,
            bookmarks: None,
            searches: None,
            events: Arc::new(EventLog::default()),
        }
    }
}

impl Repositories for TestRepos {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone().expect("user repository not stubbed")
    }

    fn titles(&self) -> Arc<dyn TitleRepository> {
        self.titles.clone().expect("title repository not stubbed")
    }

    fn people(&self) -> Arc<dyn PersonRepository> {
        self.people.clone().expect("person repository not stubbed")
    }

    fn ratings(&self) -> Arc<dyn RatingRepository> {
        self.ratings.clone().expect("rating repository not stubbed")
    }

    fn bookmarks(&self) -> Arc<dyn BookmarkRepository> {
        self.bookmarks
            .clone()
            .expect("bookmark repository not stubbed")
    }

    fn searches(&self) -> Arc<dyn SearchRepository> {
        self.searches
            .clone()
            .expect("search repository not stubbed")
    }

    fn events(&self) -> Arc<dyn EventRepository> {
        self.events.clone()
    }
}
