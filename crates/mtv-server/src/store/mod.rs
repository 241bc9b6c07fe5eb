//! The Content Store
//!
//! Single authority over all in-memory collections. The store assigns ids,
//! answers read queries, applies writes, and computes derived values
//! (average ratings). It depends on nothing and never fails: lookups that
//! find nothing return `None`, and shape validation (rating bounds, email
//! format) is the calling layer's job - the store deliberately accepts any
//! `video_id` and any rating value.
//!
//! Collections are `BTreeMap`s keyed by id. Ids come from per-type counters
//! starting at 1 and only ever increase, so iterating in key order yields
//! insertion order. A single `RwLock` around the inner state serializes
//! mutations under concurrent request handling; no operation awaits while
//! holding the lock.

pub mod models;
mod seed;

use std::collections::BTreeMap;

use chrono::Utc;
use tokio::sync::RwLock;

use models::{
    Creator, NewCreator, NewRating, NewSubscription, NewUser, NewVideo, Rating, Subscription,
    User, Video,
};

/// Effective sort rank for a most-moronic video with no explicit rank;
/// larger than any real rank so unranked videos consistently sort last.
const UNRANKED_SORT_KEY: i32 = 999;

#[derive(Debug, Default)]
struct StoreInner {
    users: BTreeMap<i32, User>,
    videos: BTreeMap<i32, Video>,
    creators: BTreeMap<i32, Creator>,
    ratings: BTreeMap<i32, Rating>,
    subscriptions: BTreeMap<i32, Subscription>,

    next_user_id: i32,
    next_video_id: i32,
    next_creator_id: i32,
    next_rating_id: i32,
    next_subscription_id: i32,
}

impl StoreInner {
    fn new() -> Self {
        Self {
            next_user_id: 1,
            next_video_id: 1,
            next_creator_id: 1,
            next_rating_id: 1,
            next_subscription_id: 1,
            ..Default::default()
        }
    }
}

/// In-memory store for all MORONS.TV entities
#[derive(Debug)]
pub struct ContentStore {
    inner: RwLock<StoreInner>,
}

impl ContentStore {
    /// An empty store with all counters at 1
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner::new()),
        }
    }

    /// A store pre-populated with the fixed sample data set
    pub fn seeded() -> Self {
        let mut inner = StoreInner::new();
        seed::populate(&mut inner);
        Self {
            inner: RwLock::new(inner),
        }
    }

    // ========================================================================
    // User operations
    // ========================================================================

    pub async fn get_user(&self, id: i32) -> Option<User> {
        self.inner.read().await.users.get(&id).cloned()
    }

    pub async fn get_user_by_username(&self, username: &str) -> Option<User> {
        let inner = self.inner.read().await;
        inner
            .users
            .values()
            .find(|user| user.username == username)
            .cloned()
    }

    pub async fn get_user_by_email(&self, email: &str) -> Option<User> {
        let inner = self.inner.read().await;
        inner.users.values().find(|user| user.email == email).cloned()
    }

    /// Assigns the next id and stores the user. Uniqueness of username and
    /// email is the caller's responsibility.
    pub async fn create_user(&self, new_user: NewUser) -> User {
        let mut inner = self.inner.write().await;
        let id = inner.next_user_id;
        inner.next_user_id += 1;

        let user = User {
            id,
            username: new_user.username,
            password: new_user.password,
            email: new_user.email,
        };
        inner.users.insert(id, user.clone());
        user
    }

    // ========================================================================
    // Video operations
    // ========================================================================

    /// All videos in insertion order
    pub async fn get_videos(&self) -> Vec<Video> {
        self.inner.read().await.videos.values().cloned().collect()
    }

    pub async fn get_video(&self, id: i32) -> Option<Video> {
        self.inner.read().await.videos.get(&id).cloned()
    }

    /// Videos whose category exactly (case-sensitively) matches
    pub async fn get_videos_by_category(&self, category: &str) -> Vec<Video> {
        let inner = self.inner.read().await;
        inner
            .videos
            .values()
            .filter(|video| video.category == category)
            .cloned()
            .collect()
    }

    /// Featured videos in insertion order
    pub async fn get_featured_videos(&self) -> Vec<Video> {
        let inner = self.inner.read().await;
        inner
            .videos
            .values()
            .filter(|video| video.is_featured)
            .cloned()
            .collect()
    }

    /// Trending videos, views descending; ties keep insertion order
    pub async fn get_trending_videos(&self) -> Vec<Video> {
        let inner = self.inner.read().await;
        let mut videos: Vec<Video> = inner
            .videos
            .values()
            .filter(|video| video.is_trending)
            .cloned()
            .collect();
        videos.sort_by_key(|video| std::cmp::Reverse(video.views));
        videos
    }

    /// Most-moronic videos, rank ascending; videos with no rank sort last,
    /// and ties keep insertion order
    pub async fn get_most_moronic_videos(&self) -> Vec<Video> {
        let inner = self.inner.read().await;
        let mut videos: Vec<Video> = inner
            .videos
            .values()
            .filter(|video| video.is_most_moronic)
            .cloned()
            .collect();
        videos.sort_by_key(|video| video.rank.unwrap_or(UNRANKED_SORT_KEY));
        videos
    }

    /// Assigns the next id and a creation timestamp, stores the video
    pub async fn create_video(&self, new_video: NewVideo) -> Video {
        let mut inner = self.inner.write().await;
        let id = inner.next_video_id;
        inner.next_video_id += 1;

        let video = Video {
            id,
            title: new_video.title,
            description: new_video.description,
            thumbnail_url: new_video.thumbnail_url,
            duration: new_video.duration,
            category: new_video.category,
            views: new_video.views,
            is_featured: new_video.is_featured,
            is_trending: new_video.is_trending,
            is_most_moronic: new_video.is_most_moronic,
            rank: new_video.rank,
            created_at: Utc::now(),
        };
        inner.videos.insert(id, video.clone());
        video
    }

    /// Increments the video's view count by exactly 1 and returns the
    /// updated copy; `None` and no mutation when the id is absent
    pub async fn update_video_views(&self, id: i32) -> Option<Video> {
        let mut inner = self.inner.write().await;
        let video = inner.videos.get_mut(&id)?;
        video.views += 1;
        Some(video.clone())
    }

    // ========================================================================
    // Creator operations
    // ========================================================================

    /// All creators in insertion order
    pub async fn get_creators(&self) -> Vec<Creator> {
        self.inner.read().await.creators.values().cloned().collect()
    }

    pub async fn get_creator(&self, id: i32) -> Option<Creator> {
        self.inner.read().await.creators.get(&id).cloned()
    }

    pub async fn create_creator(&self, new_creator: NewCreator) -> Creator {
        let mut inner = self.inner.write().await;
        let id = inner.next_creator_id;
        inner.next_creator_id += 1;

        let creator = Creator {
            id,
            name: new_creator.name,
            description: new_creator.description,
            image_url: new_creator.image_url,
            specialty: new_creator.specialty,
            followers: new_creator.followers,
        };
        inner.creators.insert(id, creator.clone());
        creator
    }

    // ========================================================================
    // Rating operations
    // ========================================================================

    /// All ratings for the given video id in insertion order. The video is
    /// not required to exist.
    pub async fn get_ratings(&self, video_id: i32) -> Vec<Rating> {
        let inner = self.inner.read().await;
        inner
            .ratings
            .values()
            .filter(|rating| rating.video_id == video_id)
            .cloned()
            .collect()
    }

    /// Assigns the next id and a creation timestamp, stores the rating.
    /// Accepts any `video_id` and any rating value; bounds are checked at
    /// the API boundary.
    pub async fn create_rating(&self, new_rating: NewRating) -> Rating {
        let mut inner = self.inner.write().await;
        let id = inner.next_rating_id;
        inner.next_rating_id += 1;

        let rating = Rating {
            id,
            video_id: new_rating.video_id,
            user_id: new_rating.user_id,
            rating: new_rating.rating,
            created_at: Utc::now(),
        };
        inner.ratings.insert(id, rating.clone());
        rating
    }

    /// Mean of the video's rating values, rounded to one decimal place
    /// (half away from zero); exactly 0 when the video has no ratings
    pub async fn get_average_rating(&self, video_id: i32) -> f64 {
        let inner = self.inner.read().await;
        let ratings: Vec<i32> = inner
            .ratings
            .values()
            .filter(|rating| rating.video_id == video_id)
            .map(|rating| rating.rating)
            .collect();

        if ratings.is_empty() {
            return 0.0;
        }

        let sum: i32 = ratings.iter().sum();
        let mean = f64::from(sum) / ratings.len() as f64;
        (mean * 10.0).round() / 10.0
    }

    // ========================================================================
    // Newsletter subscriptions
    // ========================================================================

    /// Assigns the next id and a subscription timestamp, stores the
    /// subscription. Duplicate emails are not rejected here; the subscribe
    /// flow checks for an existing user first.
    pub async fn create_subscription(&self, new_subscription: NewSubscription) -> Subscription {
        let mut inner = self.inner.write().await;
        let id = inner.next_subscription_id;
        inner.next_subscription_id += 1;

        let subscription = Subscription {
            id,
            email: new_subscription.email,
            subscribed_at: Utc::now(),
        };
        inner.subscriptions.insert(id, subscription.clone());
        subscription
    }
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_video(title: &str) -> NewVideo {
        NewVideo {
            title: title.to_string(),
            description: None,
            thumbnail_url: "https://example.com/thumb.jpg".to_string(),
            duration: "5:00".to_string(),
            category: "health".to_string(),
            views: 0,
            is_featured: false,
            is_trending: false,
            is_most_moronic: false,
            rank: None,
        }
    }

    #[tokio::test]
    async fn test_ids_are_monotonic_from_one() {
        let store = ContentStore::new();
        let first = store.create_video(sample_video("a")).await;
        let second = store.create_video(sample_video("b")).await;
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_create_then_get_round_trip() {
        let store = ContentStore::new();
        let mut new_video = sample_video("round trip");
        new_video.description = Some("desc".to_string());
        new_video.views = 42;

        let created = store.create_video(new_video).await;
        let fetched = store.get_video(created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.title, "round trip");
        assert_eq!(fetched.views, 42);
    }

    #[tokio::test]
    async fn test_get_videos_insertion_order() {
        let store = ContentStore::new();
        for title in ["one", "two", "three"] {
            store.create_video(sample_video(title)).await;
        }
        let titles: Vec<String> = store
            .get_videos()
            .await
            .into_iter()
            .map(|video| video.title)
            .collect();
        assert_eq!(titles, vec!["one", "two", "three"]);
    }

    #[tokio::test]
    async fn test_category_filter_is_case_sensitive() {
        let store = ContentStore::new();
        let mut health = sample_video("health video");
        health.category = "health".to_string();
        let mut upper = sample_video("uppercase");
        upper.category = "Health".to_string();
        store.create_video(health).await;
        store.create_video(upper).await;

        let matches = store.get_videos_by_category("health").await;
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].title, "health video");
        assert!(store.get_videos_by_category("finance").await.is_empty());
    }

    #[tokio::test]
    async fn test_trending_sorted_by_views_descending() {
        let store = ContentStore::new();
        let mut low = sample_video("low");
        low.is_trending = true;
        low.views = 892_000;
        let mut high = sample_video("high");
        high.is_trending = true;
        high.views = 5_800_000;
        let mut not_trending = sample_video("ignored");
        not_trending.views = 9_999_999;

        store.create_video(low).await;
        store.create_video(high).await;
        store.create_video(not_trending).await;

        let trending = store.get_trending_videos().await;
        assert_eq!(trending.len(), 2);
        assert_eq!(trending[0].title, "high");
        assert_eq!(trending[1].title, "low");
    }

    #[tokio::test]
    async fn test_trending_ties_keep_insertion_order() {
        let store = ContentStore::new();
        for title in ["first", "second"] {
            let mut video = sample_video(title);
            video.is_trending = true;
            video.views = 1000;
            store.create_video(video).await;
        }
        let trending = store.get_trending_videos().await;
        assert_eq!(trending[0].title, "first");
        assert_eq!(trending[1].title, "second");
    }

    #[tokio::test]
    async fn test_most_moronic_sorted_by_rank_unranked_last() {
        let store = ContentStore::new();
        let mut unranked = sample_video("unranked");
        unranked.is_most_moronic = true;
        let mut rank_five = sample_video("rank five");
        rank_five.is_most_moronic = true;
        rank_five.rank = Some(5);
        let mut rank_two = sample_video("rank two");
        rank_two.is_most_moronic = true;
        rank_two.rank = Some(2);

        store.create_video(unranked).await;
        store.create_video(rank_five).await;
        store.create_video(rank_two).await;

        let titles: Vec<String> = store
            .get_most_moronic_videos()
            .await
            .into_iter()
            .map(|video| video.title)
            .collect();
        assert_eq!(titles, vec!["rank two", "rank five", "unranked"]);
    }

    #[tokio::test]
    async fn test_featured_insertion_order() {
        let store = ContentStore::new();
        let mut featured = sample_video("featured");
        featured.is_featured = true;
        store.create_video(sample_video("plain")).await;
        store.create_video(featured).await;

        let videos = store.get_featured_videos().await;
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].title, "featured");
    }

    #[tokio::test]
    async fn test_update_video_views_increments_by_one() {
        let store = ContentStore::new();
        let mut video = sample_video("viewed");
        video.views = 10;
        let created = store.create_video(video).await;

        let updated = store.update_video_views(created.id).await.unwrap();
        assert_eq!(updated.views, 11);

        let updated = store.update_video_views(created.id).await.unwrap();
        assert_eq!(updated.views, 12);

        let fetched = store.get_video(created.id).await.unwrap();
        assert_eq!(fetched.views, 12);
    }

    #[tokio::test]
    async fn test_update_video_views_missing_id_is_noop() {
        let store = ContentStore::new();
        let created = store.create_video(sample_video("untouched")).await;

        assert!(store.update_video_views(9999).await.is_none());
        assert_eq!(store.get_video(created.id).await.unwrap().views, 0);
    }

    #[tokio::test]
    async fn test_average_rating_empty_is_zero() {
        let store = ContentStore::new();
        assert_eq!(store.get_average_rating(1).await, 0.0);
    }

    #[tokio::test]
    async fn test_average_rating_rounds_to_one_decimal() {
        let store = ContentStore::new();
        for value in [4, 5] {
            store
                .create_rating(NewRating {
                    video_id: 1,
                    user_id: None,
                    rating: value,
                })
                .await;
        }
        assert_eq!(store.get_average_rating(1).await, 4.5);

        for value in [1, 2, 2] {
            store
                .create_rating(NewRating {
                    video_id: 2,
                    user_id: None,
                    rating: value,
                })
                .await;
        }
        assert_eq!(store.get_average_rating(2).await, 1.7);
    }

    #[tokio::test]
    async fn test_ratings_filtered_by_video_and_unchecked() {
        let store = ContentStore::new();
        // No video with id 42 exists; the store accepts the rating anyway.
        store
            .create_rating(NewRating {
                video_id: 42,
                user_id: Some(7),
                rating: 3,
            })
            .await;
        store
            .create_rating(NewRating {
                video_id: 1,
                user_id: None,
                rating: 5,
            })
            .await;

        let ratings = store.get_ratings(42).await;
        assert_eq!(ratings.len(), 1);
        assert_eq!(ratings[0].user_id, Some(7));
    }

    #[tokio::test]
    async fn test_user_lookups() {
        let store = ContentStore::new();
        let user = store
            .create_user(NewUser {
                username: "moron_one".to_string(),
                password: "hunter2".to_string(),
                email: "one@morons.tv".to_string(),
            })
            .await;

        assert_eq!(store.get_user(user.id).await.unwrap().username, "moron_one");
        assert!(store.get_user_by_username("moron_one").await.is_some());
        assert!(store.get_user_by_email("one@morons.tv").await.is_some());
        assert!(store.get_user_by_email("missing@morons.tv").await.is_none());
    }

    #[tokio::test]
    async fn test_subscriptions_append_only() {
        let store = ContentStore::new();
        let first = store
            .create_subscription(NewSubscription {
                email: "fan@morons.tv".to_string(),
            })
            .await;
        // The store itself accepts a duplicate; the caller enforces
        // uniqueness against the users collection.
        let second = store
            .create_subscription(NewSubscription {
                email: "fan@morons.tv".to_string(),
            })
            .await;

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_seeded_store_sample_data() {
        let store = ContentStore::seeded();
        let videos = store.get_videos().await;
        let creators = store.get_creators().await;

        assert_eq!(videos.len(), 13);
        assert_eq!(creators.len(), 4);
        assert_eq!(store.get_featured_videos().await.len(), 4);
        assert_eq!(store.get_trending_videos().await.len(), 6);

        let moronic = store.get_most_moronic_videos().await;
        assert_eq!(moronic.len(), 3);
        assert_eq!(moronic[0].rank, Some(1));
        assert_eq!(moronic[0].views, 5_800_000);
    }
}
