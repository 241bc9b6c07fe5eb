//! Content store entities
//!
//! All identifiers are store-assigned positive integers, monotonically
//! increasing per entity type and never reused. The `New*` structs are the
//! caller-supplied inputs: every field except the server-assigned id and
//! timestamps. Field names serialize in camelCase to match the public API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered user. Created once, never mutated, never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password: String,
    pub email: String,
}

/// Input for creating a [`User`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub email: String,
}

/// A video on the site.
///
/// The three flags are independent: each controls which query bucket the
/// video appears in. `rank` is only meaningful when `is_most_moronic` is
/// set (lower rank = higher prominence); the store does not enforce the
/// pairing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_url: String,
    /// Display string like "5:46", not seconds
    pub duration: String,
    pub category: String,
    pub views: i32,
    pub is_featured: bool,
    pub is_trending: bool,
    pub is_most_moronic: bool,
    pub rank: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a [`Video`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVideo {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub thumbnail_url: String,
    pub duration: String,
    pub category: String,
    #[serde(default)]
    pub views: i32,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_trending: bool,
    #[serde(default)]
    pub is_most_moronic: bool,
    #[serde(default)]
    pub rank: Option<i32>,
}

/// A content creator. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creator {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub image_url: String,
    pub specialty: String,
    pub followers: i32,
}

/// Input for creating a [`Creator`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCreator {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub image_url: String,
    pub specialty: String,
    #[serde(default)]
    pub followers: i32,
}

/// A rating left on a video. Append-only.
///
/// `video_id` is not checked for existence: a rating may reference a video
/// id that was never created. `user_id` is absent for anonymous ratings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub id: i32,
    pub video_id: i32,
    pub user_id: Option<i32>,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a [`Rating`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRating {
    pub video_id: i32,
    #[serde(default)]
    pub user_id: Option<i32>,
    pub rating: i32,
}

/// A newsletter subscription. Append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: i32,
    pub email: String,
    pub subscribed_at: DateTime<Utc>,
}

/// Input for creating a [`Subscription`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSubscription {
    pub email: String,
}
