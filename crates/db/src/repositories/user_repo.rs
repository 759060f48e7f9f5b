//! Repository for the `users` collection.

use bson::doc;
use futures::TryStreamExt;

use hyperadmin_core::models::User;
use hyperadmin_core::types::DocId;

use super::{clamp_limit, clamp_offset};
use crate::Store;

/// Read operations over users.
pub struct UserRepo;

impl UserRepo {
    /// List users, most recently created first.
    pub async fn list(
        store: &Store,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<User>, mongodb::error::Error> {
        store
            .users()
            .find(doc! {})
            .sort(doc! { "createdAt": -1 })
            .limit(clamp_limit(limit))
            .skip(clamp_offset(offset))
            .await?
            .try_collect()
            .await
    }

    /// Look up a user under either id encoding.
    ///
    /// The canonical 24-hex encoding is tried first; on a miss the raw
    /// string form is tried before reporting not-found. The fallback lives
    /// here alone; callers never issue the two queries themselves.
    pub async fn find_by_id(
        store: &Store,
        id: &str,
    ) -> Result<Option<User>, mongodb::error::Error> {
        let users = store.users();
        if let Some(oid) = DocId::parse(id).as_object_id() {
            if let Some(user) = users.find_one(doc! { "_id": oid }).await? {
                return Ok(Some(user));
            }
        }
        users.find_one(doc! { "_id": id }).await
    }
}
