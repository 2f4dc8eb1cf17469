/**
 * Collection Operations
 *
 * Pure transformations over record sequences. Every operation takes a
 * sequence (or a mutable reference to one owned by the caller's Document
 * copy) and leaves no other state behind; persistence is the coordinator's
 * job, not this module's.
 *
 * # Ordering Invariants
 *
 * - Projects and code snippets are prepended (`insert_front`) so collections
 *   stay most-recent-first.
 * - Users are appended (`insert_back`) so signup order is preserved.
 */

use chrono::{DateTime, Utc};

use crate::backend::store::document::User;

/// A record stored in one of the document's collections
///
/// Gives the generic operations access to the identity and timestamps every
/// record shape shares.
pub trait Record {
    /// Unique record id (decimal string of the creation time in millis)
    fn id(&self) -> &str;

    /// Creation timestamp, immutable after insert
    fn created_at(&self) -> DateTime<Utc>;

    /// Stamp the record as modified now
    fn touch(&mut self);
}

/// A record that participates in substring search
pub trait Searchable {
    /// The text fields `filter_substring` matches against
    fn search_text(&self) -> Vec<&str>;
}

/// One page of a collection plus pagination metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Records on this page, at most `limit` of them
    pub items: Vec<T>,
    /// Total records across all pages
    pub total: usize,
    /// The 1-indexed page that was requested
    pub page: usize,
    /// `ceil(total / limit)`
    pub total_pages: usize,
}

/// Prepend a record (most-recent-first collections)
pub fn insert_front<T>(seq: &mut Vec<T>, record: T) {
    seq.insert(0, record);
}

/// Append a record (signup-order collections)
pub fn insert_back<T>(seq: &mut Vec<T>, record: T) {
    seq.push(record);
}

/// Find a record by id
pub fn find_by_id<'a, T: Record>(seq: &'a [T], id: &str) -> Option<&'a T> {
    seq.iter().find(|record| record.id() == id)
}

/// Update the record with the given id in place
///
/// Applies `patch` to the matching record and stamps `updatedAt`. Patch
/// closures must only touch the mutable payload fields; `id` and `createdAt`
/// stay as inserted. Returns the updated record, or `None` when no record
/// matches.
pub fn update_by_id<T: Record + Clone>(
    seq: &mut [T],
    id: &str,
    patch: impl FnOnce(&mut T),
) -> Option<T> {
    let record = seq.iter_mut().find(|record| record.id() == id)?;
    patch(record);
    record.touch();
    Some(record.clone())
}

/// Remove the record with the given id, shifting later elements
pub fn delete_by_id<T: Record>(seq: &mut Vec<T>, id: &str) -> Option<T> {
    let index = seq.iter().position(|record| record.id() == id)?;
    Some(seq.remove(index))
}

/// Case-insensitive substring filter over a record's search fields
///
/// An empty (or whitespace-only) query returns the full sequence.
pub fn filter_substring<T: Searchable + Clone>(seq: &[T], query: &str) -> Vec<T> {
    if query.trim().is_empty() {
        return seq.to_vec();
    }
    let needle = query.to_lowercase();
    seq.iter()
        .filter(|record| {
            record
                .search_text()
                .iter()
                .any(|text| text.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Slice one 1-indexed page out of a sequence
///
/// A page past the end yields an empty slice with the total unchanged;
/// requesting page 0 or limit 0 is treated as 1.
pub fn paginate<T: Clone>(seq: &[T], page: usize, limit: usize) -> Page<T> {
    let page = page.max(1);
    let limit = limit.max(1);
    let total = seq.len();
    let total_pages = total.div_ceil(limit);

    let items = seq
        .iter()
        .skip((page - 1).saturating_mul(limit))
        .take(limit)
        .cloned()
        .collect();

    Page {
        items,
        total,
        page,
        total_pages,
    }
}

/// Whether a username is already taken
///
/// `exclude_id` skips one record, so a rename does not collide with the
/// record being renamed.
pub fn exists_username(users: &[User], username: &str, exclude_id: Option<&str>) -> bool {
    users
        .iter()
        .any(|user| user.username == username && Some(user.id.as_str()) != exclude_id)
}
