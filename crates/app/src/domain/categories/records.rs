//! Category Records

use jiff::Timestamp;
use serde::Serialize;

use crate::uuids::TypedUuid;

/// Category UUID
pub type CategoryUuid = TypedUuid<CategoryRecord>;

/// A node in the catalog tree. Root categories have no parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRecord {
    pub uuid: CategoryUuid,
    pub name: String,
    pub parent: Option<CategoryUuid>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
