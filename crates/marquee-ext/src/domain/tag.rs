//! Tag domain types.
//!
//! A tag is a label with one primary name and any number of alternates, each
//! an independent [`TagAlias`] record. Tags may be grouped under a
//! [`TagCategory`] and annotated with usage data when the host joins it in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A label attached to games.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    /// ID of the tag (unique identifier). `None` before first persistence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// When this tag was last modified.
    pub date_modified: DateTime<Utc>,
    /// ID of the primary alias.
    pub primary_alias_id: i64,
    /// The primary alias.
    pub primary_alias: TagAlias,
    /// All names of the tag, the primary alias included.
    pub aliases: Vec<TagAlias>,
    /// ID of the owning category, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    /// The owning category, when joined in by the host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<TagCategory>,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// IDs of games using this tag, when joined in by the host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub games_using: Option<Vec<String>>,
    /// Number of games this tag belongs to, when counted by the host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
}

impl Tag {
    /// Create an unpersisted tag whose primary alias is `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let alias = TagAlias {
            id: 0,
            tag_id: None,
            name: name.into(),
        };
        Self {
            id: None,
            date_modified: Utc::now(),
            primary_alias_id: alias.id,
            primary_alias: alias.clone(),
            aliases: vec![alias],
            category_id: None,
            category: None,
            description: None,
            games_using: None,
            count: None,
        }
    }

    /// The tag's primary name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.primary_alias.name
    }

    /// Whether `name` matches any alias of this tag.
    #[must_use]
    pub fn has_alias(&self, name: &str) -> bool {
        self.aliases.iter().any(|alias| alias.name == name)
    }
}

/// One name of a tag, referencing its owner by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagAlias {
    /// ID of the tag alias (unique identifier).
    pub id: i64,
    /// ID of the owning tag. `None` before first persistence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_id: Option<i64>,
    /// The alias text.
    pub name: String,
}

/// A display grouping for tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagCategory {
    /// ID of the tag category (unique identifier).
    pub id: i64,
    /// Category name.
    pub name: String,
    /// Category display color (CSS color string).
    pub color: String,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Tags in this category.
    pub tags: Vec<Tag>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tag_aliases_include_primary() {
        let tag = Tag::new("platformer");

        assert_eq!(tag.name(), "platformer");
        assert!(tag.id.is_none());
        assert_eq!(tag.aliases.len(), 1);
        assert!(tag.has_alias("platformer"));
        assert!(!tag.has_alias("shooter"));
    }

    #[test]
    fn test_tag_wire_format() {
        let mut tag = Tag::new("adventure");
        tag.id = Some(3);
        tag.count = Some(12);

        let json = serde_json::to_string(&tag).unwrap();
        assert!(json.contains("\"primaryAlias\""));
        assert!(json.contains("\"primaryAliasId\":0"));
        assert!(json.contains("\"count\":12"));
        // Unjoined optional links stay off the wire.
        assert!(!json.contains("gamesUsing"));
        assert!(!json.contains("categoryId"));
    }
}
