use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Tag classifying a note. The backend accepts exactly this set.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum NoteTag {
    Todo,
    Work,
    Personal,
    Meeting,
    Shopping,
}

impl NoteTag {
    /// All tags in display order.
    pub const ALL: [Self; 5] =
        [Self::Todo, Self::Work, Self::Personal, Self::Meeting, Self::Shopping];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "Todo",
            Self::Work => "Work",
            Self::Personal => "Personal",
            Self::Meeting => "Meeting",
            Self::Shopping => "Shopping",
        }
    }

    /// The tag following this one in [`Self::ALL`], wrapping around.
    #[must_use]
    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|t| t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// The tag preceding this one in [`Self::ALL`], wrapping around.
    #[must_use]
    pub fn prev(&self) -> Self {
        let idx = Self::ALL.iter().position(|t| t == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for NoteTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for NoteTag {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "todo" => Ok(Self::Todo),
            "work" => Ok(Self::Work),
            "personal" => Ok(Self::Personal),
            "meeting" => Ok(Self::Meeting),
            "shopping" => Ok(Self::Shopping),
            _ => Err(CoreError::InvalidTag),
        }
    }
}

/// A note as stored by the backend. Client-side copies are read-only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Backend-assigned identifier
    pub id: String,
    /// Note title
    pub title: String,
    /// Note body
    pub content: String,
    /// Tag from the fixed set
    pub tag: NoteTag,
    /// When the note was created
    pub created_at: DateTime<Utc>,
    /// When the note was last modified
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn tag_parses_case_insensitively() {
        assert_eq!(NoteTag::from_str("Todo").unwrap(), NoteTag::Todo);
        assert_eq!(NoteTag::from_str("shopping").unwrap(), NoteTag::Shopping);
        assert_eq!(NoteTag::from_str("MEETING").unwrap(), NoteTag::Meeting);
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let err = NoteTag::from_str("Groceries").unwrap_err();
        assert_eq!(err.to_string(), "Invalid tag");
    }

    #[test]
    fn tag_serializes_as_capitalized_name() {
        assert_eq!(serde_json::to_string(&NoteTag::Personal).unwrap(), "\"Personal\"");
    }

    #[test]
    fn tag_cycling_wraps() {
        assert_eq!(NoteTag::Shopping.next(), NoteTag::Todo);
        assert_eq!(NoteTag::Todo.prev(), NoteTag::Shopping);
        assert_eq!(NoteTag::Work.next(), NoteTag::Personal);
    }

    #[test]
    fn note_uses_camel_case_timestamps() {
        let json = serde_json::json!({
            "id": "n1",
            "title": "Weekly sync",
            "content": "agenda",
            "tag": "Meeting",
            "createdAt": "2025-04-01T10:00:00Z",
            "updatedAt": "2025-04-02T09:30:00Z"
        });
        let note: Note = serde_json::from_value(json).unwrap();
        assert_eq!(note.tag, NoteTag::Meeting);
        assert_eq!(note.created_at.to_rfc3339(), "2025-04-01T10:00:00+00:00");
    }
}
