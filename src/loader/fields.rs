// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Field descriptors for the catalog payload.
//!
//! Each descriptor names the canonical wire field and, where the player's
//! older data uses a different spelling, an accepted alias. The canonical
//! name wins when both are present and the canonical value is not `null`.

use serde_json::{Map, Value};

use crate::error::{FieldPath, LoadError};

pub(super) struct Field {
    name: &'static str,
    alias: Option<&'static str>,
    numeric: bool,
}

pub(super) const PLAYLIST_ID: Field = Field::ident("id");
pub(super) const TRACK_ID: Field = Field::ident("id");
pub(super) const NAME: Field = Field::text("name");
pub(super) const COVER: Field = Field::text("cover");
pub(super) const CREATOR_NAME: Field = Field::text("creatorName");
pub(super) const CREATOR_AVATAR: Field = Field::text("creatorAvatar");
pub(super) const ITEMS: Field = Field::text("items").or("item");

pub(super) const ARTIST: Field = Field::text("artist");
pub(super) const ALBUM: Field = Field::text("album");
pub(super) const SOURCE: Field = Field::text("source");
pub(super) const URL_ID: Field = Field::ident("urlId").or("url_id");
pub(super) const PIC_ID: Field = Field::ident("picId").or("pic_id");
pub(super) const LYRIC_ID: Field = Field::ident("lyricId").or("lyric_id");
pub(super) const PIC: Field = Field::text("pic");
pub(super) const URL: Field = Field::text("url");
pub(super) const LYRIC: Field = Field::text("lyric");

impl Field {
    const fn text(name: &'static str) -> Self {
        Self {
            name,
            alias: None,
            numeric: false,
        }
    }

    /// An identifier field. Numbers are accepted and kept as their decimal
    /// text.
    const fn ident(name: &'static str) -> Self {
        Self {
            name,
            alias: None,
            numeric: true,
        }
    }

    const fn or(self, alias: &'static str) -> Self {
        Self {
            alias: Some(alias),
            ..self
        }
    }

    /// The field's value. A canonical key holding `null` counts as absent, so
    /// the alias is consulted.
    pub(super) fn get<'a>(&self, record: &'a Map<String, Value>) -> Option<&'a Value> {
        record
            .get(self.name)
            .filter(|value| !value.is_null())
            .or_else(|| self.alias.and_then(|alias| record.get(alias)))
    }

    pub(super) fn required(
        &self,
        record: &Map<String, Value>,
        path: FieldPath,
    ) -> Result<String, LoadError> {
        self.read(record, path)?.ok_or(LoadError::MissingField {
            path,
            field: self.name,
        })
    }

    pub(super) fn optional(
        &self,
        record: &Map<String, Value>,
        path: FieldPath,
    ) -> Result<String, LoadError> {
        Ok(self.read(record, path)?.unwrap_or_default())
    }

    fn read(
        &self,
        record: &Map<String, Value>,
        path: FieldPath,
    ) -> Result<Option<String>, LoadError> {
        match self.get(record) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(text)) => Ok(Some(text.clone())),
            Some(Value::Number(number)) if self.numeric => Ok(Some(number.to_string())),
            Some(_) => Err(LoadError::InvalidField {
                path,
                field: self.name,
                expected: if self.numeric {
                    "a string or number"
                } else {
                    "a string"
                },
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn record(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn canonical_name_wins_over_alias() {
        let r = record(json!({ "urlId": "new", "url_id": "old" }));
        assert_eq!(URL_ID.optional(&r, FieldPath::Root).unwrap(), "new");

        let r = record(json!({ "url_id": "old" }));
        assert_eq!(URL_ID.optional(&r, FieldPath::Root).unwrap(), "old");
    }

    #[test]
    fn null_canonical_value_falls_back_to_alias() {
        let r = record(json!({ "urlId": null, "url_id": "old" }));
        assert_eq!(URL_ID.optional(&r, FieldPath::Root).unwrap(), "old");
    }

    #[test]
    fn absent_and_null_are_empty() {
        let r = record(json!({ "artist": null }));
        assert_eq!(ARTIST.optional(&r, FieldPath::Root).unwrap(), "");
        assert_eq!(ALBUM.optional(&r, FieldPath::Root).unwrap(), "");
    }

    #[test]
    fn numbers_only_for_identifiers() {
        let r = record(json!({ "id": 5, "name": 5 }));
        assert_eq!(TRACK_ID.required(&r, FieldPath::Root).unwrap(), "5");
        assert!(matches!(
            NAME.required(&r, FieldPath::Root),
            Err(LoadError::InvalidField { field: "name", .. })
        ));
    }

    #[test]
    fn empty_string_satisfies_required() {
        let r = record(json!({ "name": "" }));
        assert_eq!(NAME.required(&r, FieldPath::Root).unwrap(), "");
    }
}
