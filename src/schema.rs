//! Entity field schemas — the declarative half of the generic content editor.
//!
//! DESIGN
//! ======
//! Each content section (experience, projects, ...) is described by one
//! `EntitySchema` constant: its table name, its fields, and its
//! create-position policy. Everything generic — draft validation, list
//! splitting, SQL generation, editor behavior — is driven off these
//! constants, so adding a section is one new declaration, not a new module.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// =============================================================================
// FIELD KINDS
// =============================================================================

/// Input kind for a field. Drives parsing of raw form text and the SQL
/// column type (`List` maps to `TEXT[]`, everything else to `TEXT`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    TextArea,
    Url,
    /// Delimiter-split list of strings, trimmed per element.
    List { delimiter: char },
}

impl FieldKind {
    /// Parse raw form text into a field value.
    #[must_use]
    pub fn parse(self, raw: &str) -> FieldValue {
        match self {
            FieldKind::List { delimiter } => FieldValue::List(
                raw.split(delimiter)
                    .map(str::trim)
                    .filter(|part| !part.is_empty())
                    .map(String::from)
                    .collect(),
            ),
            FieldKind::Text | FieldKind::TextArea | FieldKind::Url => FieldValue::Text(raw.to_owned()),
        }
    }
}

/// One field of an entity: name (also the column name), form label,
/// input kind, and whether creation requires it to be non-empty.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

/// Where a newly created row gets its position.
///
/// Both variants exist on purpose: some sections append explicitly at
/// `len + 1`, others leave the column unset until the first reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreatePosition {
    /// Insert without a position; the row sorts after positioned rows.
    ServerDefault,
    /// Insert with `position = current length + 1`.
    Appended,
}

// =============================================================================
// ENTITY SCHEMA
// =============================================================================

/// Declarative description of one editable content collection.
#[derive(Debug, Clone, Copy)]
pub struct EntitySchema {
    /// Table name; also the path segment in the HTTP API.
    pub table: &'static str,
    /// Display title used in notices ("Experience deleted.").
    pub title: &'static str,
    pub fields: &'static [FieldSpec],
    pub create_position: CreatePosition,
}

impl EntitySchema {
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }

    /// Validate and parse a creation draft (raw text per field).
    ///
    /// Required fields must be non-blank; optional fields may be empty.
    /// List-kind fields are delimiter-split and trimmed per element.
    ///
    /// # Errors
    ///
    /// Returns `MissingField` for the first required field left blank.
    pub fn parse_draft(&self, draft: &HashMap<String, String>) -> Result<FieldMap, ValidationError> {
        let mut fields = FieldMap::new();
        for spec in self.fields {
            let raw = draft.get(spec.name).map_or("", String::as_str);
            if spec.required && raw.trim().is_empty() {
                return Err(ValidationError::MissingField(spec.label));
            }
            fields.insert(spec.name.to_owned(), spec.kind.parse(raw));
        }
        Ok(fields)
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required.")]
    MissingField(&'static str),
}

// =============================================================================
// RECORDS
// =============================================================================

/// A single field value: scalar text or a list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

/// Entity-specific field values keyed by field name.
pub type FieldMap = HashMap<String, FieldValue>;

/// One row of a content collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Store-assigned, immutable.
    pub id: i64,
    /// 1-based display rank; `None` until first assigned.
    pub position: Option<i32>,
    #[serde(flatten)]
    pub fields: FieldMap,
}

impl Record {
    /// Text value of a field, or `""` when absent or list-typed.
    #[must_use]
    pub fn text(&self, name: &str) -> &str {
        match self.fields.get(name) {
            Some(FieldValue::Text(value)) => value,
            _ => "",
        }
    }

    /// List value of a field, or an empty slice when absent or scalar.
    #[must_use]
    pub fn list(&self, name: &str) -> &[String] {
        match self.fields.get(name) {
            Some(FieldValue::List(values)) => values,
            _ => &[],
        }
    }
}

// =============================================================================
// ENTITY DECLARATIONS
// =============================================================================

const fn text(name: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec { name, label, kind: FieldKind::Text, required: true }
}

const fn textarea(name: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec { name, label, kind: FieldKind::TextArea, required: true }
}

const fn url(name: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec { name, label, kind: FieldKind::Url, required: false }
}

pub static EXPERIENCE: EntitySchema = EntitySchema {
    table: "experience",
    title: "Experience",
    fields: &[
        text("role", "Role"),
        text("company", "Company"),
        text("duration", "Duration"),
        textarea("description", "Description"),
    ],
    create_position: CreatePosition::ServerDefault,
};

pub static PROJECTS: EntitySchema = EntitySchema {
    table: "projects",
    title: "Project",
    fields: &[
        text("title", "Title"),
        textarea("description", "Description"),
        FieldSpec {
            name: "tech",
            label: "Tech",
            kind: FieldKind::List { delimiter: ',' },
            required: true,
        },
        url("github", "GitHub URL"),
        url("demo", "Live Demo URL"),
    ],
    create_position: CreatePosition::Appended,
};

pub static CERTIFICATIONS: EntitySchema = EntitySchema {
    table: "certifications",
    title: "Certification",
    fields: &[
        text("title", "Title"),
        text("issuer", "Issuer"),
        text("date", "Date"),
        url("certificate_url", "Certificate URL"),
    ],
    create_position: CreatePosition::Appended,
};

pub static AWARDS: EntitySchema = EntitySchema {
    table: "awards",
    title: "Award",
    fields: &[
        text("title", "Title"),
        text("issuer", "Issuer"),
        text("date", "Date"),
        url("award_url", "Award URL"),
    ],
    create_position: CreatePosition::ServerDefault,
};

pub static VOLUNTEERING: EntitySchema = EntitySchema {
    table: "volunteering",
    title: "Volunteering",
    fields: &[
        text("role", "Role"),
        text("company", "Organization"),
        text("start_date", "Start Date"),
        text("end_date", "End Date"),
        textarea("description", "Description"),
    ],
    create_position: CreatePosition::Appended,
};

pub static BLOGS: EntitySchema = EntitySchema {
    table: "blogs",
    title: "Blog",
    fields: &[
        text("title", "Title"),
        text("date_published", "Date Published"),
        textarea("description", "Description"),
    ],
    create_position: CreatePosition::ServerDefault,
};

pub static ENTITIES: [&EntitySchema; 6] =
    [&EXPERIENCE, &PROJECTS, &CERTIFICATIONS, &AWARDS, &VOLUNTEERING, &BLOGS];

/// Look up an entity schema by table name.
#[must_use]
pub fn by_table(table: &str) -> Option<&'static EntitySchema> {
    ENTITIES.iter().find(|schema| schema.table == table).copied()
}

#[cfg(test)]
#[path = "schema_test.rs"]
mod tests;
