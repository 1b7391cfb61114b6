//! Per-table special cases.
//!
//! Most tables are handled generically. The few that are not get a
//! [`TableProfile`] here: a join used to show a parent's name instead of a
//! foreign key, a required-field rule checked before inserting, or rules
//! applied to every fetched row.

use serde_json::Value;

use crate::{models::Row, DbError};

/// One output column of a join view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// A column of the table itself.
    Own(&'static str),
    /// A column of the referenced parent row, renamed to `alias`.
    Parent {
        column: &'static str,
        alias: &'static str,
    },
}

/// Display query that resolves `foreign_key` against `parent.parent_key`.
#[derive(Debug, Clone, Copy)]
pub struct JoinView {
    pub parent: &'static str,
    pub foreign_key: &'static str,
    pub parent_key: &'static str,
    pub projection: &'static [Projection],
}

/// Fields that must be present (and truthy) before an insert is attempted.
///
/// When a rule applies, only these fields are inserted.
#[derive(Debug, Clone, Copy)]
pub struct RequiredFields {
    pub fields: &'static [&'static str],
    pub message: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowRule {
    /// Keep an `interval` column as PostgreSQL's textual form (`5 years`),
    /// never a structured value.
    IntervalAsText(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct TableProfile {
    pub table: &'static str,
    pub view: Option<JoinView>,
    pub required: Option<RequiredFields>,
    pub row_rules: &'static [RowRule],
}

static PROFILES: &[TableProfile] = &[
    TableProfile {
        table: "города",
        view: Some(JoinView {
            parent: "регионы",
            foreign_key: "регион_id",
            parent_key: "id",
            projection: &[
                Projection::Own("id"),
                Projection::Parent { column: "название", alias: "регион" },
                Projection::Own("название"),
            ],
        }),
        required: Some(RequiredFields {
            fields: &["регион_id", "название"],
            message: "Необходимо указать регион и название города",
        }),
        row_rules: &[],
    },
    TableProfile {
        table: "улицы",
        view: Some(JoinView {
            parent: "города",
            foreign_key: "город_id",
            parent_key: "id",
            projection: &[
                Projection::Own("id"),
                Projection::Parent { column: "название", alias: "город" },
                Projection::Own("название"),
            ],
        }),
        required: Some(RequiredFields {
            fields: &["город_id", "название"],
            message: "Необходимо указать город и название улицы",
        }),
        row_rules: &[],
    },
    TableProfile {
        table: "предметы",
        view: Some(JoinView {
            parent: "улицы",
            foreign_key: "улица_id",
            parent_key: "id",
            projection: &[
                Projection::Own("id"),
                Projection::Parent { column: "название", alias: "улица" },
                Projection::Own("дом"),
                Projection::Own("квартира"),
                Projection::Own("площадь"),
                Projection::Own("назначение"),
            ],
        }),
        required: None,
        row_rules: &[],
    },
    TableProfile {
        table: "договоры_социального_найма",
        view: None,
        required: None,
        row_rules: &[RowRule::IntervalAsText("срок")],
    },
];

/// Look up the profile for `table`; `None` means generic handling.
pub fn profile(table: &str) -> Option<&'static TableProfile> {
    PROFILES.iter().find(|p| p.table == table)
}

pub fn all() -> &'static [TableProfile] {
    PROFILES
}

impl RequiredFields {
    /// Check the payload and return an object holding only the required fields.
    pub fn extract(&self, payload: &Row) -> Result<Row, DbError> {
        let mut picked = Row::new();
        for field in self.fields {
            match payload.get(*field) {
                Some(value) if is_truthy(value) => {
                    picked.insert((*field).to_string(), value.clone());
                }
                _ => return Err(DbError::MissingFields(self.message)),
            }
        }
        Ok(picked)
    }
}

impl RowRule {
    pub fn apply(&self, row: &mut Row) {
        match self {
            Self::IntervalAsText(column) => {
                if let Some(value) = row.get_mut(*column) {
                    if !value.is_null() && !value.is_string() {
                        *value = Value::String(value.to_string());
                    }
                }
            }
        }
    }
}

impl TableProfile {
    pub fn apply_row_rules(&self, row: &mut Row) {
        for rule in self.row_rules {
            rule.apply(row);
        }
    }
}

/// Null, `false`, zero, and empty strings/collections count as absent.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> Row {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn unknown_tables_have_no_profile() {
        assert!(profile("лица").is_none());
        assert!(profile("").is_none());
    }

    #[test]
    fn three_tables_are_displayed_through_joins() {
        let joined: Vec<_> = all()
            .iter()
            .filter(|p| p.view.is_some())
            .map(|p| p.table)
            .collect();
        assert_eq!(joined, vec!["города", "улицы", "предметы"]);
    }

    #[test]
    fn two_tables_validate_required_fields() {
        let validated: Vec<_> = all()
            .iter()
            .filter(|p| p.required.is_some())
            .map(|p| p.table)
            .collect();
        assert_eq!(validated, vec!["города", "улицы"]);
    }

    #[test]
    fn city_insert_keeps_only_required_fields() {
        let rule = profile("города").and_then(|p| p.required).unwrap();
        let payload = obj(json!({"регион_id": 1, "название": "Тверь", "лишнее": "x"}));
        let picked = rule.extract(&payload).unwrap();
        assert_eq!(Value::Object(picked), json!({"регион_id": 1, "название": "Тверь"}));
    }

    #[test]
    fn city_insert_without_region_is_rejected() {
        let rule = profile("города").and_then(|p| p.required).unwrap();
        let err = rule.extract(&obj(json!({"название": "Тверь"}))).unwrap_err();
        assert_eq!(err.to_string(), "Необходимо указать регион и название города");
    }

    #[test]
    fn street_insert_rejects_falsy_values() {
        let rule = profile("улицы").and_then(|p| p.required).unwrap();
        for payload in [
            json!({"город_id": 0, "название": "Ленина"}),
            json!({"город_id": 3, "название": ""}),
            json!({"город_id": null, "название": "Ленина"}),
        ] {
            let err = rule.extract(&obj(payload)).unwrap_err();
            assert_eq!(err.to_string(), "Необходимо указать город и название улицы");
        }
    }

    #[test]
    fn structured_lease_terms_become_text() {
        let profile = profile("договоры_социального_найма").unwrap();
        let mut row = obj(json!({"id": 7, "срок": 60}));
        profile.apply_row_rules(&mut row);
        assert_eq!(row["срок"], json!("60"));
        assert_eq!(row["id"], json!(7));
    }

    #[test]
    fn null_and_textual_terms_are_left_alone() {
        let profile = profile("договоры_социального_найма").unwrap();
        let mut row = obj(json!({"срок": null}));
        profile.apply_row_rules(&mut row);
        assert_eq!(row["срок"], Value::Null);

        let mut row = obj(json!({"срок": "1 year"}));
        profile.apply_row_rules(&mut row);
        assert_eq!(row["срок"], json!("1 year"));
    }
}
