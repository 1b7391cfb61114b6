//! SQL text builders.
//!
//! Only identifiers are ever written into statement text, always quoted.
//! Values travel as a single bound `jsonb` parameter that the server expands
//! with `jsonb_populate_record`, which also coerces each field to its
//! column's type. Results come back through [`json_rows`] as one `json`
//! value per row.

use crate::profiles::{JoinView, Projection};

const CHILD: &str = "child";
const PARENT: &str = "parent";
const PAYLOAD: &str = "payload";
const TARGET: &str = "target";
const RESULT: &str = "result_row";

/// Quote an identifier, doubling any embedded double quotes.
pub fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

pub fn select_all(table: &str) -> String {
    format!("SELECT * FROM {}", quote_ident(table))
}

pub fn select_join(table: &str, view: &JoinView) -> String {
    let columns: Vec<String> = view
        .projection
        .iter()
        .map(|p| match p {
            Projection::Own(column) => format!("{CHILD}.{}", quote_ident(column)),
            Projection::Parent { column, alias } => {
                format!("{PARENT}.{} AS {}", quote_ident(column), quote_ident(alias))
            }
        })
        .collect();

    format!(
        "SELECT {} FROM {} AS {CHILD} JOIN {} AS {PARENT} ON {CHILD}.{} = {PARENT}.{}",
        columns.join(", "),
        quote_ident(table),
        quote_ident(view.parent),
        quote_ident(view.foreign_key),
        quote_ident(view.parent_key),
    )
}

/// Wrap a row-returning statement (a `SELECT`, or a write with `RETURNING`)
/// so it yields a single `json` column: each row rendered by the server,
/// keys in column order.
pub fn json_rows(statement: &str) -> String {
    format!("WITH {RESULT} AS ({statement}) SELECT row_to_json({RESULT}) FROM {RESULT}")
}

fn populate_record(table: &str) -> String {
    format!("jsonb_populate_record(NULL::{}, $1) AS {PAYLOAD}", quote_ident(table))
}

/// `INSERT … SELECT` of the given payload fields; `$1` is the payload object.
pub fn insert_from_payload<'a>(table: &str, columns: impl IntoIterator<Item = &'a str>) -> String {
    let (names, values): (Vec<String>, Vec<String>) = columns
        .into_iter()
        .map(|c| {
            let quoted = quote_ident(c);
            let value = format!("{PAYLOAD}.{quoted}");
            (quoted, value)
        })
        .unzip();

    format!(
        "INSERT INTO {} ({}) SELECT {} FROM {} RETURNING *",
        quote_ident(table),
        names.join(", "),
        values.join(", "),
        populate_record(table),
    )
}

/// `UPDATE` of the given payload fields on the row whose `primary_key`
/// equals the payload's; `$1` is the payload object.
pub fn update_from_payload<'a>(
    table: &str,
    primary_key: &str,
    columns: impl IntoIterator<Item = &'a str>,
) -> String {
    let assignments: Vec<String> = columns
        .into_iter()
        .map(|c| {
            let quoted = quote_ident(c);
            format!("{quoted} = {PAYLOAD}.{quoted}")
        })
        .collect();
    let pk = quote_ident(primary_key);

    format!(
        "UPDATE {} AS {TARGET} SET {} FROM {} \
         WHERE {TARGET}.{pk} = {PAYLOAD}.{pk} RETURNING {TARGET}.*",
        quote_ident(table),
        assignments.join(", "),
        populate_record(table),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::profile;

    #[test]
    fn identifiers_are_quoted_and_escaped() {
        assert_eq!(quote_ident("лица"), "\"лица\"");
        assert_eq!(quote_ident("a\"; DROP TABLE x; --"), "\"a\"\"; DROP TABLE x; --\"");
    }

    #[test]
    fn plain_tables_select_everything() {
        assert_eq!(select_all("материалы"), "SELECT * FROM \"материалы\"");
    }

    #[test]
    fn city_view_resolves_region_name() {
        let view = profile("города").and_then(|p| p.view).unwrap();
        assert_eq!(
            select_join("города", &view),
            "SELECT child.\"id\", parent.\"название\" AS \"регион\", child.\"название\" \
             FROM \"города\" AS child JOIN \"регионы\" AS parent \
             ON child.\"регион_id\" = parent.\"id\""
        );
    }

    #[test]
    fn subject_view_keeps_own_columns_in_order() {
        let view = profile("предметы").and_then(|p| p.view).unwrap();
        let sql = select_join("предметы", &view);
        assert!(sql.starts_with(
            "SELECT child.\"id\", parent.\"название\" AS \"улица\", child.\"дом\", \
             child.\"квартира\", child.\"площадь\", child.\"назначение\" FROM \"предметы\""
        ));
        assert!(sql.ends_with("JOIN \"улицы\" AS parent ON child.\"улица_id\" = parent.\"id\""));
    }

    #[test]
    fn insert_binds_values_through_payload() {
        let sql = insert_from_payload("города", ["регион_id", "название"]);
        assert_eq!(
            sql,
            "INSERT INTO \"города\" (\"регион_id\", \"название\") \
             SELECT payload.\"регион_id\", payload.\"название\" \
             FROM jsonb_populate_record(NULL::\"города\", $1) AS payload RETURNING *"
        );
    }

    #[test]
    fn update_sets_fields_and_matches_key() {
        let sql = update_from_payload("лица", "id", ["фамилия", "имя"]);
        assert_eq!(
            sql,
            "UPDATE \"лица\" AS target SET \"фамилия\" = payload.\"фамилия\", \
             \"имя\" = payload.\"имя\" \
             FROM jsonb_populate_record(NULL::\"лица\", $1) AS payload \
             WHERE target.\"id\" = payload.\"id\" RETURNING target.*"
        );
    }

    #[test]
    fn rows_are_rendered_by_the_server() {
        assert_eq!(
            json_rows(&select_all("лица")),
            "WITH result_row AS (SELECT * FROM \"лица\") \
             SELECT row_to_json(result_row) FROM result_row"
        );
    }

    #[test]
    fn writes_are_wrapped_around_their_returning_clause() {
        let sql = json_rows(&update_from_payload("лица", "id", ["имя"]));
        assert!(sql.starts_with("WITH result_row AS (UPDATE \"лица\" AS target SET"));
        assert!(sql.ends_with(
            "RETURNING target.*) SELECT row_to_json(result_row) FROM result_row"
        ));
    }

    #[test]
    fn hostile_values_never_reach_statement_text() {
        // Column names are identifiers and get quoted; values are never passed in.
        let sql = insert_from_payload("t", ["x'); DROP TABLE t; --"]);
        assert!(sql.contains("\"x'); DROP TABLE t; --\""));
        assert!(sql.contains("$1"));
    }
}
