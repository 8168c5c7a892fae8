use perch_core::driver::{Capability, PlaceholderStyle};
use perch_core::schema::{Column, ColumnId, Table, Type};
use perch_sql::stmt::{clause, Fragment, Name, Record, Statement, Value};
use perch_sql::{Input, Serializer};

use pretty_assertions::assert_eq;

fn make_column(index: usize, name: &str, storage_ty: Type) -> Column {
    Column {
        id: ColumnId(index),
        name: name.to_string(),
        property: name.to_string(),
        storage_ty,
        nullable: index != 0,
        generated_always: false,
        large_object: storage_ty.is_large_object(),
        primary_key: index == 0,
    }
}

fn make_table(name: &str, columns: Vec<Column>) -> Table {
    Table::new(name, columns).unwrap()
}

fn sample_table() -> Table {
    make_table(
        "T",
        vec![
            make_column(0, "id", Type::BigInt),
            make_column(1, "name", Type::Varchar),
            make_column(2, "note", Type::Varbinary),
        ],
    )
}

fn render(stmt: &Statement, input: Input<'_>) -> (String, Vec<Value>) {
    let mut params = Vec::new();
    let sql = Serializer::phoenix()
        .serialize(stmt, &input, &mut params)
        .unwrap();
    (sql, params)
}

#[test]
fn full_upsert_excludes_large_objects() {
    let table = sample_table();
    let record = Record::new().with("id", 1_i64).with("name", "alice");

    let (sql, params) = render(&Statement::upsert(&table), Input::Record(&record));

    assert_eq!(sql, "upsert into T (id, name) values (?, ?)");
    assert_eq!(params, [Value::I64(1), Value::String("alice".to_string())]);
}

#[test]
fn generated_always_columns_never_rendered() {
    let table = make_table(
        "T",
        vec![
            make_column(0, "id", Type::BigInt),
            make_column(1, "name", Type::Varchar),
            Column {
                generated_always: true,
                ..make_column(2, "row_ts", Type::Timestamp)
            },
        ],
    );

    let record = Record::new()
        .with("id", 1_i64)
        .with("name", "alice")
        .with("row_ts", "now");
    let rows = vec![record.clone()];

    let (full, _) = render(&Statement::upsert(&table), Input::Record(&record));
    let (selective, _) = render(&Statement::upsert_selective(&table), Input::Record(&record));
    let (batch, _) = render(&Statement::batch_upsert(&table), Input::Rows(&rows));

    assert!(!full.contains("row_ts"));
    assert!(!selective.contains("row_ts"));
    assert!(!batch.contains("row_ts"));
}

#[test]
fn identifier_and_placeholder_clauses_are_zipped() {
    let table = sample_table();
    let columns: Vec<_> = table.writable_columns_without_lobs().collect();

    let identifiers = clause::identifier_list(columns.iter().copied());
    let placeholders = clause::placeholder_list(columns.iter().copied());

    let (Fragment::List(identifiers), Fragment::List(placeholders)) = (identifiers, placeholders)
    else {
        panic!("clause builders must produce lists");
    };

    assert_eq!(identifiers.items.len(), placeholders.items.len());
    assert_eq!(identifiers.items.len(), columns.len());
}

#[test]
fn empty_eligible_columns_render_as_empty_parens() {
    // The only column is both the key and store-computed, so every
    // writable view is empty.
    let table = make_table(
        "T",
        vec![Column {
            generated_always: true,
            ..make_column(0, "id", Type::BigInt)
        }],
    );

    let record = Record::new();
    let (sql, params) = render(&Statement::upsert(&table), Input::Record(&record));

    assert_eq!(sql, "upsert into T () values ()");
    assert!(params.is_empty());
}

#[test]
fn synthesis_is_idempotent() {
    let table = sample_table();

    assert_eq!(Statement::upsert(&table), Statement::upsert(&table));
    assert_eq!(
        Statement::upsert_selective(&table),
        Statement::upsert_selective(&table)
    );
    assert_eq!(
        Statement::batch_upsert(&table),
        Statement::batch_upsert(&table)
    );

    let record = Record::new().with("id", 7_i64);
    let (first, _) = render(&Statement::upsert(&table), Input::Record(&record));
    let (second, _) = render(&Statement::upsert(&table), Input::Record(&record));
    assert_eq!(first, second);
}

#[test]
fn qualified_table_names_render_with_periods() {
    let table = sample_table();
    let record = Record::new().with("id", 1_i64);

    let Statement::Upsert(mut stmt) = Statement::upsert(&table) else {
        panic!("expected an upsert statement");
    };
    stmt.table = Name(vec!["NS".to_string(), "T".to_string()]);

    let (sql, _) = render(&stmt.into(), Input::Record(&record));
    assert!(sql.starts_with("upsert into NS.T "));
}

#[test]
fn numbered_placeholder_stores_render_dollar_params() {
    let capability = Capability {
        placeholders: PlaceholderStyle::Numbered,
        ..Capability::PHOENIX
    };
    let table = sample_table();
    let record = Record::new().with("id", 1_i64).with("name", "alice");

    let mut params: Vec<Value> = Vec::new();
    let sql = Serializer::new(&capability)
        .serialize(&Statement::upsert(&table), &Input::Record(&record), &mut params)
        .unwrap();

    assert_eq!(sql, "upsert into T (id, name) values ($1, $2)");
}
