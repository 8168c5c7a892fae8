use super::{Column, ColumnId, Table, Type};
use crate::Result;

use heck::AsLowerCamelCase;
use serde::{Deserialize, Serialize};

/// Table metadata as handed over by the host generator.
///
/// The host owns introspection; this is the boundary object it fills in,
/// either directly or deserialized from its own interchange format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableMeta {
    /// Runtime-qualified table name.
    pub name: String,

    /// Columns in declaration order.
    pub columns: Vec<ColumnMeta>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnMeta {
    /// Store-side column identifier.
    pub name: String,

    /// Host property name. Derived from the store identifier when absent.
    #[serde(default)]
    pub property: Option<String>,

    /// Storage type name, e.g. `VARCHAR` or `DECIMAL(10, 2)`.
    pub ty: String,

    #[serde(default = "default_nullable")]
    pub nullable: bool,

    #[serde(default)]
    pub generated_always: bool,

    /// Defaults from the storage type when absent.
    #[serde(default)]
    pub large_object: Option<bool>,

    #[serde(default)]
    pub primary_key: bool,
}

fn default_nullable() -> bool {
    true
}

impl Table {
    /// Adapts host metadata into the immutable column model.
    ///
    /// Fails only on malformed metadata; the failure aborts generation for
    /// this table and is never retried here.
    pub fn from_meta(meta: &TableMeta) -> Result<Table> {
        let columns = meta
            .columns
            .iter()
            .enumerate()
            .map(|(index, column)| {
                let storage_ty: Type = column.ty.parse()?;

                let property = match &column.property {
                    Some(property) => property.clone(),
                    None => AsLowerCamelCase(&column.name).to_string(),
                };

                Ok(Column {
                    id: ColumnId(index),
                    name: column.name.clone(),
                    property,
                    storage_ty,
                    nullable: column.nullable,
                    generated_always: column.generated_always,
                    large_object: column.large_object.unwrap_or_else(|| storage_ty.is_large_object()),
                    primary_key: column.primary_key,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Table::new(meta.name.clone(), columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn column_meta(name: &str, ty: &str) -> ColumnMeta {
        ColumnMeta {
            name: name.to_string(),
            property: None,
            ty: ty.to_string(),
            nullable: true,
            generated_always: false,
            large_object: None,
            primary_key: false,
        }
    }

    #[test]
    fn derives_property_names_and_lob_flags() {
        let meta = TableMeta {
            name: "NS.USER".to_string(),
            columns: vec![
                ColumnMeta {
                    nullable: false,
                    primary_key: true,
                    ..column_meta("USER_ID", "BIGINT")
                },
                column_meta("USER_NAME", "VARCHAR"),
                column_meta("AVATAR", "VARBINARY"),
            ],
        };

        let table = Table::from_meta(&meta).unwrap();

        let properties: Vec<_> = table
            .columns
            .iter()
            .map(|column| column.property.as_str())
            .collect();
        assert_eq!(properties, ["userId", "userName", "avatar"]);

        assert!(table.columns[2].large_object);
        assert!(!table.columns[1].large_object);
        assert_eq!(table.columns[0].storage_ty, Type::BigInt);
    }

    #[test]
    fn explicit_property_and_lob_flags_win() {
        let meta = TableMeta {
            name: "T".to_string(),
            columns: vec![
                ColumnMeta {
                    nullable: false,
                    primary_key: true,
                    ..column_meta("ID", "BIGINT")
                },
                ColumnMeta {
                    property: Some("photo".to_string()),
                    large_object: Some(true),
                    ..column_meta("PHOTO_DATA", "VARCHAR")
                },
            ],
        };

        let table = Table::from_meta(&meta).unwrap();
        assert_eq!(table.columns[1].property, "photo");
        assert!(table.columns[1].large_object);
    }

    #[test]
    fn deserializes_host_metadata() {
        let meta: TableMeta = serde_json::from_str(
            r#"{
                "name": "USER",
                "columns": [
                    {"name": "USER_ID", "ty": "BIGINT", "nullable": false, "primary_key": true},
                    {"name": "USER_NAME", "ty": "VARCHAR(64)"}
                ]
            }"#,
        )
        .unwrap();

        let table = Table::from_meta(&meta).unwrap();
        assert_eq!(table.columns.len(), 2);
        assert!(table.columns[1].nullable);
        assert_eq!(table.columns[1].storage_ty, Type::Varchar);
    }

    #[test]
    fn missing_table_name_is_rejected() {
        let meta = TableMeta {
            name: "  ".to_string(),
            columns: vec![column_meta("ID", "BIGINT")],
        };

        assert!(Table::from_meta(&meta).unwrap_err().is_invalid_schema());
    }

    #[test]
    fn empty_column_list_is_rejected() {
        let meta = TableMeta {
            name: "T".to_string(),
            columns: vec![],
        };

        assert!(Table::from_meta(&meta).unwrap_err().is_invalid_schema());
    }

    #[test]
    fn duplicate_column_is_rejected() {
        let meta = TableMeta {
            name: "T".to_string(),
            columns: vec![
                ColumnMeta {
                    primary_key: true,
                    ..column_meta("ID", "BIGINT")
                },
                column_meta("ID", "VARCHAR"),
            ],
        };

        assert!(Table::from_meta(&meta).unwrap_err().is_invalid_schema());
    }

    #[test]
    fn unknown_storage_type_is_rejected() {
        let meta = TableMeta {
            name: "T".to_string(),
            columns: vec![ColumnMeta {
                primary_key: true,
                ..column_meta("ID", "GEOMETRY")
            }],
        };

        assert!(Table::from_meta(&meta).unwrap_err().is_invalid_schema());
    }

    #[test]
    fn missing_primary_key_is_rejected() {
        let meta = TableMeta {
            name: "T".to_string(),
            columns: vec![column_meta("ID", "BIGINT")],
        };

        assert!(Table::from_meta(&meta).unwrap_err().is_invalid_schema());
    }
}
