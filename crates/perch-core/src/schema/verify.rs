use super::Table;
use crate::{Error, Result};

use std::collections::HashSet;

struct Verify<'a> {
    table: &'a Table,
}

impl Table {
    pub(super) fn verify(&self) -> Result<()> {
        Verify { table: self }.verify()
    }
}

impl Verify<'_> {
    fn verify(&self) -> Result<()> {
        self.verify_table_name()?;
        self.verify_columns_present()?;
        self.verify_identifiers_unique()?;
        self.verify_primary_key()?;
        Ok(())
    }

    fn verify_table_name(&self) -> Result<()> {
        if self.table.name.trim().is_empty() {
            return Err(Error::invalid_schema("table name is missing"));
        }
        Ok(())
    }

    fn verify_columns_present(&self) -> Result<()> {
        if self.table.columns.is_empty() {
            return Err(Error::invalid_schema(format!(
                "table `{}` has no columns",
                self.table.name
            )));
        }
        Ok(())
    }

    fn verify_identifiers_unique(&self) -> Result<()> {
        let mut names = HashSet::new();
        let mut properties = HashSet::new();

        for column in &self.table.columns {
            if !names.insert(column.name.as_str()) {
                return Err(Error::invalid_schema(format!(
                    "table `{}` declares column `{}` more than once",
                    self.table.name, column.name
                )));
            }
            if !properties.insert(column.property.as_str()) {
                return Err(Error::invalid_schema(format!(
                    "table `{}` maps property `{}` to more than one column",
                    self.table.name, column.property
                )));
            }
        }

        Ok(())
    }

    fn verify_primary_key(&self) -> Result<()> {
        if self.table.primary_key.columns.is_empty() {
            return Err(Error::invalid_schema(format!(
                "table `{}` has no primary key columns",
                self.table.name
            )));
        }
        Ok(())
    }
}
