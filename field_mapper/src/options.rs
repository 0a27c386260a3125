//! Per-entity column mapping configuration
//!
//! `MapperOptions<T>` is a two-phase object: a chainable builder during
//! application bootstrap, then an effectively-immutable singleton once the
//! frozen field dictionary has been read by query-time code.

use crate::column::ColumnMap;
use crate::errors::MapperError;
use crate::identifier::TableName;
use pg_mapping::{casing, PgMapped, PgType};
use std::collections::BTreeMap;
use std::marker::PhantomData;
use std::sync::OnceLock;

/// Registers every mappable field declared on an entity type
///
/// Normally implemented via `#[derive(AutoMap)]`, which extracts each field's
/// name and declared type at compile time. Only fields declared directly on
/// the deriving struct are registered; shared bookkeeping fields live in
/// their own struct with their own mapping helper.
pub trait AutoMap: Sized {
    fn auto_map(options: &mut MapperOptions<Self>) -> Result<(), MapperError>;
}

/// Column mapping configuration for one entity type
///
/// Built once at bootstrap, typically held as a process-wide singleton.
/// Mutators return `Err(MapperError::Frozen)` once `field_dictionary` has
/// been read.
#[derive(Debug)]
pub struct MapperOptions<T> {
    table_schema: Option<String>,
    table_name: Option<TableName>,
    fields: BTreeMap<String, ColumnMap>,
    frozen: OnceLock<BTreeMap<String, ColumnMap>>,
    _entity: PhantomData<fn() -> T>,
}

impl<T> MapperOptions<T> {
    pub fn new() -> Self {
        Self {
            table_schema: None,
            table_name: None,
            fields: BTreeMap::new(),
            frozen: OnceLock::new(),
            _entity: PhantomData,
        }
    }

    /// Record the physical table identity
    pub fn map_table(
        &mut self,
        schema: Option<&str>,
        name: &str,
    ) -> Result<&mut Self, MapperError> {
        self.ensure_unfrozen(name)?;
        self.table_schema = match schema {
            Some(s) => Some(TableName::new(s)?.as_str().to_string()),
            None => None,
        };
        self.table_name = Some(TableName::new(name)?);
        Ok(self)
    }

    /// Add one mapping with the column name derived from the property name
    pub fn map_column<V: PgMapped>(&mut self, property: &str) -> Result<&mut Self, MapperError> {
        let column = casing::to_snake_case(property);
        let map = ColumnMap::create::<V>(&column)?;
        self.insert(property, map)
    }

    /// Add one mapping with an explicit column name and inferred type
    pub fn map_column_named<V: PgMapped>(
        &mut self,
        property: &str,
        column: &str,
    ) -> Result<&mut Self, MapperError> {
        let map = ColumnMap::create::<V>(column)?;
        self.insert(property, map)
    }

    /// Add one mapping with an explicit column name and database type
    pub fn map_column_as<V>(
        &mut self,
        property: &str,
        column: &str,
        pg_type: PgType,
    ) -> Result<&mut Self, MapperError> {
        let map = ColumnMap::create_as::<V>(column, pg_type)?;
        self.insert(property, map)
    }

    /// Register every non-skipped field declared on `T`
    pub fn auto_map_columns(&mut self) -> Result<&mut Self, MapperError>
    where
        T: AutoMap,
    {
        T::auto_map(self)?;
        Ok(self)
    }

    /// The frozen, read-only view of all registered mappings
    ///
    /// Computed once on first access. Recomputing under a concurrent first
    /// read would yield an identical map, so no locking is needed on the
    /// read path.
    pub fn field_dictionary(&self) -> &BTreeMap<String, ColumnMap> {
        self.frozen.get_or_init(|| {
            tracing::debug!("[FREEZE] field dictionary frozen with {} entries", self.fields.len());
            self.fields.clone()
        })
    }

    pub fn table_schema(&self) -> Option<&str> {
        self.table_schema.as_deref()
    }

    pub fn table_name(&self) -> Option<&str> {
        self.table_name.as_ref().map(TableName::as_str)
    }

    /// Schema-qualified table name, if a table has been mapped
    pub fn qualified_table(&self) -> Option<String> {
        match (&self.table_schema, &self.table_name) {
            (Some(schema), Some(table)) => Some(format!("{}.{}", schema, table)),
            (None, Some(table)) => Some(table.as_str().to_string()),
            _ => None,
        }
    }

    fn insert(&mut self, property: &str, map: ColumnMap) -> Result<&mut Self, MapperError> {
        self.ensure_unfrozen(property)?;
        if self.fields.contains_key(property) {
            return Err(MapperError::DuplicateProperty(property.to_string()));
        }
        tracing::debug!(
            "[MAP_COLUMN] {} -> {} ({})",
            property,
            map.column_name(),
            map.pg_type()
        );
        self.fields.insert(property.to_string(), map);
        Ok(self)
    }

    fn ensure_unfrozen(&self, what: &str) -> Result<(), MapperError> {
        if self.frozen.get().is_some() {
            return Err(MapperError::Frozen(what.to_string()));
        }
        Ok(())
    }
}

impl<T> Default for MapperOptions<T> {
    fn default() -> Self {
        Self::new()
    }
}
