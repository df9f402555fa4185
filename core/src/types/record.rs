use super::ScanType;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Value stored for a requested attribute the file does not carry
pub const MISSING_VALUE: &str = "NaN";

/// Column holding the scan type of a [`ScanRow`]
pub const SCAN_TYPE_COLUMN: &str = "scan_type";

/// Column holding the patient id of a [`ScanRow`]
pub const ID_COLUMN: &str = "id";

/// Attribute name to rendered value, in request order
///
/// Absent attributes hold [`MISSING_VALUE`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataRecord {
    entries: Vec<(String, String)>,
}

impl MetadataRecord {
    /// Creates an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a value, replacing any previous value for the same name
    ///
    /// A replaced entry keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Marks an attribute as absent
    pub fn insert_missing(&mut self, name: impl Into<String>) {
        self.insert(name, MISSING_VALUE);
    }

    /// Returns the stored value, including the missing sentinel
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns the value only if the attribute was present on the source
    pub fn present(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|value| *value != MISSING_VALUE)
    }

    /// Checks if an attribute was requested but absent
    pub fn is_missing(&self, name: &str) -> bool {
        self.get(name) == Some(MISSING_VALUE)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(name, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterates attribute names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl Serialize for MetadataRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Metadata of one representative file, tagged with its scan type and patient
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRow {
    pub metadata: MetadataRecord,
    pub scan_type: ScanType,
    pub id: u32,
}

impl ScanRow {
    /// Creates a new ScanRow
    pub fn new(metadata: MetadataRecord, scan_type: ScanType, id: u32) -> Self {
        Self {
            metadata,
            scan_type,
            id,
        }
    }

    /// Returns the cell for a table column
    ///
    /// `scan_type` and `id` take precedence over metadata attributes of the
    /// same name.
    pub fn value(&self, column: &str) -> Option<String> {
        match column {
            SCAN_TYPE_COLUMN => Some(self.scan_type.to_string()),
            ID_COLUMN => Some(self.id.to_string()),
            _ => self.metadata.get(column).map(str::to_string),
        }
    }
}

impl Serialize for ScanRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (name, value) in self.metadata.iter() {
            if !is_tag_column(name) {
                map.serialize_entry(name, value)?;
            }
        }
        map.serialize_entry(SCAN_TYPE_COLUMN, &self.scan_type)?;
        map.serialize_entry(ID_COLUMN, &self.id)?;
        map.end()
    }
}

fn is_tag_column(name: &str) -> bool {
    name == SCAN_TYPE_COLUMN || name == ID_COLUMN
}

/// Ordered table of scan rows
///
/// Columns are the requested attribute names followed by `scan_type` and
/// `id`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataTable {
    columns: Vec<String>,
    rows: Vec<ScanRow>,
}

impl MetadataTable {
    /// Creates an empty table for the given attribute names
    pub fn new<S: AsRef<str>>(field_names: &[S]) -> Self {
        let mut columns: Vec<String> = Vec::with_capacity(field_names.len() + 2);
        for name in field_names.iter().map(AsRef::as_ref) {
            if !is_tag_column(name) && !columns.iter().any(|c| c == name) {
                columns.push(name.to_string());
            }
        }
        columns.push(SCAN_TYPE_COLUMN.to_string());
        columns.push(ID_COLUMN.to_string());

        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Appends a row
    pub fn push(&mut self, row: ScanRow) {
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[ScanRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates the cells of each row, in column order
    ///
    /// Cells for columns a row lacks are rendered as [`MISSING_VALUE`].
    pub fn records(&self) -> impl Iterator<Item = Vec<String>> + '_ {
        self.rows.iter().map(move |row| {
            self.columns
                .iter()
                .map(|column| {
                    row.value(column)
                        .unwrap_or_else(|| MISSING_VALUE.to_string())
                })
                .collect()
        })
    }
}
