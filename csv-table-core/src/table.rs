use serde::Serialize;

/// An in-memory CSV table: a header row plus data rows in file order.
///
/// Cells are plain strings. A structurally missing cell (short row) reads
/// back as the empty string, so callers only deal with one notion of
/// "nothing here".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    /// Column names from the header row, in file order.
    pub columns: Vec<String>,
    /// Data rows in file order, indexed from 0.
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Create an empty table with the provided header columns.
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table holds no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a named column, if the header declares it.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// True when the header declares the named column.
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Borrowed view of the data row at `index`.
    pub fn row(&self, index: usize) -> Option<Row<'_>> {
        (index < self.rows.len()).then_some(Row { table: self, index })
    }

    /// Iterate all data rows in file order.
    pub fn iter(&self) -> impl Iterator<Item = Row<'_>> {
        (0..self.rows.len()).map(|index| Row { table: self, index })
    }
}

/// Column-addressable view of one data row.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    table: &'a Table,
    index: usize,
}

impl<'a> Row<'a> {
    /// 0-based data-row index in the source table (header excluded).
    pub fn index(&self) -> usize {
        self.index
    }

    /// Cell value under the named column.
    ///
    /// Returns `None` only when the header does not declare the column;
    /// a short row yields `Some("")` for its missing trailing cells.
    pub fn get(&self, column: &str) -> Option<&'a str> {
        let position = self.table.column_index(column)?;
        Some(
            self.table.rows[self.index]
                .get(position)
                .map(String::as_str)
                .unwrap_or(""),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Table;

    fn sample() -> Table {
        let mut table = Table::new(vec!["Name".to_string(), "IPv4".to_string()]);
        table.rows.push(vec!["web".to_string(), "10.0.0.5".to_string()]);
        table.rows.push(vec!["short".to_string()]);
        table
    }

    #[test]
    fn get_addresses_cells_by_column_name() {
        let table = sample();
        let row = table.row(0).expect("row 0 should exist");
        assert_eq!(row.get("Name"), Some("web"));
        assert_eq!(row.get("IPv4"), Some("10.0.0.5"));
        assert_eq!(row.get("Missing"), None);
    }

    #[test]
    fn short_rows_read_back_as_empty_cells() {
        let table = sample();
        let row = table.row(1).expect("row 1 should exist");
        assert_eq!(row.get("IPv4"), Some(""));
    }

    #[test]
    fn iter_preserves_file_order_and_indices() {
        let table = sample();
        let indices: Vec<usize> = table.iter().map(|row| row.index()).collect();
        assert_eq!(indices, vec![0, 1]);
    }
}
