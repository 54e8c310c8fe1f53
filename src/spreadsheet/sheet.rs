use crate::error::ReportError;
use crate::spreadsheet::cell::Cell;
use crate::spreadsheet::SpreadsheetError;
use crate::table::Row;
use crate::table::Table;
use crate::table::Value;

/// Raw cells of one worksheet, in the row-major order they were read.
pub(crate) struct Sheet {
    /// Source file name
    pub(crate) file_name: String,
    /// Sheet name
    pub(crate) name: String,
    /// All non-empty cells in the sheet
    pub(crate) cells: Vec<Cell>,
    /// Header row and column range, from the cells seen so far
    pub(crate) row_lower_bound: Option<usize>,
    pub(crate) col_lower_bound: Option<usize>,
    pub(crate) col_upper_bound: Option<usize>,
}

impl Sheet {
    pub(super) fn new(file_name: &str, name: &str) -> Self {
        Self {
            file_name: file_name.to_owned(),
            name: name.to_owned(),
            cells: Vec::new(),
            row_lower_bound: None,
            col_lower_bound: None,
            col_upper_bound: None,
        }
    }

    /// Adds a cell to the sheet, updating the data range.
    pub(super) fn push(&mut self, cell: Cell) {
        self.update_bound(cell.row, cell.col);
        self.cells.push(cell);
    }

    fn update_bound(&mut self, row: usize, col: usize) {
        if self.row_lower_bound.is_none() { // First cell
            self.row_lower_bound = Some(row);
        }
        if self.col_lower_bound.map(|col_lower_bound| col < col_lower_bound).unwrap_or(true) {
            self.col_lower_bound = Some(col);
        }
        if self.col_upper_bound.map(|col_upper_bound| col_upper_bound < col).unwrap_or(true) {
            self.col_upper_bound = Some(col);
        }
    }

    /// Builds a table, using the first non-empty row as the header.
    ///
    /// Header cells that are missing or blank get positional names
    /// (`column1`, `column2`, ...). Rows without any cell are skipped.
    pub(crate) fn into_table(self, shared_strings: &[String]) -> Result<Table, ReportError> {
        let (Some(header_row), Some(col_lower), Some(col_upper)) =
            (self.row_lower_bound, self.col_lower_bound, self.col_upper_bound)
        else {
            return Err(SpreadsheetError::MissingHeaderRowError(self.file_name, self.name).into());
        };
        let width = col_upper - col_lower + 1;

        let mut header: Vec<Option<String>> = vec![None; width];
        let mut rows: Vec<Row> = Vec::new();
        let mut current: Option<(usize, Vec<Value>)> = None;
        for cell in &self.cells {
            let value = cell.to_value(shared_strings).map_err(|message| {
                SpreadsheetError::CellValueError(
                    self.file_name.to_owned(),
                    self.name.to_owned(),
                    cell.reference(),
                    message,
                )
            })?;
            let offset = cell.col - col_lower;
            if cell.row == header_row {
                header[offset] = Some(value.to_string()).filter(|name| !name.trim().is_empty());
                continue;
            }

            if current.as_ref().map(|(row, _)| *row != cell.row).unwrap_or(true) {
                if let Some((_, values)) = current.take() {
                    rows.push(Row::new(values));
                }
                current = Some((cell.row, vec![Value::Empty; width]));
            }
            if let Some((_, values)) = current.as_mut() {
                values[offset] = value;
            }
        }
        if let Some((_, values)) = current {
            rows.push(Row::new(values));
        }

        let columns = header
            .into_iter()
            .enumerate()
            .map(|(index, name)| name.unwrap_or_else(|| format!("column{}", index + 1)))
            .collect();
        Ok(Table::new(columns, rows))
    }
}
