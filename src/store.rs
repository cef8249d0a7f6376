// src/store.rs

/// Normalized table: one header row, every data row the same width.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordSet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Candidate rows thrown away for having the wrong number of cells.
    pub dropped: usize,
}

impl RecordSet {
    /// Keep the candidates whose width matches `headers`, count the rest.
    /// Returns `None` when nothing survives.
    pub fn collect<I>(headers: Vec<String>, candidates: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vec<String>>,
    {
        let mut rows = Vec::new();
        let mut dropped = 0usize;

        for row in candidates {
            if row.len() == headers.len() {
                rows.push(row);
            } else {
                dropped += 1;
            }
        }

        if dropped > 0 {
            logd!("dropped {dropped} row(s) not matching {} header(s)", headers.len());
        }
        if rows.is_empty() {
            return None;
        }
        Some(Self { headers, rows, dropped })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Insert a constant column in front of every row.
    pub fn prepend_column(&mut self, header: &str, value: &str) {
        self.headers.insert(0, s!(header));
        for row in &mut self.rows {
            row.insert(0, s!(value));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| s!(*c)).collect()
    }

    #[test]
    fn collect_drops_and_counts_mismatched_rows() {
        let rs = RecordSet::collect(
            row(&["A", "B"]),
            vec![row(&["1", "2"]), row(&["3"]), row(&["4", "5", "6"]), row(&["7", "8"])],
        )
        .unwrap();
        assert_eq!(rs.rows, vec![row(&["1", "2"]), row(&["7", "8"])]);
        assert_eq!(rs.dropped, 2);
    }

    #[test]
    fn collect_with_nothing_left_is_none() {
        assert!(RecordSet::collect(row(&["A", "B"]), vec![row(&["1"])]).is_none());
        assert!(RecordSet::collect(row(&["A"]), Vec::new()).is_none());
    }

    #[test]
    fn prepend_column_widens_every_row() {
        let mut rs = RecordSet::collect(row(&["Year"]), vec![row(&["2020"]), row(&["2021"])]).unwrap();
        rs.prepend_column("Player", "Mike Trout");
        assert_eq!(rs.headers, row(&["Player", "Year"]));
        assert!(rs.rows.iter().all(|r| r.len() == 2 && r[0] == "Mike Trout"));
    }
}
