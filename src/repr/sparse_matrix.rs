/*!
# Compressed Sparse Row Matrix

[`SparseMatrix`] stores a square `n x n` matrix in **Compressed Sparse Row (CSR)** format:

- `cols: Vec<Node>` holds the column indices of all stored cells, row after row,
- `vals: Vec<W>` holds the corresponding values,
- `offsets: Vec<usize>` (length `n + 1`) marks slice boundaries, where row `r` is
  `cols[offsets[r - 1]..offsets[r]]`.

Rows and columns are addressed by node, i.e. they range over `1..=n`.

### Invariants
1. `offsets.len() == n + 1`, `offsets[0] == 0` and `offsets` is non-decreasing
2. `offsets[n] == cols.len() == vals.len()`
3. column indices are strictly increasing within each row

Row access is a slice lookup; column access performs one binary search per row.
Inserting or removing a cell shifts all subsequent cells and is thus `O(nnz)`.
*/

use std::ops::Range;

use itertools::Itertools;

use crate::node::{node_at, slot};

use super::*;

#[derive(Debug, Clone, PartialEq)]
pub struct SparseMatrix<W> {
    offsets: Vec<usize>,
    cols: Vec<Node>,
    vals: Vec<W>,
}

impl<W: Weight> SparseMatrix<W> {
    /// Creates an `n x n` matrix without any stored cells
    pub fn new(n: NumNodes) -> Self {
        Self {
            offsets: vec![0; n as usize + 1],
            cols: Vec::new(),
            vals: Vec::new(),
        }
    }

    /// Creates an `n x n` matrix from `(row, col, value)` triplets.
    ///
    /// If a cell occurs multiple times, the last value wins. Zero values are not stored.
    ///
    /// # Panics
    /// Panics if a row or column is outside of `1..=n`.
    ///
    /// # Examples
    /// ```
    /// use simplegraphs::prelude::*;
    ///
    /// let m = SparseMatrix::from_triplets(3, [(2, 3, 1.5), (1, 2, 2.0), (2, 1, 0.0), (1, 2, 4.0)]);
    /// assert_eq!(m.nnz(), 2);
    /// assert_eq!(m.get(1, 2), Some(4.0));
    /// assert_eq!(m.get(2, 1), None);
    /// assert_eq!(m.row_indices(2), &[3]);
    /// ```
    pub fn from_triplets(n: NumNodes, triplets: impl IntoIterator<Item = (Node, Node, W)>) -> Self {
        let mut cells = triplets
            .into_iter()
            .inspect(|&(r, c, _)| {
                assert!(
                    is_valid_node(r, n) && is_valid_node(c, n),
                    "cell ({r},{c}) is out of bounds for a {n}x{n} matrix"
                );
            })
            .collect_vec();

        // stable sort keeps insertion order among duplicates, so the last one wins below
        cells.sort_by_key(|&(r, c, _)| (r, c));

        let mut counts = vec![0usize; n as usize];
        let mut cols = Vec::with_capacity(cells.len());
        let mut vals = Vec::with_capacity(cells.len());
        let mut prev = None;

        for (r, c, w) in cells {
            match vals.last_mut() {
                Some(last) if prev == Some((r, c)) => *last = w,
                _ => {
                    counts[slot(r)] += 1;
                    cols.push(c);
                    vals.push(w);
                    prev = Some((r, c));
                }
            }
        }

        let mut offsets = Vec::with_capacity(n as usize + 1);
        let mut total = 0;
        offsets.push(total);
        for count in counts {
            total += count;
            offsets.push(total);
        }

        let mut matrix = Self {
            offsets,
            cols,
            vals,
        };
        matrix.drop_zeros();
        matrix
    }

    /// Removes all stored cells with value zero
    fn drop_zeros(&mut self) {
        if self.vals.iter().all(|w| !w.is_zero()) {
            return;
        }

        let mut write = 0;
        let mut start = 0;
        for r in 0..self.dim() as usize {
            let end = self.offsets[r + 1];
            for read in start..end {
                if !self.vals[read].is_zero() {
                    self.cols[write] = self.cols[read];
                    self.vals[write] = self.vals[read];
                    write += 1;
                }
            }
            start = end;
            self.offsets[r + 1] = write;
        }
        self.cols.truncate(write);
        self.vals.truncate(write);
    }

    /// Returns the dimension `n` of the `n x n` matrix
    #[inline]
    pub fn dim(&self) -> NumNodes {
        (self.offsets.len() - 1) as NumNodes
    }

    /// Returns the number of stored (nonzero) cells
    #[inline]
    pub fn nnz(&self) -> usize {
        self.cols.len()
    }

    /// Range of row `r` within `cols` and `vals`
    /// ** Panics if `r` is not in `1..=n` **
    #[inline(always)]
    fn row_range(&self, r: Node) -> Range<usize> {
        self.offsets[slot(r)]..self.offsets[slot(r) + 1]
    }

    /// Position of cell `(r, c)` within `cols` and `vals`: `Ok(pos)` if the cell is stored,
    /// `Err(pos)` with the insertion position otherwise
    fn position(&self, r: Node, c: Node) -> std::result::Result<usize, usize> {
        let range = self.row_range(r);
        let start = range.start;
        match self.cols[range].binary_search(&c) {
            Ok(i) => Ok(start + i),
            Err(i) => Err(start + i),
        }
    }

    /// Returns the value of cell `(r, c)` or `None` if it is not stored.
    /// Cells outside of the matrix are never stored.
    pub fn get(&self, r: Node, c: Node) -> Option<W> {
        let n = self.dim();
        if !is_valid_node(r, n) || !is_valid_node(c, n) {
            return None;
        }
        self.position(r, c).ok().map(|pos| self.vals[pos])
    }

    /// Returns *true* if cell `(r, c)` is stored
    pub fn contains(&self, r: Node, c: Node) -> bool {
        self.get(r, c).is_some()
    }

    /// Stores `value` in cell `(r, c)` and returns the previous value if there was one.
    ///
    /// # Panics
    /// Panics if `(r, c)` is outside the matrix. Debug builds also panic on a zero `value`.
    pub fn set(&mut self, r: Node, c: Node, value: W) -> Option<W> {
        debug_assert!(!value.is_zero());
        let n = self.dim();
        assert!(
            is_valid_node(r, n) && is_valid_node(c, n),
            "cell ({r},{c}) is out of bounds for a {n}x{n} matrix"
        );

        match self.position(r, c) {
            Ok(pos) => Some(std::mem::replace(&mut self.vals[pos], value)),
            Err(pos) => {
                self.cols.insert(pos, c);
                self.vals.insert(pos, value);
                for offset in &mut self.offsets[slot(r) + 1..] {
                    *offset += 1;
                }
                None
            }
        }
    }

    /// Removes cell `(r, c)` and returns its value if it was stored
    pub fn remove(&mut self, r: Node, c: Node) -> Option<W> {
        let n = self.dim();
        if !is_valid_node(r, n) || !is_valid_node(c, n) {
            return None;
        }

        let pos = self.position(r, c).ok()?;
        self.cols.remove(pos);
        let value = self.vals.remove(pos);
        for offset in &mut self.offsets[slot(r) + 1..] {
            *offset -= 1;
        }
        Some(value)
    }

    /// Appends `k` empty rows and columns
    pub fn grow(&mut self, k: NumNodes) {
        let nnz = self.nnz();
        self.offsets.extend(std::iter::repeat_n(nnz, k as usize));
        tracing::trace!(dim = self.dim(), "grew sparse matrix");
    }

    /// Returns the sorted column indices of the stored cells of row `r`
    /// ** Panics if `r` is not in `1..=n` **
    pub fn row_indices(&self, r: Node) -> &[Node] {
        &self.cols[self.row_range(r)]
    }

    /// Returns the stored cells of row `r` as `(col, value)` in increasing column order
    /// ** Panics if `r` is not in `1..=n` **
    pub fn row(&self, r: Node) -> impl Iterator<Item = (Node, W)> + '_ {
        let range = self.row_range(r);
        self.cols[range.clone()]
            .iter()
            .copied()
            .zip(self.vals[range].iter().copied())
    }

    /// Returns the number of stored cells in row `r`
    /// ** Panics if `r` is not in `1..=n` **
    pub fn row_nnz(&self, r: Node) -> usize {
        self.row_range(r).len()
    }

    /// Returns the stored cells of column `c` as `(row, value)` in increasing row order
    /// ** Panics if `c` is not in `1..=n` **
    pub fn column(&self, c: Node) -> impl Iterator<Item = (Node, W)> + '_ {
        assert!(is_valid_node(c, self.dim()));
        node_range(self.dim())
            .filter_map(move |r| self.position(r, c).ok().map(|pos| (r, self.vals[pos])))
    }

    /// Returns all stored cells as `(row, col, value)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Node, Node, W)> + '_ {
        self.offsets
            .iter()
            .tuple_windows()
            .enumerate()
            .flat_map(move |(r, (&start, &end))| {
                (start..end).map(move |pos| (node_at(r), self.cols[pos], self.vals[pos]))
            })
    }

    /// Returns *true* if every stored cell `(r, c)` has a mirrored cell `(c, r)` of equal value
    pub fn is_symmetric(&self) -> bool {
        self.iter().all(|(r, c, w)| self.get(c, r) == Some(w))
    }
}
