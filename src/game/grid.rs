use generic_array::typenum::Unsigned;
use generic_array::{ArrayLength, GenericArray};
use std::fmt::{Display, Formatter};
use std::ops::{Deref, Index, IndexMut};

/// Index struct to access elements in the [`Grid`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd)]
pub struct GridIndex {
    row: usize,
    col: usize,
}

impl From<(usize, usize)> for GridIndex {
    fn from(value: (usize, usize)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl Display for GridIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl GridIndex {
    /// Constructs a new [`GridIndex`].
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Constructs a [`GridIndex`] from a row-major position in a grid with `cols` columns.
    pub fn from_linear(index: usize, cols: usize) -> Self {
        Self::new(index / cols, index % cols)
    }

    /// Returns value of `self.col`
    pub fn col(&self) -> usize {
        self.col
    }

    /// Returns value of `self.row`
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the row-major position of `self` in a grid with `cols` columns.
    pub fn linear(&self, cols: usize) -> usize {
        self.row * cols + self.col
    }
}

/// Two-dimensional fixed-length array that stores values and allows to mutate them.
/// Length of array is defined by generic parameters `R` and `C`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T, R: ArrayLength, C: ArrayLength> {
    contents: GenericArray<GenericArray<T, C>, R>,
}

impl<T: Default, R: ArrayLength, C: ArrayLength> Default for Grid<T, R, C> {
    fn default() -> Self {
        Self {
            contents: Default::default(),
        }
    }
}

impl<T, R: ArrayLength, C: ArrayLength> Deref for Grid<T, R, C> {
    type Target = [GenericArray<T, C>];

    fn deref(&self) -> &Self::Target {
        self.contents.as_slice()
    }
}

impl<T: Display, R: ArrayLength, C: ArrayLength> Display for Grid<T, R, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.deref().iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str("[")?;
            for val in row {
                write!(f, "{}", val)?;
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}

impl<T, R: ArrayLength, C: ArrayLength> Index<GridIndex> for Grid<T, R, C> {
    type Output = T;

    fn index(&self, index: GridIndex) -> &Self::Output {
        &self.contents[index.row()][index.col()]
    }
}

impl<T, R: ArrayLength, C: ArrayLength> IndexMut<GridIndex> for Grid<T, R, C> {
    fn index_mut(&mut self, index: GridIndex) -> &mut Self::Output {
        &mut self.contents[index.row()][index.col()]
    }
}

impl<T: Default, R: ArrayLength, C: ArrayLength> Grid<T, R, C> {
    /// Builds a grid from values given row by row.
    /// Missing values are filled with `T::default()`, extra values are ignored.
    pub fn from_row_major(values: impl IntoIterator<Item = T>) -> Self {
        let mut grid = Self::default();
        for (pos, value) in (0..Self::len()).map(Self::position).zip(values) {
            grid[pos] = value;
        }
        grid
    }
}

impl<T, R: ArrayLength, C: ArrayLength> Grid<T, R, C> {
    /// Total number of cells.
    pub fn len() -> usize {
        R::to_usize() * C::to_usize()
    }

    /// Converts a row-major position into a [`GridIndex`] without bounds checking.
    fn position(linear: usize) -> GridIndex {
        GridIndex::from_linear(linear, C::to_usize())
    }

    /// Converts a row-major position into a [`GridIndex`].
    /// Returns [`None`] if `linear` is out of the grid scope.
    pub fn index_of(linear: usize) -> Option<GridIndex> {
        (linear < Self::len()).then(|| Self::position(linear))
    }

    /// Returns `true` if `pos` points inside the grid.
    pub fn contains(pos: GridIndex) -> bool {
        pos.row() < R::to_usize() && pos.col() < C::to_usize()
    }

    /// Returns a reference to the element at `pos` or [`None`] if it's out of the grid scope.
    pub fn get(&self, pos: GridIndex) -> Option<&T> {
        Self::contains(pos).then(|| &self[pos])
    }

    /// Returns an iterator over grid elements row by row.
    pub fn cells(&self) -> impl Iterator<Item = &T> {
        self.contents.iter().flat_map(|row| row.iter())
    }

    /// Returns an iterator to indexed grid elements row by row
    pub fn all_indexed(&self) -> impl Iterator<Item = (GridIndex, &T)> {
        (0..Self::len()).map(Self::position).zip(self.cells())
    }
}
