//! Main Field type

use crate::error::{Error, Result};
use crate::field::FieldElement;
use ndarray::{Array2, ArrayView2};

/// A 2-D grid of numeric samples stored in row-major order.
///
/// `Field<T>` is the input surface of the rasterizer: the renderer only
/// reads from it, and the backing array length always equals
/// `rows * cols`.
///
/// # Example
///
/// ```ignore
/// use heatview_core::Field;
///
/// let field = Field::from_vec(vec![1.0f32, 2.0, 3.0, 4.0], 2, 2)?;
/// assert_eq!(field.get(1, 0)?, 3.0);
/// ```
#[derive(Debug, Clone)]
pub struct Field<T: FieldElement> {
    /// Sample data in row-major order (row, col)
    data: Array2<T>,
}

impl<T: FieldElement> Field<T> {
    /// Create a new field filled with zeros
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: Array2::zeros((rows, cols)),
        }
    }

    /// Create a new field filled with a specific value
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            data: Array2::from_elem((rows, cols), value),
        }
    }

    /// Create a field from existing row-major data
    pub fn from_vec(data: Vec<T>, rows: usize, cols: usize) -> Result<Self> {
        let len = data.len();
        if len != rows * cols {
            return Err(Error::InvalidDimensions { rows, cols, len });
        }

        let array = Array2::from_shape_vec((rows, cols), data)
            .map_err(|_| Error::InvalidDimensions { rows, cols, len })?;

        Ok(Self { data: array })
    }

    /// Create a field from an ndarray
    pub fn from_array(data: Array2<T>) -> Self {
        Self { data }
    }

    // Dimensions

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// Dimensions as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the field is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    // Data access

    /// Get value at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        self.data
            .get((row, col))
            .copied()
            .ok_or(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            })
    }

    /// Get value at (row, col) without bounds checking
    ///
    /// # Safety
    /// Caller must ensure row < self.rows() and col < self.cols()
    pub unsafe fn get_unchecked(&self, row: usize, col: usize) -> T {
        unsafe { *self.data.uget((row, col)) }
    }

    /// Set value at (row, col)
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        if row >= self.rows() || col >= self.cols() {
            return Err(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        self.data[(row, col)] = value;
        Ok(())
    }

    /// Get a view of the underlying data
    pub fn view(&self) -> ArrayView2<'_, T> {
        self.data.view()
    }

    /// Get a reference to the underlying array
    pub fn data(&self) -> &Array2<T> {
        &self.data
    }

    /// Consume the field and return the underlying array
    pub fn into_array(self) -> Array2<T> {
        self.data
    }

    // Statistics

    /// Minimum and maximum over all valid samples, as f32.
    ///
    /// Returns `None` when the field is empty or holds no valid (finite)
    /// sample. Used to auto-derive the colorbar range when the caller has
    /// not pinned one.
    pub fn value_range(&self) -> Option<(f32, f32)> {
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;

        for &value in self.data.iter() {
            if !value.is_valid() {
                continue;
            }
            if let Some(v) = value.to_f32() {
                if v < min {
                    min = v;
                }
                if v > max {
                    max = v;
                }
            }
        }

        if min.is_finite() && max.is_finite() {
            Some((min, max))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_creation() {
        let field: Field<f32> = Field::new(100, 200);
        assert_eq!(field.rows(), 100);
        assert_eq!(field.cols(), 200);
        assert_eq!(field.shape(), (100, 200));
    }

    #[test]
    fn test_field_access() {
        let mut field: Field<f32> = Field::new(10, 10);
        field.set(5, 5, 42.0).unwrap();
        assert_eq!(field.get(5, 5).unwrap(), 42.0);
        assert!(field.get(10, 0).is_err());
    }

    #[test]
    fn test_from_vec_row_major() {
        let field = Field::from_vec(vec![1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();
        assert_eq!(field.get(0, 2).unwrap(), 3.0);
        assert_eq!(field.get(1, 0).unwrap(), 4.0);
    }

    #[test]
    fn test_from_vec_length_mismatch() {
        let result = Field::from_vec(vec![1.0f32, 2.0, 3.0], 2, 2);
        assert!(matches!(
            result,
            Err(Error::InvalidDimensions { rows: 2, cols: 2, len: 3 })
        ));
    }

    #[test]
    fn test_value_range() {
        let field = Field::from_vec(vec![3.0f32, -1.0, f32::NAN, 7.5], 2, 2).unwrap();
        assert_eq!(field.value_range(), Some((-1.0, 7.5)));
    }

    #[test]
    fn test_value_range_all_nan() {
        let field = Field::filled(2, 2, f32::NAN);
        assert_eq!(field.value_range(), None);
    }
}
