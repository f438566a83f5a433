//! Dense rectangular N-dimensional array.
//!
//! Storage is a shape vector plus a flat row-major buffer, so the grid is
//! rectangular by construction. All transforms (`squeeze`, `reshape`,
//! `transpose`) preserve every element exactly once; lockstep mapping over
//! two grids fails fast when their shapes differ.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced by grid construction and transforms.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("lockstep map over mismatched shapes {left:?} vs {right:?}")]
    ShapeMismatch { left: Vec<usize>, right: Vec<usize> },
    #[error("cannot reshape {count} elements into shape {shape:?}")]
    CountMismatch { count: usize, shape: Vec<usize> },
    #[error("invalid axis permutation {perm:?} for rank {ndim}")]
    BadPermutation { perm: Vec<usize>, ndim: usize },
}

/// Dense N-dimensional array over `T`, indexed by coordinate tuple.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NdArray<T> {
    shape: Vec<usize>,
    data: Vec<T>,
}

fn size_of(shape: &[usize]) -> usize {
    shape.iter().product()
}

/// Convert a linear row-major index to a coordinate tuple.
fn unravel(mut idx: usize, shape: &[usize], coords: &mut [usize]) {
    for axis in (0..shape.len()).rev() {
        coords[axis] = idx % shape[axis];
        idx /= shape[axis];
    }
}

/// Convert a coordinate tuple to a linear row-major index.
fn ravel(coords: &[usize], shape: &[usize]) -> usize {
    coords
        .iter()
        .zip(shape)
        .fold(0, |idx, (&c, &d)| idx * d + c)
}

impl<T> NdArray<T> {
    /// Build a grid by applying `f` to every coordinate tuple of the cross
    /// product of `shape`, in row-major order, each exactly once.
    pub fn from_fn(shape: &[usize], mut f: impl FnMut(&[usize]) -> T) -> Self {
        let count = size_of(shape);
        let mut coords = vec![0usize; shape.len()];
        let mut data = Vec::with_capacity(count);
        for idx in 0..count {
            unravel(idx, shape, &mut coords);
            data.push(f(&coords));
        }
        Self {
            shape: shape.to_vec(),
            data,
        }
    }

    /// Grid of `shape` filled with clones of `value`.
    pub fn fill(shape: &[usize], value: T) -> Self
    where
        T: Clone,
    {
        Self::from_fn(shape, |_| value.clone())
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Nesting depth of the grid (length of the shape).
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Total element count.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Element at a coordinate tuple, or `None` when out of range.
    pub fn get(&self, coords: &[usize]) -> Option<&T> {
        if coords.len() != self.shape.len() {
            return None;
        }
        if coords.iter().zip(&self.shape).any(|(&c, &d)| c >= d) {
            return None;
        }
        self.data.get(ravel(coords, &self.shape))
    }

    /// Row-major iteration over elements.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Row-major iteration over (coordinates, element) pairs.
    pub fn indexed_iter(&self) -> impl Iterator<Item = (Vec<usize>, &T)> + '_ {
        self.data.iter().enumerate().map(|(idx, v)| {
            let mut coords = vec![0usize; self.shape.len()];
            unravel(idx, &self.shape, &mut coords);
            (coords, v)
        })
    }

    /// Element-wise map.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> NdArray<U> {
        NdArray {
            shape: self.shape.clone(),
            data: self.data.iter().map(&mut f).collect(),
        }
    }

    /// Element-wise map with the coordinate tuple of each element.
    pub fn indexed_map<U>(&self, mut f: impl FnMut(&[usize], &T) -> U) -> NdArray<U> {
        let mut coords = vec![0usize; self.shape.len()];
        let data = self
            .data
            .iter()
            .enumerate()
            .map(|(idx, v)| {
                unravel(idx, &self.shape, &mut coords);
                f(&coords, v)
            })
            .collect();
        NdArray {
            shape: self.shape.clone(),
            data,
        }
    }

    /// Lockstep element-wise map over two equal-shaped grids.
    /// Fails fast when the shapes are not identical; broadcastable scalars
    /// are expressed by closing over the scalar instead.
    pub fn zip_map<U, V>(
        &self,
        other: &NdArray<U>,
        mut f: impl FnMut(&T, &U) -> V,
    ) -> Result<NdArray<V>, GridError> {
        if self.shape != other.shape {
            return Err(GridError::ShapeMismatch {
                left: self.shape.clone(),
                right: other.shape.clone(),
            });
        }
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| f(a, b))
            .collect();
        Ok(NdArray {
            shape: self.shape.clone(),
            data,
        })
    }

    /// Outer product of two grids: result shape is `self.shape ++ other.shape`.
    pub fn outer_map<U, V>(
        &self,
        other: &NdArray<U>,
        mut f: impl FnMut(&T, &U) -> V,
    ) -> NdArray<V> {
        let mut shape = self.shape.clone();
        shape.extend_from_slice(&other.shape);
        let mut data = Vec::with_capacity(self.data.len() * other.data.len());
        for a in &self.data {
            for b in &other.data {
                data.push(f(a, b));
            }
        }
        NdArray { shape, data }
    }

    /// Remove exactly the size-1 dimensions, preserving order and values.
    /// Identity when no size-1 dimensions exist. Squeezing an all-singleton
    /// grid yields the rank-0 grid holding its single element.
    pub fn squeeze(mut self) -> Self {
        self.shape.retain(|&d| d != 1);
        self
    }

    /// Flatten to a row-major linear sequence.
    pub fn flatten(self) -> Vec<T> {
        self.data
    }

    /// Reinterpret the elements under a new shape with the same total count.
    /// Linear (row-major) order is preserved, so reshaping back to the
    /// original shape reconstructs the original grid exactly.
    pub fn reshape(self, new_shape: &[usize]) -> Result<Self, GridError> {
        if size_of(new_shape) != self.data.len() {
            return Err(GridError::CountMismatch {
                count: self.data.len(),
                shape: new_shape.to_vec(),
            });
        }
        Ok(Self {
            shape: new_shape.to_vec(),
            data: self.data,
        })
    }

    /// Axis permutation via coordinate remap: output axis `i` is input axis
    /// `perm[i]`. Transposing again with the inverse permutation reconstructs
    /// the original grid exactly.
    pub fn transpose(&self, perm: &[usize]) -> Result<Self, GridError>
    where
        T: Clone,
    {
        let ndim = self.shape.len();
        let mut seen = vec![false; ndim];
        if perm.len() != ndim || perm.iter().any(|&p| p >= ndim || std::mem::replace(&mut seen[p], true)) {
            return Err(GridError::BadPermutation {
                perm: perm.to_vec(),
                ndim,
            });
        }
        let new_shape: Vec<usize> = perm.iter().map(|&p| self.shape[p]).collect();
        let mut old = vec![0usize; ndim];
        Ok(NdArray::from_fn(&new_shape, |coords| {
            for (i, &p) in perm.iter().enumerate() {
                old[p] = coords[i];
            }
            self.data[ravel(&old, &self.shape)].clone()
        }))
    }
}

impl<T> IntoIterator for NdArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}
