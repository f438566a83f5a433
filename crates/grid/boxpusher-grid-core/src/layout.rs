//! Grid builders for device/shard layouts.
//!
//! The corpus of box animations positions its elements on regular grids,
//! sometimes with an inner per-device shard grid nested in an outer device
//! grid. Both builders are expressed through `NdArray::from_fn` so that all
//! coordinate construction flows through one index-mapping contract.

use crate::nd::NdArray;
use crate::vec::{v3, Vec3};

/// 2-d grid of cell positions: `origin + (i * delta.x, (num[1] - j) * delta.y)`.
/// The y index counts down from `num[1]`, matching the top-down row layout
/// used throughout the animations.
pub fn grid(origin: Vec3, num: [usize; 2], delta: Vec3) -> NdArray<Vec3> {
    NdArray::from_fn(&num, |c| {
        let (i, j) = (c[0], c[1]);
        origin + v3(i as f32 * delta.x, (num[1] - j) as f32 * delta.y, 0.0)
    })
}

/// Outer device grid plus the 4-d inner shard grid nested within each cell.
///
/// Returns `(outer, inner)` where `outer` has shape `num` and `inner` has
/// shape `num ++ inner_num`; `inner[i][j][k][l]` sits at
/// `outer[i][j] + inner_offset + ((k, inner_num[1] - l) * inner_delta)`.
pub fn multi_grid(
    origin: Vec3,
    num: [usize; 2],
    delta: Vec3,
    inner_offset: Vec3,
    inner_num: [usize; 2],
    inner_delta: Vec3,
) -> (NdArray<Vec3>, NdArray<Vec3>) {
    let outer = grid(origin, num, delta);
    let shape = [num[0], num[1], inner_num[0], inner_num[1]];
    let inner = NdArray::from_fn(&shape, |c| {
        let cell = *outer
            .get(&[c[0], c[1]])
            .unwrap_or(&origin);
        let (k, l) = (c[2], c[3]);
        cell + inner_offset
            + v3(
                k as f32 * inner_delta.x,
                (inner_num[1] - l) as f32 * inner_delta.y,
                0.0,
            )
    });
    (outer, inner)
}
