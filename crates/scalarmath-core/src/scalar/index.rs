//! Cyclic index arithmetic and ULP stepping.

use crate::types::Scalar;
use num_traits::{PrimInt, Unsigned};

/// Advances `index` by `stride` within `[0, count)`, wrapping around.
///
/// `count` must be non-zero.
pub fn succ_by<T: PrimInt + Unsigned>(index: T, count: T, stride: T) -> T {
    let index = index % count;
    let stride = stride % count;
    if index >= count - stride {
        index - (count - stride)
    } else {
        index + stride
    }
}

/// Advances `index` by one within `[0, count)`, wrapping around.
pub fn succ<T: PrimInt + Unsigned>(index: T, count: T) -> T {
    succ_by(index, count, T::one())
}

/// Steps `index` back by `stride` within `[0, count)`, wrapping around.
///
/// `count` must be non-zero.
pub fn pred_by<T: PrimInt + Unsigned>(index: T, count: T, stride: T) -> T {
    let index = index % count;
    let stride = stride % count;
    if index >= stride {
        index - stride
    } else {
        count - (stride - index)
    }
}

/// Steps `index` back by one within `[0, count)`, wrapping around.
pub fn pred<T: PrimInt + Unsigned>(index: T, count: T) -> T {
    pred_by(index, count, T::one())
}

/// The smallest representable value strictly greater than `x`.
pub fn next_greater<T: Scalar>(x: T) -> T {
    x.next_up()
}
