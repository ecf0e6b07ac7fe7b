//! Fixed-size list chunker.
//!
//! Splits a slice into consecutive runs of `size` elements. Every chunk is
//! full except possibly the last, which holds the remainder. A `size` of
//! zero is rejected with [`Error::InvalidArgument`].

use crate::error::{Error, Result};

/// Split `lst` into owned chunks of at most `size` elements.
pub fn chunk_list<T: Clone>(lst: &[T], size: usize) -> Result<Vec<Vec<T>>> {
    Ok(chunk_slices(lst, size)?
        .into_iter()
        .map(<[T]>::to_vec)
        .collect())
}

/// Split `lst` into borrowed chunks of at most `size` elements.
pub fn chunk_slices<T>(lst: &[T], size: usize) -> Result<Vec<&[T]>> {
    if size == 0 {
        return Err(Error::InvalidArgument(
            "chunk size must be > 0".to_string(),
        ));
    }
    Ok(lst.chunks(size).collect())
}
