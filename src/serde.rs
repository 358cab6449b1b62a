// This file is part of inplace-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`InplaceVec`](crate::InplaceVec).
//!
//! - **Serialize**: as a sequence of elements (length `len`).
//! - **Deserialize**: from any sequence of up to `N` elements, for either
//!   strategy. Elements are built straight into the vector; a longer
//!   sequence is an error ("too many elements (capacity N)") and every
//!   element read so far is dropped with the partial vector.

// Crate imports
use crate::{backend::Backend, vec::InplaceVec};

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

impl<T: Serialize, const N: usize, S> Serialize for InplaceVec<T, N, S> {
    fn serialize<Z: Serializer>(&self, s: Z) -> Result<Z::Ok, Z::Error> {
        use ser::SerializeSeq;
        let sl = self.as_slice();
        let mut seq = s.serialize_seq(Some(sl.len()))?;
        for item in sl {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct VecVisitor<T, const N: usize, S>(PhantomData<(T, S)>);

impl<'de, T, const N: usize, S> de::Visitor<'de> for VecVisitor<T, N, S>
where
    T: Deserialize<'de>,
    S: Backend<T>,
{
    type Value = InplaceVec<T, N, S>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "array or sequence with at most {} elements", N)
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut out = InplaceVec::<T, N, S>::new();
        while let Some(elem) = a.next_element::<T>()? {
            out.push(elem)
                .map_err(|_| de::Error::custom(format_args!("too many elements (capacity {N})")))?;
        }
        Ok(out)
    }
}

impl<'de, T, const N: usize, S> Deserialize<'de> for InplaceVec<T, N, S>
where
    T: Deserialize<'de>,
    S: Backend<T>,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(VecVisitor::<T, N, S>(PhantomData))
    }
}
