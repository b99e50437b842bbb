//! Vertex index sequences in the narrowest GPU-supported width.
//!
//! An [`IndexList`] stores unsigned indices as 8, 16 or 32-bit integers. Every read and write
//! goes through `u32` values, so callers never handle the backing width directly; it is only
//! observable through [`IndexList::index_type`] and [`IndexList::type_byte_depth`], which is
//! what a draw call needs alongside [`IndexList::as_ptr`] and [`IndexList::count`].
//!
//! The width is chosen at construction from the *type* of the provided indices (not their
//! values) and only ever changes through [`IndexList::set_type`] or
//! [`IndexList::set_type_gl`]. Writing a value that does not fit the current width truncates
//! it.

use std::{ffi::c_void, fmt, mem};

use anyhow::bail;

/// OpenGL `GL_UNSIGNED_BYTE`.
const GL_UNSIGNED_BYTE: u32 = 0x1401;
/// OpenGL `GL_UNSIGNED_SHORT`.
const GL_UNSIGNED_SHORT: u32 = 0x1403;
/// OpenGL `GL_UNSIGNED_INT`.
const GL_UNSIGNED_INT: u32 = 0x1405;

/// The backing width of an [`IndexList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexType {
    U8,
    U16,
    U32,
}

impl IndexType {
    /// Returns the narrowest width whose elements are at least `bytes` large, capped at 32 bits.
    const fn for_size(bytes: usize) -> Self {
        match bytes {
            0 | 1 => Self::U8,
            2 => Self::U16,
            _ => Self::U32,
        }
    }

    /// Returns the width an [`IndexList`] built from `T` values uses.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cg_space::IndexType;
    /// assert_eq!(IndexType::for_type::<u8>(), IndexType::U8);
    /// assert_eq!(IndexType::for_type::<i16>(), IndexType::U16);
    /// assert_eq!(IndexType::for_type::<u64>(), IndexType::U32);
    /// ```
    pub const fn for_type<T: IndexValue>() -> Self {
        T::INDEX_TYPE
    }

    /// Size of one index in bytes.
    pub const fn byte_depth(self) -> usize {
        match self {
            Self::U8 => mem::size_of::<u8>(),
            Self::U16 => mem::size_of::<u16>(),
            Self::U32 => mem::size_of::<u32>(),
        }
    }

    /// The OpenGL element type enum (`GL_UNSIGNED_BYTE`, `GL_UNSIGNED_SHORT` or
    /// `GL_UNSIGNED_INT`) to pass to draw calls.
    pub const fn gl_enum(self) -> u32 {
        match self {
            Self::U8 => GL_UNSIGNED_BYTE,
            Self::U16 => GL_UNSIGNED_SHORT,
            Self::U32 => GL_UNSIGNED_INT,
        }
    }

    /// Parses an OpenGL element type enum.
    ///
    /// Returns an error if `gl_enum` is not one of the three unsigned integer types.
    pub fn from_gl_enum(gl_enum: u32) -> anyhow::Result<Self> {
        Ok(match gl_enum {
            GL_UNSIGNED_BYTE => Self::U8,
            GL_UNSIGNED_SHORT => Self::U16,
            GL_UNSIGNED_INT => Self::U32,
            _ => bail!("invalid index type enum {gl_enum:#06x}"),
        })
    }
}

/// Primitive integers that indices can be created from.
///
/// The [`IndexType`] is picked from the size of the type: 8-bit integers are stored in 8 bits,
/// 16-bit integers in 16 bits and everything wider in 32 bits. Conversion to `u32` is a plain
/// `as` cast, so negative and oversized values wrap.
pub trait IndexValue: Copy {
    const INDEX_TYPE: IndexType;

    fn to_u32(self) -> u32;
}

macro_rules! index_value {
    ($($t:ty),+) => {
        $(
            impl IndexValue for $t {
                const INDEX_TYPE: IndexType = IndexType::for_size(mem::size_of::<$t>());

                #[inline]
                fn to_u32(self) -> u32 {
                    self as u32
                }
            }
        )+
    };
}
index_value!(u8, u16, u32, u64, usize, i8, i16, i32, i64);

#[derive(Debug, Clone)]
enum Storage {
    U8(Vec<u8>),
    U16(Vec<u16>),
    U32(Vec<u32>),
}

/// Runs `$body` with `$v` bound to the active backing vector.
macro_rules! dispatch {
    ($storage:expr, $v:ident => $body:expr) => {
        match $storage {
            Storage::U8($v) => $body,
            Storage::U16($v) => $body,
            Storage::U32($v) => $body,
        }
    };
}

/// A sequence of `u32` indices stored in 8, 16 or 32 bits per element.
///
/// See the [module documentation](self) for how the width is chosen.
///
/// # Examples
///
/// ```
/// # use cg_space::{IndexList, IndexType};
/// let mut indices = IndexList::create::<u8>([0, 1, 2, 1, 2, 3]);
/// assert_eq!(indices.index_type(), IndexType::U8);
/// assert_eq!(indices.count(), 6);
/// assert_eq!(indices.get_at(3), 1);
///
/// indices.set_type(IndexType::U32);
/// assert_eq!(indices.type_byte_depth(), 4);
/// assert_eq!(indices.to_string(), "IndexList32{0, 1, 2, 1, 2, 3}");
/// ```
#[derive(Debug, Clone)]
pub struct IndexList {
    storage: Storage,
}

impl IndexList {
    /// Creates an empty list with 8-bit storage.
    pub fn new() -> Self {
        Self::with_type(IndexType::U8)
    }

    /// Creates an empty list with the given storage width.
    pub fn with_type(ty: IndexType) -> Self {
        let storage = match ty {
            IndexType::U8 => Storage::U8(Vec::new()),
            IndexType::U16 => Storage::U16(Vec::new()),
            IndexType::U32 => Storage::U32(Vec::new()),
        };
        Self { storage }
    }

    /// Creates a list from `values`, stored in the width [`IndexType::for_type::<T>`] selects.
    pub fn create<T: IndexValue>(values: impl IntoIterator<Item = T>) -> Self {
        let values = values.into_iter();
        let mut this = Self::with_type(T::INDEX_TYPE);
        this.ensure_capacity(values.size_hint().0);
        for value in values {
            this.add(value.to_u32());
        }
        this
    }

    /// Creates a list from a slice, stored in the width [`IndexType::for_type::<T>`] selects.
    ///
    /// Only the element type is considered: `&[u32]` always produces 32-bit storage, even if
    /// every value would fit into 8 bits.
    pub fn from_slice<T: IndexValue>(data: &[T]) -> Self {
        Self::create(data.iter().copied())
    }

    /// Replaces the contents with `data`, switching to the width selected by `T`.
    pub fn set_data<T: IndexValue>(&mut self, data: &[T]) {
        *self = Self::from_slice(data);
    }

    /// Returns the index at position `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn get_at(&self, index: usize) -> u32 {
        dispatch!(&self.storage, v => u32::from(v[index]))
    }

    /// Overwrites the index at position `index`, truncating `value` to the current width.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn set_at(&mut self, index: usize, value: u32) {
        dispatch!(&mut self.storage, v => v[index] = value as _)
    }

    /// Appends `value`, truncated to the current width.
    pub fn add(&mut self, value: u32) {
        dispatch!(&mut self.storage, v => v.push(value as _))
    }

    /// Removes and returns the last index, or returns [`None`] if the list is empty.
    pub fn remove_last(&mut self) -> Option<u32> {
        dispatch!(&mut self.storage, v => v.pop().map(u32::from))
    }

    /// Inserts `value` at position `index`, shifting all later indices.
    ///
    /// # Panics
    ///
    /// Panics if `index > count()`.
    pub fn insert(&mut self, index: usize, value: u32) {
        dispatch!(&mut self.storage, v => v.insert(index, value as _))
    }

    /// Inserts `count` copies of `value` at position `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > count()`.
    pub fn insert_n(&mut self, index: usize, count: usize, value: u32) {
        dispatch!(&mut self.storage, v => {
            v.splice(index..index, std::iter::repeat(value as _).take(count));
        })
    }

    /// Removes the index at position `index`, shifting all later indices.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove_at(&mut self, index: usize) -> u32 {
        dispatch!(&mut self.storage, v => u32::from(v.remove(index)))
    }

    /// Removes `count` indices starting at position `start`.
    ///
    /// # Panics
    ///
    /// Panics if the range exceeds the list.
    pub fn remove_range(&mut self, start: usize, count: usize) {
        dispatch!(&mut self.storage, v => {
            v.drain(start..start + count);
        })
    }

    /// Removes all indices, keeping the allocation and the width.
    pub fn clear(&mut self) {
        dispatch!(&mut self.storage, v => v.clear())
    }

    /// Makes sure at least `min_capacity` indices fit without reallocating, in the current
    /// width.
    pub fn ensure_capacity(&mut self, min_capacity: usize) {
        if min_capacity <= self.capacity() {
            return;
        }
        log::trace!(
            "reserving {} {}-bit indices",
            min_capacity,
            self.type_byte_depth() * 8
        );
        dispatch!(&mut self.storage, v => v.reserve(min_capacity - v.len()))
    }

    /// Number of indices in the list.
    pub fn count(&self) -> usize {
        dispatch!(&self.storage, v => v.len())
    }

    /// Returns `true` if the list holds no indices.
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Number of indices the list can hold without reallocating.
    pub fn capacity(&self) -> usize {
        dispatch!(&self.storage, v => v.capacity())
    }

    /// The current backing width.
    pub fn index_type(&self) -> IndexType {
        match self.storage {
            Storage::U8(_) => IndexType::U8,
            Storage::U16(_) => IndexType::U16,
            Storage::U32(_) => IndexType::U32,
        }
    }

    /// Size of one stored index in bytes.
    pub fn type_byte_depth(&self) -> usize {
        self.index_type().byte_depth()
    }

    /// The OpenGL element type enum of the current width.
    pub fn type_enum(&self) -> u32 {
        self.index_type().gl_enum()
    }

    /// Size of the stored indices in bytes.
    pub fn memory_size(&self) -> usize {
        self.count() * self.type_byte_depth()
    }

    /// Converts the storage to a new width.
    ///
    /// Every index is copied over, truncating values that do not fit into a narrower width. The
    /// capacity is preserved.
    pub fn set_type(&mut self, ty: IndexType) {
        if ty == self.index_type() {
            return;
        }

        log::trace!(
            "converting {} indices from {} to {} bits",
            self.count(),
            self.type_byte_depth() * 8,
            ty.byte_depth() * 8,
        );
        let capacity = self.count().max(self.capacity());
        self.storage = match ty {
            IndexType::U8 => Storage::U8(self.convert(capacity, |i| i as u8)),
            IndexType::U16 => Storage::U16(self.convert(capacity, |i| i as u16)),
            IndexType::U32 => Storage::U32(self.convert(capacity, |i| i)),
        };
    }

    /// Converts the storage to the width named by an OpenGL element type enum.
    ///
    /// Returns an error and leaves the list unchanged if `gl_enum` is not a valid index type.
    pub fn set_type_gl(&mut self, gl_enum: u32) -> anyhow::Result<()> {
        self.set_type(IndexType::from_gl_enum(gl_enum)?);
        Ok(())
    }

    fn convert<W>(&self, capacity: usize, cast: impl Fn(u32) -> W) -> Vec<W> {
        let mut out = Vec::with_capacity(capacity);
        out.extend(self.iter().map(cast));
        out
    }

    /// Returns an iterator over all indices.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        (0..self.count()).map(move |i| self.get_at(i))
    }

    /// Returns the stored indices as raw bytes in the current width, ready for upload.
    pub fn as_bytes(&self) -> &[u8] {
        dispatch!(&self.storage, v => bytemuck::cast_slice(v))
    }

    /// Returns a pointer to the first stored index.
    pub fn as_ptr(&self) -> *const c_void {
        dispatch!(&self.storage, v => v.as_ptr().cast())
    }
}

impl Default for IndexList {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<u8>> for IndexList {
    fn from(data: Vec<u8>) -> Self {
        Self {
            storage: Storage::U8(data),
        }
    }
}

impl From<Vec<u16>> for IndexList {
    fn from(data: Vec<u16>) -> Self {
        Self {
            storage: Storage::U16(data),
        }
    }
}

impl From<Vec<u32>> for IndexList {
    fn from(data: Vec<u32>) -> Self {
        Self {
            storage: Storage::U32(data),
        }
    }
}

/// Compares the indices, regardless of their width.
impl PartialEq for IndexList {
    fn eq(&self, other: &Self) -> bool {
        self.count() == other.count() && self.iter().eq(other.iter())
    }
}

impl Eq for IndexList {}

impl fmt::Display for IndexList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IndexList{}{{", self.type_byte_depth() * 8)?;
        for (i, index) in self.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{index}")?;
        }
        write!(f, "}}")
    }
}
