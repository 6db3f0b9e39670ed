//! Owned slot storage for dense grids.
//!
//! `RawStorage<T>` is an arena of `len` contiguous `T` slots addressed by
//! index. It performs the three lifecycle steps explicitly:
//!
//! - **construct-all**: allocate the block, then construct every slot in
//!   order. If slot `k` fails (error or panic), slots `0..k` are dropped in
//!   reverse order and the block is freed before the failure propagates.
//! - **destroy-all**: drop every live slot, then free the block.
//! - **transfer**: hand the block to a new owner and leave an empty storage
//!   behind.
//!
//! # Memory Layout
//!
//! The block is allocated from the global allocator with
//! `Layout::array::<T>(len)`, the same layout `Vec<T>` and `Box<[T]>` use,
//! so storages convert to and from those types without copying. Empty
//! storages and zero-sized `T` use a dangling pointer and never touch the
//! allocator.

use alloc::alloc::{alloc, dealloc, handle_alloc_error, Layout};
use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;
use core::mem::{self, ManuallyDrop};
use core::ptr::{self, NonNull};
use core::slice;

use crate::error::CoreError;

/// Contiguous, exclusively owned storage for `len` live elements of `T`.
///
/// # Invariants
///
/// - Slots `0..len` hold live values whenever the storage is observable.
/// - A heap block is owned iff `len > 0` and `T` is not zero-sized.
pub struct RawStorage<T> {
    ptr: NonNull<T>,
    len: usize,
    _owns: PhantomData<T>,
}

// SAFETY: RawStorage<T> owns its elements exactly like Vec<T> does.
unsafe impl<T: Send> Send for RawStorage<T> {}
// SAFETY: shared access only hands out `&T`.
unsafe impl<T: Sync> Sync for RawStorage<T> {}

#[inline]
fn layout_for<T>(len: usize) -> Result<Layout, CoreError> {
    Layout::array::<T>(len).map_err(|_| CoreError::CapacityOverflow { requested: len })
}

/// Allocate an uninitialized block with room for `len` slots.
fn allocate<T>(len: usize) -> Result<NonNull<T>, CoreError> {
    let layout = layout_for::<T>(len)?;
    if layout.size() == 0 {
        return Ok(NonNull::dangling());
    }
    // SAFETY: the layout has a non-zero size.
    let raw = unsafe { alloc(layout) };
    NonNull::new(raw.cast::<T>()).ok_or(CoreError::AllocFailed {
        bytes: layout.size(),
        align: layout.align(),
    })
}

/// Free a block previously returned by `allocate::<T>(len)`.
///
/// # Safety
/// `ptr` must come from `allocate::<T>(len)` (or a `Box<[T]>` of length
/// `len`) and every slot must already be dead.
unsafe fn deallocate<T>(ptr: NonNull<T>, len: usize) {
    if let Ok(layout) = Layout::array::<T>(len) {
        if layout.size() != 0 {
            dealloc(ptr.as_ptr().cast::<u8>(), layout);
        }
    }
}

/// Owns a block whose slots are already dead (or being dropped) and frees it.
struct BlockGuard<T> {
    ptr: NonNull<T>,
    len: usize,
}

impl<T> Drop for BlockGuard<T> {
    fn drop(&mut self) {
        // SAFETY: the block came from `allocate::<T>(len)` or a `Box<[T]>` of
        // length `len`, and no slot is read after this point.
        unsafe { deallocate(self.ptr, self.len) };
    }
}

/// Rollback state for an in-progress construct-all.
///
/// Dropping the guard destroys the constructed prefix in reverse order and
/// frees the block. A successful construction forgets it.
struct ConstructGuard<T> {
    ptr: NonNull<T>,
    capacity: usize,
    initialized: usize,
}

impl<T> Drop for ConstructGuard<T> {
    fn drop(&mut self) {
        for i in (0..self.initialized).rev() {
            // SAFETY: slots below `initialized` were written and not yet dropped.
            unsafe { ptr::drop_in_place(self.ptr.as_ptr().add(i)) };
        }
        // SAFETY: the block came from `allocate::<T>(capacity)` and is now empty.
        unsafe { deallocate(self.ptr, self.capacity) };
    }
}

impl<T> RawStorage<T> {
    /// An empty storage that owns no block.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            ptr: NonNull::dangling(),
            len: 0,
            _owns: PhantomData,
        }
    }

    /// Allocate `len` slots and construct slot `i` from `f(i)`.
    ///
    /// If `f` fails (returns `Err` or panics) at slot `k`, slots `0..k` are
    /// dropped in reverse order and the block is freed before the failure
    /// propagates. Allocation failures are converted into `E`.
    ///
    /// # Example
    /// ```
    /// use ndgrid_core::{CoreError, RawStorage};
    ///
    /// let squares = RawStorage::try_from_fn::<CoreError, _>(4, |i| Ok(i * i)).unwrap();
    /// assert_eq!(squares.as_slice(), &[0, 1, 4, 9]);
    /// ```
    pub fn try_from_fn<E, F>(len: usize, mut f: F) -> Result<Self, E>
    where
        E: From<CoreError>,
        F: FnMut(usize) -> Result<T, E>,
    {
        let ptr = allocate::<T>(len)?;
        let mut guard = ConstructGuard {
            ptr,
            capacity: len,
            initialized: 0,
        };

        while guard.initialized < len {
            let value = f(guard.initialized)?;
            // SAFETY: `initialized < capacity`, and the slot is uninitialized.
            unsafe { guard.ptr.as_ptr().add(guard.initialized).write(value) };
            guard.initialized += 1;
        }

        mem::forget(guard);
        Ok(Self {
            ptr,
            len,
            _owns: PhantomData,
        })
    }

    /// Allocate `len` slots and construct slot `i` from `f(i)`.
    #[inline]
    pub fn from_fn<F>(len: usize, mut f: F) -> Result<Self, CoreError>
    where
        F: FnMut(usize) -> T,
    {
        Self::try_from_fn(len, |i| Ok(f(i)))
    }

    /// Allocate `len` slots, each a clone of `value`.
    #[inline]
    pub fn filled(len: usize, value: &T) -> Result<Self, CoreError>
    where
        T: Clone,
    {
        Self::from_fn(len, |_| value.clone())
    }

    /// Allocate `len` slots, each built by `T::default()`.
    #[inline]
    pub fn from_default(len: usize) -> Result<Self, CoreError>
    where
        T: Default,
    {
        Self::from_fn(len, |_| T::default())
    }

    /// Deep-copy a slice into a fresh block.
    #[inline]
    pub fn from_slice(src: &[T]) -> Result<Self, CoreError>
    where
        T: Clone,
    {
        Self::from_fn(src.len(), |i| src[i].clone())
    }

    /// Adopt the buffer of a vector without copying its elements.
    ///
    /// Spare capacity is released first so that the block matches
    /// `Layout::array::<T>(len)`.
    pub fn from_vec(values: Vec<T>) -> Self {
        let boxed: Box<[T]> = values.into_boxed_slice();
        let len = boxed.len();
        let raw = Box::into_raw(boxed).cast::<T>();
        // SAFETY: `Box::into_raw` never returns null.
        let ptr = unsafe { NonNull::new_unchecked(raw) };
        Self {
            ptr,
            len,
            _owns: PhantomData,
        }
    }

    /// Hand the buffer over to a vector without copying its elements.
    pub fn into_vec(self) -> Vec<T> {
        let this = ManuallyDrop::new(self);
        // SAFETY: the block was allocated by the global allocator with
        // `Layout::array::<T>(len)` (or is dangling with nothing to free), and
        // all `len` slots are live.
        unsafe { Vec::from_raw_parts(this.ptr.as_ptr(), this.len, this.len) }
    }

    /// Number of live elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the storage holds no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the storage currently owns a heap block.
    #[inline]
    pub const fn is_allocated(&self) -> bool {
        self.len != 0 && mem::size_of::<T>() != 0
    }

    /// View the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots `0..len` are live and the pointer is aligned and non-null.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// View the live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`, and `&mut self` guarantees uniqueness.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Raw pointer to the first slot.
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Destroy every element and free the block, leaving the storage empty.
    ///
    /// Calling `clear` on an empty storage is a no-op.
    pub fn clear(&mut self) {
        let len = mem::replace(&mut self.len, 0);
        let ptr = mem::replace(&mut self.ptr, NonNull::dangling());
        if len == 0 {
            return;
        }
        // Frees the block even if an element destructor unwinds.
        let _block = BlockGuard { ptr, len };
        // SAFETY: slots `0..len` were live; `self` no longer refers to them,
        // so a panicking destructor cannot cause a second drop.
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(ptr.as_ptr(), len)) };
    }

    /// Move the block into a new storage, leaving `self` empty.
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::empty())
    }
}

impl<T> Drop for RawStorage<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for RawStorage<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

#[cold]
fn clone_failed<T>(len: usize, err: CoreError) -> ! {
    match Layout::array::<T>(len) {
        Ok(layout) => handle_alloc_error(layout),
        Err(_) => panic!("{}", err),
    }
}

impl<T: Clone> Clone for RawStorage<T> {
    fn clone(&self) -> Self {
        Self::from_slice(self.as_slice()).unwrap_or_else(|err| clone_failed::<T>(self.len, err))
    }

    /// Reuses the existing block when the lengths agree; otherwise builds the
    /// copy first and releases the old block afterwards.
    fn clone_from(&mut self, source: &Self) {
        if self.len == source.len {
            self.as_mut_slice().clone_from_slice(source.as_slice());
        } else {
            *self = source.clone();
        }
    }
}

impl<T: PartialEq> PartialEq for RawStorage<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for RawStorage<T> {}

impl<T: fmt::Debug> fmt::Debug for RawStorage<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T> From<Vec<T>> for RawStorage<T> {
    #[inline]
    fn from(values: Vec<T>) -> Self {
        Self::from_vec(values)
    }
}
