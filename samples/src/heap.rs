//
// Copyright (c) 2026 tracefix developers
//
// This file is part of the tracefix-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Owned blocks from the system allocator.
//!
//! `HeapBlock` wraps a `calloc`/`free` pair so the allocator samples drive
//! the C library allocator directly, while still checking for failure and
//! releasing exactly once.

use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum HeapError {
    #[error("cannot allocate {len} elements of {elem_size} bytes: size overflow")]
    Overflow { len: usize, elem_size: usize },
    #[error("cannot allocate {bytes} bytes")]
    OutOfMemory { bytes: usize },
    #[error("index {idx} out of range for block of {len} elements")]
    OutOfBounds { idx: usize, len: usize },
}

mod sealed {
    pub trait Sealed {}
}

/// Element types for which an all-zero bit pattern is a valid value.
pub trait Element: Copy + sealed::Sealed {}

macro_rules! element {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}
            impl Element for $t {}
        )*
    };
}

element!(u8, i8, u16, i16, u32, i32, u64, i64, usize, isize);

pub struct HeapBlock<T: Element> {
    ptr: NonNull<T>,
    len: usize,
    _owns: PhantomData<T>,
}

impl<T: Element> HeapBlock<T> {
    /// Allocate `len` zeroed elements.  A zero-length block still holds a
    /// unique one-element allocation.
    pub fn new(len: usize) -> Result<HeapBlock<T>, HeapError> {
        let elem_size = mem::size_of::<T>();
        let bytes = len
            .checked_mul(elem_size)
            .ok_or(HeapError::Overflow { len, elem_size })?;

        let raw = unsafe { libc::calloc(len.max(1), elem_size) } as *mut T;
        let ptr = NonNull::new(raw).ok_or(HeapError::OutOfMemory { bytes })?;

        log::debug!("allocated {bytes} bytes at {:p}", ptr);
        Ok(HeapBlock {
            ptr,
            len,
            _owns: PhantomData,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn write(&mut self, idx: usize, value: T) -> Result<(), HeapError> {
        self.check(idx)?;
        unsafe { self.ptr.as_ptr().add(idx).write(value) };
        Ok(())
    }

    pub fn read(&self, idx: usize) -> Result<T, HeapError> {
        self.check(idx)?;
        Ok(unsafe { self.ptr.as_ptr().add(idx).read() })
    }

    fn check(&self, idx: usize) -> Result<(), HeapError> {
        if idx < self.len {
            Ok(())
        } else {
            Err(HeapError::OutOfBounds { idx, len: self.len })
        }
    }
}

impl<T: Element> Drop for HeapBlock<T> {
    fn drop(&mut self) {
        log::debug!("freeing block at {:p}", self.ptr);
        unsafe { libc::free(self.ptr.as_ptr() as *mut libc::c_void) };
    }
}

cfg_if::cfg_if! {
    if #[cfg(all(target_os = "linux", target_env = "gnu"))] {
        use std::ffi::CStr;

        extern "C" {
            fn gnu_get_libc_version() -> *const libc::c_char;
        }

        /// Version of the C library the process is running against.
        pub fn libc_version() -> String {
            let version = unsafe { gnu_get_libc_version() };
            if version.is_null() {
                return String::from("unknown");
            }
            unsafe { CStr::from_ptr(version) }
                .to_string_lossy()
                .into_owned()
        }
    } else {
        /// Version of the C library the process is running against.
        pub fn libc_version() -> String {
            String::from("unknown")
        }
    }
}
