//! Major and minor header layout.
//!
//! ```text
//!   Major block (one page run from the PageProvider):
//!   ┌───────────────────────────────────────────────────────────────┐
//!   │ MajorHeader │ MinorHeader │ payload │ MinorHeader │ payload │..│
//!   └───────────────────────────────────────────────────────────────┘
//!     prev/next: major-list (unsorted)
//!     first: head of the minor-list below (sorted by address)
//! ```
//!
//! Both headers are plain `repr(C)` structs placed directly in memory
//! handed back by the page provider; there is no separate bookkeeping
//! table. `heap::Heap` is the only code that ever constructs, links, or
//! unlinks them.

use std::ptr;

/// Header at the start of a page run obtained from a [`crate::PageProvider`].
#[repr(C)]
pub struct MajorHeader {
  /// Previous major in the (unsorted) major-list, or null if this is `root`.
  pub prev: *mut MajorHeader,
  /// Next major in the major-list, or null if this is the tail.
  pub next: *mut MajorHeader,
  /// Number of pages this major occupies (needed to return it to the
  /// provider).
  pub pages: usize,
  /// Total size in bytes: `pages * PAGE_SIZE`.
  pub size: usize,
  /// Bytes currently committed: the header itself plus every live minor's
  /// header and payload.
  pub usage: usize,
  /// Head of this major's minor-list, sorted by address, or null if the
  /// major is empty.
  pub first: *mut MinorHeader,
}

impl MajorHeader {
  /// Bytes of this major not yet committed to any minor. Not necessarily
  /// available as one contiguous run.
  pub fn free_span(&self) -> usize {
    self.size - self.usage
  }
}

/// Header immediately preceding the payload of one live (or just-freed)
/// allocation.
#[repr(C)]
pub struct MinorHeader {
  /// Previous minor in the owning major's address-ordered list.
  pub prev: *mut MinorHeader,
  /// Next minor in the owning major's address-ordered list.
  pub next: *mut MinorHeader,
  /// The major this minor lives inside.
  pub block: *mut MajorHeader,
  /// [`crate::LIVE_MAGIC`] while allocated, [`crate::DEAD_MAGIC`] once freed.
  pub magic: u32,
  /// Bytes reserved for this allocation, including alignment slack. This
  /// is what `MajorHeader::usage` accounts for.
  pub size: usize,
  /// The size the caller actually asked for (bounds what was legally
  /// written; used by `resize`'s shrink fast path and by `resize`'s grow
  /// copy).
  pub req_size: usize,
}

impl MajorHeader {
  /// Initializes the header at `addr` in place and returns it as a raw
  /// pointer. `addr` must be the base of a page run at least
  /// `size_of::<MajorHeader>()` bytes long.
  ///
  /// # Safety
  ///
  /// `addr` must be valid for writes of `size_of::<MajorHeader>()` bytes.
  pub unsafe fn init(addr: *mut u8, pages: usize, size: usize) -> *mut MajorHeader {
    let maj = addr as *mut MajorHeader;
    unsafe {
      (*maj).prev = ptr::null_mut();
      (*maj).next = ptr::null_mut();
      (*maj).pages = pages;
      (*maj).size = size;
      (*maj).usage = std::mem::size_of::<MajorHeader>();
      (*maj).first = ptr::null_mut();
    }
    maj
  }
}

impl MinorHeader {
  /// Initializes the header at `addr` in place and returns it as a raw
  /// pointer.
  ///
  /// # Safety
  ///
  /// `addr` must be valid for writes of `size_of::<MinorHeader>()` bytes.
  pub unsafe fn init(
    addr: *mut u8,
    block: *mut MajorHeader,
    size: usize,
    req_size: usize,
    prev: *mut MinorHeader,
    next: *mut MinorHeader,
  ) -> *mut MinorHeader {
    let min = addr as *mut MinorHeader;
    unsafe {
      (*min).prev = prev;
      (*min).next = next;
      (*min).block = block;
      (*min).magic = crate::LIVE_MAGIC;
      (*min).size = size;
      (*min).req_size = req_size;
    }
    min
  }
}
