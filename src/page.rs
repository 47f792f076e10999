//! The page provider: the host-supplied primitive the heap is built on
//! top of. `Heap` never assumes what backs it — `mmap`, a kernel physical
//! memory manager, `sbrk`, or a plain test double all work.

use std::ffi::c_void;
use std::ptr::NonNull;

use crate::PAGE_SIZE;

/// A source of page-granularity memory regions.
///
/// # Safety
///
/// Implementors must ensure `page_alloc(pages)` returns a region valid for
/// reads and writes of exactly `pages * PAGE_SIZE` bytes, not aliased by
/// any other live allocation, for as long as it has not been passed back
/// to `page_free` with the same `pages` count.
pub unsafe trait PageProvider {
  /// Requests `pages` contiguous pages. Returns `None` if the request
  /// cannot be satisfied (the core treats this as a recoverable warning,
  /// never a panic).
  fn page_alloc(&mut self, pages: usize) -> Option<NonNull<u8>>;

  /// Returns a region previously obtained from `page_alloc` with the same
  /// `pages` count.
  ///
  /// # Safety
  ///
  /// `ptr` must be a value previously returned by `page_alloc(pages)` on
  /// this same provider, not already freed.
  unsafe fn page_free(&mut self, ptr: NonNull<u8>, pages: usize);
}

/// A [`PageProvider`] backed by anonymous, private `mmap` regions.
///
/// This is the default choice for hosted (non-bare-metal) use. It is not
/// privileged in any way — any other `PageProvider` implementation, such
/// as a bump/`sbrk`-style one or a bare-metal physical frame allocator,
/// works equally well with [`crate::Heap`].
#[derive(Debug, Default, Clone, Copy)]
pub struct MmapPageProvider {
  _private: (),
}

unsafe impl PageProvider for MmapPageProvider {
  fn page_alloc(&mut self, pages: usize) -> Option<NonNull<u8>> {
    let len = pages * PAGE_SIZE;
    let addr = unsafe {
      libc::mmap(
        std::ptr::null_mut(),
        len,
        libc::PROT_READ | libc::PROT_WRITE,
        libc::MAP_PRIVATE | libc::MAP_ANONYMOUS,
        -1,
        0,
      )
    };

    if addr == libc::MAP_FAILED {
      log::warn!(
        "mmap failed requesting {} pages ({} bytes): errno {}",
        pages,
        len,
        errno::errno()
      );
      return None;
    }

    log::debug!("mmap'd {} pages ({} bytes) at {:p}", pages, len, addr);
    NonNull::new(addr as *mut u8)
  }

  unsafe fn page_free(&mut self, ptr: NonNull<u8>, pages: usize) {
    let len = pages * PAGE_SIZE;
    let rc = unsafe { libc::munmap(ptr.as_ptr() as *mut c_void, len) };
    if rc != 0 {
      log::warn!(
        "munmap failed for {} pages ({} bytes) at {:p}: errno {}",
        pages,
        len,
        ptr.as_ptr(),
        errno::errno()
      );
    } else {
      log::debug!("munmap'd {} pages ({} bytes) at {:p}", pages, len, ptr.as_ptr());
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn mmap_provider_round_trips() {
    let mut provider = MmapPageProvider::default();
    let region = provider.page_alloc(4).expect("mmap should succeed");
    unsafe {
      region.as_ptr().write_bytes(0xAB, 4 * PAGE_SIZE);
      assert_eq!(region.as_ptr().read(), 0xAB);
      provider.page_free(region, 4);
    }
  }

  #[test]
  fn mmap_provider_single_page_round_trips() {
    // MIN_PAGES_PER_MAJOR floors every major-sized request; the provider
    // itself stays simple and has no opinion about that floor.
    let mut provider = MmapPageProvider::default();
    let region = provider.page_alloc(1).expect("mmap should succeed");
    unsafe { provider.page_free(region, 1) };
  }
}
