//! # rallocator - A General-Purpose Heap Allocator
//!
//! This crate provides a **two-level heap allocator**: a page-granularity
//! backing store (the `PageProvider`) is carved into "major" blocks (a run of
//! pages), and each major block is in turn carved into "minor" blocks (one
//! live user allocation each).
//!
//! ## Overview
//!
//! ```text
//!   Two-Level Heap Layout:
//!
//!   Heap
//!    root ──► ┌─────────────── Major A ───────────────┐
//!             │ header │ Minor 1 │ Minor 2 │   free    │
//!             └────────┴─────────┴─────────┴───────────┘
//!                  │
//!                  └─next──► ┌──────────── Major B ────────────┐
//!                             │ header │  free  │ Minor 3 │ free│
//!                             └────────┴────────┴─────────┴─────┘
//!
//!   Majors are a doubly-linked list of page runs obtained from a
//!   `PageProvider`. Minors are a doubly-linked, address-ordered list of
//!   live allocations inside one major.
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//!   rallocator
//!   ├── align  - alignment shim (align_up / unalign, the stash byte)
//!   ├── block  - Major / Minor header layout
//!   ├── page   - PageProvider trait + an mmap-backed default
//!   └── heap   - Heap: the allocate/free/alloc_zeroed/resize state machine
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rallocator::{Heap, MmapPageProvider};
//!
//! let mut heap = Heap::new(MmapPageProvider::default());
//!
//! unsafe {
//!     let ptr = heap.allocate(128);
//!     assert!(!ptr.is_null());
//!     ptr.write(0xAB);
//!     heap.free(ptr);
//! }
//! ```
//!
//! ## How It Works
//!
//! Every allocation walks the major list (with a "best bet" shortcut caching
//! the major most likely to have room) looking for a hole big enough for the
//! request: at the front of the block, between two existing minors, or at
//! the tail. When nothing fits, a fresh major is pulled from the page
//! provider. Freeing a minor may empty its major entirely, in which case the
//! major's pages are handed straight back to the provider.
//!
//! ```text
//!   Single Minor Inside a Major:
//!   ┌────────────────┬──────────────────┬───────────────────────────┐
//!   │  Major Header   │   Minor Header   │      User Payload         │
//!   │                 │                  │  ┌──┬───────────────┐    │
//!   │                 │                  │  │pad│  N bytes     │    │
//!   │                 │                  │  └──┴───────────────┘    │
//!   └─────────────────┴──────────────────┴───────────────────────────┘
//!                                            ▲
//!                                            └── pointer returned to caller
//!                                                (ALIGNMENT-aligned; the pad
//!                                                 distance is stashed in the
//!                                                 byte just below it)
//! ```
//!
//! ## Features
//!
//! - **First-fit with a best-bet cache**: near-constant-time steady state
//!   without ever skipping a satisfiable hole (see `heap::Heap::allocate`).
//! - **Corruption diagnostics**: magic numbers on every minor header catch
//!   double frees and wild pointers, and a heuristic flags likely 1-3 byte
//!   overruns (see `heap::Heap::free`).
//! - **Pluggable page source**: anything implementing `PageProvider` can
//!   back a `Heap` — the bundled `MmapPageProvider` is one choice, not the
//!   only one.
//!
//! ## Limitations
//!
//! - **Not thread-safe**: a `Heap` is a plain data structure; callers that
//!   share one across threads must add their own locking.
//! - **No coalescing across majors**: a major's pages are only returned to
//!   the provider when every minor inside it has been freed.
//! - **No size-class segregation or per-thread caches**: this is a single
//!   first-fit search, not a slab allocator.
//!
//! ## Safety
//!
//! This crate is inherently unsafe as it deals with raw memory management.
//! All allocation and deallocation operations require `unsafe` blocks, and
//! callers must uphold the contracts documented on each method (pointers
//! passed to `free`/`resize` must have come from this same heap).

pub mod align;
pub mod block;
pub mod heap;
pub mod page;

pub use heap::{Heap, HeapStats};
pub use page::{MmapPageProvider, PageProvider};

/// Size, in bytes, of a single page handed back by a [`page::PageProvider`].
pub const PAGE_SIZE: usize = 4096;

/// Minimum number of pages requested for any single major block, even when
/// the request itself would fit in fewer.
pub const MIN_PAGES_PER_MAJOR: usize = 16;

/// Byte alignment guaranteed for every pointer returned by [`Heap::allocate`]
/// and friends. Must be a power of two.
pub const ALIGNMENT: usize = 16;

/// Size of the stash slot kept immediately below every aligned user pointer,
/// used to recover the minor header's address on `free`/`resize`.
pub const ALIGN_INFO: usize = 16;

/// Sentinel written into a minor header's `magic` field while the
/// allocation is live.
pub const LIVE_MAGIC: u32 = 0xC001C0DE;

/// Sentinel a minor header's `magic` field is overwritten with at `free`
/// time, so a second `free` of the same pointer can be told apart from a
/// wild pointer.
pub const DEAD_MAGIC: u32 = 0xDEADDEAD;
