use std::io::Read;
use std::ptr;

use rallocator::{Heap, MmapPageProvider};

/// Waits until the user presses ENTER.
/// Useful when you want to inspect memory state with tools like `pmap`, `htop`,
/// `gdb`, or just visually track how allocations change the process's mapped
/// regions.
fn block_until_enter_pressed() {
  println!("\n>>> Press ENTER to continue...");
  let _ = std::io::stdin().bytes().next();
}

fn print_stats(label: &str, heap: &Heap<MmapPageProvider>) {
  let stats = heap.stats();
  println!(
    "[{}] allocated = {} bytes, inuse = {} bytes, warnings = {}, errors = {}",
    label, stats.allocated, stats.inuse, stats.warning_count, stats.error_count
  );
}

fn main() {
  // Our heap. Internally it holds a linked list of "major" blocks (page
  // runs from the provider), each carved into "minor" blocks (one live
  // allocation apiece).
  let mut heap = Heap::new(MmapPageProvider::default());

  unsafe {
    print_stats("start", &heap);
    block_until_enter_pressed();

    // --------------------------------------------------------------------
    // 1) Allocate space for a u32. This pulls in the first major block,
    //    sized MIN_PAGES_PER_MAJOR pages even though the request is tiny.
    // --------------------------------------------------------------------
    let a = heap.allocate(4) as *mut u32;
    a.write(0xDEAD_BEEF);
    println!("a = {:p}, *a = {:#010x}", a, a.read());
    print_stats("after allocate a", &heap);
    block_until_enter_pressed();

    // --------------------------------------------------------------------
    // 2) Allocate a second, larger block. Still fits in the same major.
    // --------------------------------------------------------------------
    let b_size = 256;
    let b = heap.allocate(b_size);
    ptr::write_bytes(b, 0xAB, b_size);
    println!("b = {:p}, {} bytes of 0xAB", b, b_size);
    print_stats("after allocate b", &heap);
    block_until_enter_pressed();

    // --------------------------------------------------------------------
    // 3) Free `a`. This opens a hole at the front of the major that a
    //    later allocation can reuse without growing `allocated`.
    // --------------------------------------------------------------------
    heap.free(a as *mut u8);
    print_stats("after free a", &heap);
    block_until_enter_pressed();

    // --------------------------------------------------------------------
    // 4) Allocate enough bytes to force a second major block.
    // --------------------------------------------------------------------
    let c_size = 64 * 1024;
    let c = heap.allocate(c_size);
    println!("c = {:p}, requested {} bytes", c, c_size);
    print_stats("after allocate c (forces a second major)", &heap);
    block_until_enter_pressed();

    // --------------------------------------------------------------------
    // 5) Grow `b` past its reserved size. This moves it to a fresh
    //    allocation and copies the live prefix across.
    // --------------------------------------------------------------------
    let grown_size = 4096;
    let b = heap.resize(b, grown_size);
    println!("b grown to {:p}, now {} bytes (first 256 preserved)", b, grown_size);
    print_stats("after growing b", &heap);
    block_until_enter_pressed();

    // --------------------------------------------------------------------
    // 6) Shrink `b` back down. This is in-place: the pointer never moves.
    // --------------------------------------------------------------------
    let b = heap.resize(b, 16);
    println!("b shrunk to {:p}, now 16 bytes", b);
    print_stats("after shrinking b", &heap);
    block_until_enter_pressed();

    // --------------------------------------------------------------------
    // 7) Free everything. Once both majors are empty their pages go back
    //    to the provider and `allocated` returns to zero.
    // --------------------------------------------------------------------
    heap.free(b);
    heap.free(c);
    print_stats("after freeing everything", &heap);
    block_until_enter_pressed();

    // --------------------------------------------------------------------
    // 8) Double free. Caught and counted as an error, not undefined
    //    behavior, because the minor header's magic was already cleared.
    // --------------------------------------------------------------------
    heap.free(c);
    print_stats("after double-freeing c", &heap);
  }
}
