//! Heap accounting for tree destruction
//!
//! A counting allocator tracks live allocations made on the test thread.
//! Text values longer than the inline capacity of `CompactString` live on the
//! heap, so each such node owns exactly one allocation.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

use render_tree::{ElementData, TextData, TreeBuilder};

struct Counting;

thread_local! {
    static LIVE: Cell<isize> = const { Cell::new(0) };
}

unsafe impl GlobalAlloc for Counting {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let _ = LIVE.try_with(|live| live.set(live.get() + 1));
        unsafe { System.alloc(layout) }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        let _ = LIVE.try_with(|live| live.set(live.get() - 1));
        unsafe { System.dealloc(ptr, layout) }
    }
}

#[global_allocator]
static ALLOC: Counting = Counting;

fn live() -> isize {
    LIVE.with(Cell::get)
}

fn long_text(i: usize) -> String {
    format!("paragraph number {i:04} with enough text to spill")
}

#[test]
fn test_destroy_returns_every_allocation() {
    let before = live();

    let mut builder = TreeBuilder::new();
    for section in 0..4 {
        builder.open(ElementData::new("section")).unwrap();
        for line in 0..8 {
            builder.paragraph(long_text(section * 8 + line)).unwrap();
        }
        builder.close();
    }
    let mut tree = builder.finish();
    let orphan = tree.create_text(TextData::paragraph(long_text(99))).unwrap();
    assert_eq!(tree.text_value(orphan).unwrap().len(), long_text(99).len());

    // 32 attached texts and one orphan each hold a heap buffer
    let held = live() - before;
    assert!(held >= 33, "expected at least 33 live allocations, saw {held}");

    assert_eq!(tree.destroy(), 1 + 4 + 32 + 1);
    assert_eq!(live(), before);
}
