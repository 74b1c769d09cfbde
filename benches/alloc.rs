//! Allocation-counting benchmarks for lexorank.
//!
//! Measures the number of heap allocations and total bytes allocated for each
//! operation. Run with:
//!
//! ```sh
//! cargo bench --bench alloc
//! ```

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicUsize, Ordering};

use lexorank::{BigInt, Decimal, NumeralSystem, Rank, MAX_RANK, MID_RANK, MIN_RANK};

// ---------------------------------------------------------------------------
// Counting allocator
// ---------------------------------------------------------------------------

struct CountingAllocator;

static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);
static ALLOC_BYTES: AtomicUsize = AtomicUsize::new(0);
static ACTIVE: AtomicUsize = AtomicUsize::new(0); // 0 = not counting

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if ACTIVE.load(Ordering::Relaxed) != 0 {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
            ALLOC_BYTES.fetch_add(layout.size(), Ordering::Relaxed);
        }
        unsafe { System.alloc(layout) }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) }
    }
}

#[global_allocator]
static A: CountingAllocator = CountingAllocator;

/// Reset counters, run `f`, return (result, allocs, bytes).
fn measure<F: FnOnce() -> T, T>(f: F) -> (T, usize, usize) {
    ALLOC_COUNT.store(0, Ordering::SeqCst);
    ALLOC_BYTES.store(0, Ordering::SeqCst);

    ACTIVE.store(1, Ordering::SeqCst);
    let result = f();
    ACTIVE.store(0, Ordering::SeqCst);

    let count = ALLOC_COUNT.load(Ordering::SeqCst);
    let bytes = ALLOC_BYTES.load(Ordering::SeqCst);
    (result, count, bytes)
}

struct Row {
    name: &'static str,
    allocs: usize,
    bytes: usize,
}

fn print_table(rows: &[Row]) {
    println!("{:<40} {:>8} {:>12}", "operation", "allocs", "bytes");
    println!("{:-<40} {:->8} {:->12}", "", "", "");
    for row in rows {
        println!("{:<40} {:>8} {:>12}", row.name, row.allocs, row.bytes);
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() {
    // Force the process-wide constants before counting.
    let _ = (&*MIN_RANK, &*MID_RANK, &*MAX_RANK);
    let _ = MID_RANK.next().and_then(|r| r.prev());

    let system = NumeralSystem::base36();
    let mut rows = Vec::new();

    // -- Parsing -----------------------------------------------------------

    let (_, allocs, bytes) = measure(|| "0|hzzzzz:".parse::<Rank>().unwrap());
    rows.push(Row {
        name: "Rank::parse (\"0|hzzzzz:\")",
        allocs,
        bytes,
    });

    let (_, allocs, bytes) = measure(|| Decimal::parse("3:14159", system).unwrap());
    rows.push(Row {
        name: "Decimal::parse (\"3:14159\")",
        allocs,
        bytes,
    });

    // -- Arithmetic --------------------------------------------------------

    let a = BigInt::parse("zzzz", system).unwrap();
    let (_, allocs, bytes) = measure(|| a.add(&a).unwrap());
    rows.push(Row {
        name: "BigInt::add (\"zzzz\" + \"zzzz\")",
        allocs,
        bytes,
    });

    let (_, allocs, bytes) = measure(|| a.multiply(&a).unwrap());
    rows.push(Row {
        name: "BigInt::multiply (\"zzzz\" * \"zzzz\")",
        allocs,
        bytes,
    });

    // -- Rank operations ---------------------------------------------------

    let (_, allocs, bytes) = measure(|| MIN_RANK.between(&MAX_RANK).unwrap());
    rows.push(Row {
        name: "Rank::between (min, max)",
        allocs,
        bytes,
    });

    let low: Rank = "0|i00001:".parse().unwrap();
    let high: Rank = "0|i00002:".parse().unwrap();
    let (_, allocs, bytes) = measure(|| low.between(&high).unwrap());
    rows.push(Row {
        name: "Rank::between (adjacent)",
        allocs,
        bytes,
    });

    let (_, allocs, bytes) = measure(|| MID_RANK.next().unwrap());
    rows.push(Row {
        name: "Rank::next (mid)",
        allocs,
        bytes,
    });

    let (_, allocs, bytes) = measure(|| MID_RANK.prev().unwrap());
    rows.push(Row {
        name: "Rank::prev (mid)",
        allocs,
        bytes,
    });

    let (_, allocs, bytes) = measure(|| MID_RANK.to_string());
    rows.push(Row {
        name: "Rank Display",
        allocs,
        bytes,
    });

    print_table(&rows);
}
