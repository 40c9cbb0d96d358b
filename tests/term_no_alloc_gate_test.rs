use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_pipes::core::GameSession;
use tui_pipes::term::{FrameBuffer, GameView, RecordStatus, Viewport};
use tui_pipes::types::{Direction, GameAction};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn snapshot_and_render_are_allocation_free_after_warmup() {
    let view = GameView::default();
    let viewport = Viewport::new(120, 30);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    let mut session = GameSession::new(18, 30, 4242).unwrap();
    let mut snap = session.snapshot();
    // At most two steps per cell, one per Cross elbow.
    snap.water.reserve(2 * 18 * 30);
    view.render_into(&snap, RecordStatus::default(), viewport, &mut fb);

    let allocs = with_alloc_counting(|| {
        for i in 0..200u32 {
            session.tick();
            if i % 20 == 0 {
                session.apply_action(GameAction::Cursor(Direction::Down));
            }
            session.snapshot_into(&mut snap);
            view.render_into(&snap, RecordStatus::default(), viewport, &mut fb);
        }
    });

    assert_eq!(allocs, 0);
}
