//! Granted permission checks must not touch the heap.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

use gatehouse_rbac::{
    new_hangout_permissions, new_standard_permissions, Action, PermissionChecker,
};
use gatehouse_roles::Role;

/// Counts allocations made on threads that opted in.
struct CountingAllocator;

thread_local! {
    static TRACKING: Cell<bool> = const { Cell::new(false) };
    static ALLOCATIONS: Cell<usize> = const { Cell::new(0) };
}

fn record_allocation() {
    let tracking = TRACKING.try_with(Cell::get).unwrap_or(false);
    if tracking {
        let _ = ALLOCATIONS.try_with(|count| count.set(count.get() + 1));
    }
}

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        record_allocation();
        System.alloc(layout)
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        record_allocation();
        System.alloc_zeroed(layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        record_allocation();
        System.realloc(ptr, layout, new_size)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }
}

#[global_allocator]
static GLOBAL: CountingAllocator = CountingAllocator;

/// Run `f` and return how many allocations it made on this thread.
fn count_allocations(f: impl FnOnce()) -> usize {
    ALLOCATIONS.with(|count| count.set(0));
    TRACKING.with(|tracking| tracking.set(true));
    f();
    TRACKING.with(|tracking| tracking.set(false));
    ALLOCATIONS.with(Cell::get)
}

#[test]
fn test_granted_checks_do_not_allocate() {
    let standard = new_standard_permissions();
    let hangout = new_hangout_permissions();
    let user = Role::USER;
    let node = Role::NODE;
    let admin = Role::ADMIN;

    // Registers tracing callsites before counting.
    assert!(standard.has_permission(&admin, "AnythingAtAll").is_ok());

    let allocations = count_allocations(|| {
        for _ in 0..1000 {
            assert!(standard.has_permission(&user, "SignIn").is_ok());
            assert!(standard.has_permission(&node, "GetChunkWriter").is_ok());
            assert!(hangout.has_permission(&node, "UpsertCertAuthority").is_ok());
            assert!(hangout.authorize(&user, Action::GenerateUserCert).is_ok());
            assert!(standard.has_permission(&admin, "AnythingAtAll").is_ok());
        }
    });

    assert_eq!(allocations, 0);
}

#[test]
fn test_action_lookup_does_not_allocate() {
    let allocations = count_allocations(|| {
        for _ in 0..1000 {
            assert_eq!(Action::parse("GetSeakKeys"), Some(Action::GetSealKeys));
            assert_eq!(Action::parse("LaunchMissiles"), None);
            assert_eq!(Action::all().len(), 46);
        }
    });

    assert_eq!(allocations, 0);
}
