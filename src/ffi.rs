//! C-compatible FFI for the quadtree.
//!
//! These functions provide a minimal handle-based interface that can be
//! consumed from C or other languages that interoperate with a `cdylib`.
//!
//! Payloads cross the boundary as untyped pointers. The tree stores them
//! verbatim, never dereferences or frees them, and compares them by address
//! on removal. A tree handle must not be used from more than one thread at a
//! time, and a callback must not call back into the tree it is invoked from.

use crate::QuadTree;
use std::ffi::c_void;
use std::os::raw::{c_double, c_uint, c_ulong};
use std::ptr;

/// Callback invoked once per visited point: `(x, y, payload, context)`.
pub type QuadTreeCallback =
    Option<unsafe extern "C" fn(c_double, c_double, *mut c_void, *mut c_void)>;

/// Opaque tree handle exposed to C callers.
pub struct QuadTreeHandle {
    tree: QuadTree<*mut c_void>,
}

/// Create a tree. Returns null if the bounds are not finite with a positive
/// width and height. A `max_points_per_node` of 0 is treated as 1.
#[unsafe(no_mangle)]
pub extern "C" fn quadtree_create(
    x: c_double,
    y: c_double,
    width: c_double,
    height: c_double,
    max_levels: c_uint,
    max_points_per_node: c_uint,
) -> *mut QuadTreeHandle {
    match QuadTree::with_bounds(
        x,
        y,
        width,
        height,
        max_levels,
        max_points_per_node as usize,
    ) {
        Ok(tree) => Box::into_raw(Box::new(QuadTreeHandle { tree })),
        Err(e) => {
            log::warn!("quadtree_create failed: {}", e);
            ptr::null_mut()
        }
    }
}

/// # Safety
/// `handle` must be null or a pointer obtained from `quadtree_create` that
/// has not been released yet.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn quadtree_release(handle: *mut QuadTreeHandle) {
    if handle.is_null() {
        return;
    }

    // Reconstruct the Box so it is dropped at the end of the scope.
    drop(unsafe { Box::from_raw(handle) });
}

/// Insert a point. Points outside the tree bounds are ignored.
///
/// # Safety
/// `handle` must be null or a live handle from `quadtree_create`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn quadtree_insert(
    handle: *mut QuadTreeHandle,
    x: c_double,
    y: c_double,
    payload: *mut c_void,
) {
    let Some(handle) = (unsafe { handle.as_mut() }) else {
        return;
    };

    if let Err(e) = handle.tree.insert(x, y, payload) {
        log::debug!("quadtree_insert ignored: {}", e);
    }
}

/// Remove the entries at `(x, y)` whose payload pointer equals `payload`.
/// Returns the number of entries removed.
///
/// # Safety
/// `handle` must be null or a live handle from `quadtree_create`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn quadtree_remove_payload(
    handle: *mut QuadTreeHandle,
    x: c_double,
    y: c_double,
    payload: *mut c_void,
) -> c_ulong {
    let Some(handle) = (unsafe { handle.as_mut() }) else {
        return 0;
    };

    handle.tree.remove_payload(x, y, &payload) as c_ulong
}

/// Invoke `callback` for every point inside the rectangle. `callback` may be
/// null to only count. Returns the number of points found.
///
/// # Safety
/// `handle` must be null or a live handle from `quadtree_create`. `callback`,
/// if non-null, must be safe to call with `context`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn quadtree_find(
    handle: *const QuadTreeHandle,
    x: c_double,
    y: c_double,
    width: c_double,
    height: c_double,
    callback: QuadTreeCallback,
    context: *mut c_void,
) -> c_ulong {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        return 0;
    };

    let query = crate::Rect::new(x, y, width, height);
    let count = handle.tree.find(&query, |px, py, payload| {
        if let Some(callback) = callback {
            unsafe { callback(px, py, *payload, context) };
        }
    });
    count as c_ulong
}

/// Invoke `callback` for every stored point. `callback` may be null.
/// Returns the total number of points in the tree.
///
/// # Safety
/// `handle` must be null or a live handle from `quadtree_create`. `callback`,
/// if non-null, must be safe to call with `context`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn quadtree_walk(
    handle: *const QuadTreeHandle,
    callback: QuadTreeCallback,
    context: *mut c_void,
) -> c_ulong {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        return 0;
    };

    let count = handle.tree.walk(|px, py, payload| {
        if let Some(callback) = callback {
            unsafe { callback(px, py, *payload, context) };
        }
    });
    count as c_ulong
}
