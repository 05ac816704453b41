//! Payload identity used by removal.
//!
//! The tree never interprets payloads. The only question it asks of one is
//! whether it *is* another payload, which for references and shared pointers
//! means pointing at the same allocation, not holding equal values.

use std::rc::Rc;
use std::sync::Arc;

/// Identity comparison for payload handles.
///
/// # Example
///
/// ```rust
/// use spatio_quadtree::PayloadRef;
/// use std::rc::Rc;
///
/// let a = Rc::new("ship");
/// let b = Rc::new("ship");
/// assert!(a.same_payload(&a.clone()));
/// assert!(!a.same_payload(&b));
/// ```
pub trait PayloadRef {
    fn same_payload(&self, other: &Self) -> bool;
}

impl<T: ?Sized> PayloadRef for &T {
    fn same_payload(&self, other: &Self) -> bool {
        std::ptr::eq(*self, *other)
    }
}

impl<T: ?Sized> PayloadRef for *const T {
    fn same_payload(&self, other: &Self) -> bool {
        std::ptr::eq(*self, *other)
    }
}

impl<T: ?Sized> PayloadRef for *mut T {
    fn same_payload(&self, other: &Self) -> bool {
        std::ptr::eq(*self, *other)
    }
}

impl<T: ?Sized> PayloadRef for Rc<T> {
    fn same_payload(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> PayloadRef for Arc<T> {
    fn same_payload(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

// Integer handles (entity ids, slot indices) are their own identity.
macro_rules! impl_handle {
    ($($ty:ty),*) => {
        $(
            impl PayloadRef for $ty {
                fn same_payload(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

impl_handle!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
