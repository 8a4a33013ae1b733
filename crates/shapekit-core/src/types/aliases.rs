//! Type aliases for commonly used complex types.
//!
//! The editor is single-threaded: listeners and the session that notifies
//! them live on the UI thread, so sharing is `Rc<RefCell<T>>` rather than
//! `Arc<Mutex<T>>`.
//!
//! ## Usage
//!
//! ```rust
//! use shapekit_core::types::{shared, Shared};
//!
//! let counter: Shared<u32> = shared(0);
//! *counter.borrow_mut() += 1;
//! assert_eq!(*counter.borrow(), 1);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

/// A reference-counted, interior-mutable wrapper for single-threaded sharing.
///
/// Used for listeners that the session notifies and the UI adapter reads back.
pub type Shared<T> = Rc<RefCell<T>>;

/// Wraps a value in a [`Shared`] cell.
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}
