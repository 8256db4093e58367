// model = "claude-opus-4-5"
// created = 2026-08-07
// modified = 2026-08-07
// driver = "Isaac Clayton"

//! Educational red-black tree implementations.
//!
//! This crate exists for learning, not for production use. The production
//! engine lives in the `redbud` crate; here the same ideas are rebuilt in
//! the smallest form that still demonstrates them:
//!
//! - `insertion`: an insert-only tree that walks through the three insert
//!   fixup cases with one rotation primitive per direction, which is the
//!   whole balancing story short of deletion's double-black machinery.
//!
//! # Example
//!
//! ```
//! use pedagogy::insertion::TeachingTree;
//!
//! let mut tree = TeachingTree::new();
//! for key in [10, 20, 5, 15, 25] {
//!     tree.insert(key).unwrap();
//! }
//!
//! assert!(tree.contains(&15));
//! assert!(tree.is_valid());
//! ```

pub mod insertion;
