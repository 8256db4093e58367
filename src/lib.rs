// model = "claude-opus-4-5"
// created = "2026-08-07"
// modified = "2026-08-07"
// driver = "Isaac Clayton"

//! Redbud - ordered key storage on an arena-allocated red-black tree.
//!
//! # Quick Start
//!
//! ```
//! use redbud::tree::RbTree;
//!
//! // Create an ordered map
//! let mut scores: RbTree<String, u32> = RbTree::new();
//!
//! // Insert some entries; equal keys are rejected, never overwritten
//! scores.insert("ada".to_string(), 90).unwrap();
//! scores.insert("grace".to_string(), 95).unwrap();
//! assert!(scores.insert("ada".to_string(), 0).is_err());
//!
//! // Iterate in key order
//! let names: Vec<&String> = scores.keys().collect();
//! assert_eq!(names, ["ada", "grace"]);
//! ```
//!
//! For repeated minimum queries, `tree::cached::CachedRbTree` answers
//! `first_cached` in O(1).

pub mod tree;
