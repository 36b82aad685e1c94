//! # Lazy Sequence Toolkit
//!
//! This library provides a set of independent, stateless sequence algorithms that
//! produce their output lazily: each entry point returns an [`Iterator`] whose
//! elements are computed one at a time as the consumer pulls them, so memory is
//! bounded by the live iteration state (two running values, a traversal frontier,
//! an index vector) rather than by the size of the output.
//!
//! ## Key Features
//! - **Fibonacci Generation**: A lazy, finite iterator over the first `count`
//!   Fibonacci numbers as arbitrary-precision `BigUint` values, plus O(log n)
//!   random access to the nth value via matrix exponentiation.
//! - **Tokenizing**: Splits any line-oriented `BufRead` source into word tokens
//!   on a fixed delimiter set, one line at a time.
//! - **Tree Traversal**: Depth-first and breadth-first walks over any type
//!   implementing the [`tree::TreeNode`] capability trait. The depth-first walk
//!   uses an explicit stack and an emitted set, so it handles shared nodes and
//!   cycles without recursing.
//! - **Combination Enumeration**: Lexicographic enumeration of all k-length
//!   selections from a slice, advancing an index vector in place between yields.
//! - **Fill-on-Miss Lookup**: A lookup-or-populate primitive over any
//!   caller-supplied key-value store implementing [`cache::KeyValueStore`].
//!
//! ## Overview of Modules
//!
//! - [`fibonacci`]: `sequence` (lazy prefix) and `nth` (matrix exponentiation).
//! - [`tokenize`]: `tokenize` over a `BufRead` source.
//! - [`tree`]: the `TreeNode` trait, `depth_first`, and `breadth_first`.
//! - [`combinations`]: `combinations` and its `EnumerationError`.
//! - [`cache`]: the `KeyValueStore` trait with `get_or_build`.
//! - [`math`]: generic 2x2 matrix exponentiation and scalar product, used by the
//!   Fibonacci generator and exposed for reuse.
//!
//! All operations are single-threaded and synchronous. Abandoning an iterator
//! early simply drops its state; nothing is shared between calls.
//!
//! ## Usage Example
//! ```rust
//! use lazyseq::fibonacci;
//! use num_bigint::BigUint;
//! let twelfth = fibonacci::sequence(12).last().unwrap();
//! assert_eq!(twelfth, BigUint::from(144u32));
//! ```

pub mod cache;
pub mod combinations;
pub mod fibonacci;
pub mod math;
pub mod tokenize;
pub mod tree;
