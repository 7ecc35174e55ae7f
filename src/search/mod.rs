//! Exhaustive nearest-combination search over standard value tables.
//!
//! Every "pick N standard parts closest to X" operation is the same
//! algorithm: enumerate the Cartesian product of candidate values (one list
//! per position, repetition allowed), skip tuples with a position outside its
//! bounds, score each tuple as `|f(tuple) - target|` and keep the first tuple
//! with the smallest error.
//!
//! | Operation | Scoring function `f` |
//! |-----------|----------------------|
//! | [`nearest_single`] / [`nearest_pair`] / [`nearest_triple`] | series/parallel equivalent |
//! | [`ratio_search`] | `num_eq / den_eq` |
//! | [`rc_search`] | `R_eq * C_eq` |
//!
//! Cost is `O(n^k)` for `k` positions over `n` candidates, so tight bounds
//! and coarse series matter for three or more positions.
//!
//! ```
//! use passive_core::combine::CombinationRule;
//! use passive_core::search::nearest_pair;
//! use passive_core::series::generate_table;
//!
//! let e12 = generate_table(12, 0, 6).unwrap();
//! let best = nearest_pair(12_200.0, &e12, &CombinationRule::RESISTOR_SERIES, None).unwrap();
//! assert!(best.error < 1e-6);
//! assert_eq!(best.values.len(), 2);
//! ```

mod engine;
mod nearest;
mod ratio;
mod rc;

pub use engine::{exhaustive_search, Bounds, Position, Selection, MAX_POSITIONS};
pub use nearest::{nearest_combination, nearest_pair, nearest_single, nearest_triple};
pub use ratio::{ratio_search, RatioQuery, RatioSelection};
pub use rc::{rc_search, rc_search_in, RcQuery, RcSelection};
