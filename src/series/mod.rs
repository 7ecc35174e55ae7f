//! EIA standard value series and their decade-scaled tables.
//!
//! A [`ValueSet`] is the ordered list of magnitudes a search may draw from.
//! Tables are generated from the per-decade mantissas of an [`EiaStandard`]
//! over a [`DecadeRange`]; a [`Catalog`] precomputes every table for both
//! component families so searches only borrow them.
//!
//! ```
//! use passive_core::series::generate_table;
//!
//! let e3 = generate_table(3, 0, 1).unwrap();
//! assert_eq!(e3.len(), 6);
//! assert_eq!(e3.values()[3], 10.0);
//! ```

mod catalog;
mod eia;
mod table;

pub use catalog::{Catalog, CatalogConfig};
pub use eia::EiaStandard;
pub use table::{generate_table, standard_table, DecadeRange, ValueSet, MAX_DECADE, MIN_DECADE};
