pub mod convex_hull;

#[doc(inline)]
pub use convex_hull::{convex_hull, convex_hull_with_rng, remove_duplicates, Algorithm};
