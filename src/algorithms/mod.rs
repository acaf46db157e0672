//! Traced graph algorithm implementations.
//!
//! Each algorithm returns its result together with the full trace of
//! intermediate states, built eagerly before returning.

pub mod dijkstra;
#[cfg(feature = "mst")]
pub mod disjoint_set;
#[cfg(feature = "mst")]
pub mod kruskal;
#[cfg(feature = "mst")]
pub mod prim;

#[cfg(test)]
pub(crate) mod testing;
