//! Instance engine - the live side of the descriptor tree.
//!
//! Descriptors are declarative data; rendering them produces live
//! objects the core does not know the shape of. This module owns the
//! mapping between the two:
//! - `Instance`: the trait the rendering collaborator implements
//! - `InstanceRegistry`: the per-partition id → instance map with
//!   paired register/destroy lifecycle

mod instances;

pub use instances::*;
