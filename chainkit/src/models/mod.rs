//! Contains the list data model: an arena of nodes addressed by identity handles.

mod arena;
pub use self::arena::*;

mod generator;
pub use self::generator::*;
