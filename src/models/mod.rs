//! Domain models
//!
//! This module contains all domain models representing game entities
//! and concepts. Models are pure data structures with minimal logic.

pub mod constants;
pub mod direction;
pub mod enterprise;
pub mod entity;
pub mod errors;
pub mod galaxy;
pub mod input_state;
pub mod klingon;
pub mod message;
pub mod position;
pub mod quadrant;
pub mod sector_map;
pub mod star;
pub mod starbase;
pub mod stardate;
pub mod torpedo;
