#![cfg_attr(not(feature = "std"), no_std)]
//! A two-grid naval combat simulation engine: one human-controlled side
//! against an automated opponent with adaptive targeting.

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod combatant;
mod common;
mod config;
mod game;
mod mask;
mod opponent;
mod targeting;
mod vessel;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod store;
#[cfg(feature = "std")]
mod ui;

pub use combatant::*;
pub use common::*;
pub use config::{fleet_cells, fleet_classes, SUPPORTED_GRIDS};
pub use game::*;
pub use mask::{CellMask, MaskError, SetCells, MAX_GRID};
pub use opponent::*;
pub use targeting::*;
pub use vessel::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use store::{StoreError, DEFAULT_SAVE_NAME};
#[cfg(feature = "std")]
pub use ui::*;
