//! `tm-sim`: cycle driver for the traffic manager.
//!
//! # Cycle loop
//!
//! ```text
//! for each cycle:
//!   ① Register: the caller writes intents into `agents`
//!               (register_move, set_working_area, set_obstacle, set_fatigue).
//!   ② Resolve:  Resolver::resolve over the area → assigned_cell.
//!   ③ Emit:     emit_moves → Vec<Move> for agents that change cell.
//!   ④ Apply:    current_cell ← move.to for every move.
//!   ⑤ Reset:    clear_intents, cycle ← cycle + 1.
//! ```
//!
//! Nothing from the resolver carries over between cycles except agent
//! positions, fatigue, and RNG state.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use tm_sim::{NoopObserver, TrafficManagerBuilder};
//! use tm_terrain::TerrainGrid;
//!
//! let mut tm = TrafficManagerBuilder::new(TerrainGrid::walled())
//!     .config(config)
//!     .spawn_all(cells)
//!     .build()?;
//! tm.run_cycles(100, |cycle, agents| plan(cycle, agents), &mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod manager;
pub mod observer;


pub use builder::TrafficManagerBuilder;
pub use error::{SimError, SimResult};
pub use manager::TrafficManager;
pub use observer::{CycleObserver, CycleTotals, NoopObserver};
