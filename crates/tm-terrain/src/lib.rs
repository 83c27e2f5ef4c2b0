//! `tm-terrain`: the terrain and cost oracle queried by the resolver.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`terrain`] | `Terrain` trait, `Tile`, `TerrainGrid`, `OpenTerrain`       |
//! | [`costs`]   | `CostMatrix`: one `u8` traversal cost per cell             |
//! | [`error`]   | `TerrainError`, `TerrainResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod costs;
pub mod error;
pub mod terrain;

#[cfg(test)]
mod tests;

pub use costs::{BLOCKED_COST, CostMatrix, PLAIN_COST, SWAMP_COST};
pub use error::{TerrainError, TerrainResult};
pub use terrain::{OpenTerrain, Terrain, TerrainGrid, Tile};
