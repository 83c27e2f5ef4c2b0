//! `tm-agent`: Structure-of-Arrays intent store for the `rust_tm` resolver.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`intent`]      | `MoveTarget`, `WorkingArea`                               |
//! | [`store`]       | `AgentStore` (SoA arrays + registration API), `AgentRngs` |
//! | [`builder`]     | `AgentStoreBuilder` (fluent construction)                 |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                     |
//! |------------|------------------------------------------------------------|
//! | `serde`    | Derives `Serialize`/`Deserialize` on `MoveTarget` and `WorkingArea`. |

pub mod builder;
pub mod intent;
pub mod store;


pub use builder::AgentStoreBuilder;
pub use intent::{MoveTarget, WorkingArea};
pub use store::{AgentRngs, AgentStore};
