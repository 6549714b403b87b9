//! Entity models: one module per table, each with the row struct, the
//! `Create*`/`Update*` DTOs consumed by its repository, and the wire
//! response shape.

pub mod education;
pub mod portfolio_item;
pub mod skill;
pub mod user;
pub mod work;
