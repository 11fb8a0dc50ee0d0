pub mod brick;
pub mod coords;
pub mod engine;
pub mod gravity;
pub mod grid;
pub mod region;
pub mod view;

// Re-exports for convenience in tests and integration users.
pub use brick::Brick;
pub use coords::Pos;
pub use engine::{Engine, RoundStatus};
pub use gravity::{ColumnMove, Fall, GravityPlan, compute_gravity};
pub use grid::{ConfigError, Grid, GridConfig};
pub use region::{compute_region, is_destroyable, no_more_destroyable};
pub use view::{render_rows, status_line};
