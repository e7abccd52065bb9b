pub mod attribute;
pub mod boundary;
pub mod classify;
pub mod format;
pub mod geo_path;
pub mod geometry;
pub mod join;
pub mod observation;
pub mod projection;
pub mod region;
pub mod scale;
pub mod tabular;
pub mod types;

pub use attribute::Attribute;
pub use boundary::parse_boundary_regions;
pub use classify::{CLASS_COUNT, ClassPalette, ColorScale, ckmeans, natural_breakpoints};
pub use format::{format_axis_tick, format_number, format_tooltip_value};
pub use geo_path::ProjectedShape;
pub use geometry::{Geometry, Position, Ring};
pub use join::{JoinReport, join_observations};
pub use observation::{Observation, parse_numeric_cell};
pub use projection::{AlbersParams, AlbersProjection};
pub use region::Region;
pub use scale::LinearScale;
pub use tabular::parse_observations;
pub use types::{ElementId, ScreenPoint, SurfaceKind, Viewport};
