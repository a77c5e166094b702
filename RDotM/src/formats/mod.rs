//! Input formats
//!
//! - `values` - `res/values/*.xml` resource declarations
//! - `color` - Android hex color literals

pub mod color;
pub mod values;

pub use color::{Argb, parse_hex_color};
pub use values::{
    FragmentStatus, ResourceEntry, ResourceKind, Resources, ValuesFragment, parse_values,
    parse_values_file, read_values_file,
};
