//! `res/values` resource declarations
//!
//! A values file is a `<resources>` document whose direct children declare
//! one named value each:
//!
//! ```xml
//! <resources>
//!     <string name="title_main">Main</string>
//!     <color name="accent">#FF4081</color>
//!     <integer name="max_length_name">20</integer>
//! </resources>
//! ```

mod document;
mod reader;

pub use document::{ResourceEntry, ResourceKind, Resources};
pub use reader::{
    FragmentStatus, ValuesFragment, parse_values, parse_values_file, read_values_file,
};
