#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod coords;
pub mod error;
pub mod interp;
pub mod profile;
pub mod volume;

// Helper modules – public, but considered unstable internals.
pub mod geom;
pub mod io;

// --- High-level re-exports -------------------------------------------------

pub use crate::coords::{line_profile_coordinates, SampleCoordinates};
pub use crate::error::Error;
pub use crate::interp::BorderMode;
pub use crate::profile::{profile_line, Profile, ProfileOptions};
pub use crate::volume::Volume;

/// Small prelude for quick experiments.
///
/// ```
/// use line_profile::prelude::*;
///
/// # fn main() -> Result<(), line_profile::Error> {
/// let image = Volume::from_shape_vec(&[3, 3], (0..9).map(|v| v as f32).collect())?;
/// let profile = profile_line(&image, &[0.0, 0.0], &[2.0, 0.0], &ProfileOptions::default())?;
/// assert_eq!(profile.values(), &[0.0, 3.0, 6.0]);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::interp::BorderMode;
    pub use crate::profile::{profile_line, Profile, ProfileOptions};
    pub use crate::volume::Volume;
}
