//! # Mesh Operators
//!
//! Each operator either derives a new polyhedron from the current one
//! (`tesselate`, `hexify`) or moves nodes in place (`normalize`, `extrude`).
//! All of them validate before committing, so a failed pass leaves the input
//! exactly as it was.

pub mod hexify;
pub mod tesselate;
pub mod transform;

pub use hexify::hexify;
pub use tesselate::tesselate;
pub use transform::{extrude, normalize, ExtrudePolicy};

use config::constants::MAX_FACES;

use crate::error::{GeodesicError, GeodesicResult};

/// Fails if a pass would produce more than `MAX_FACES` faces.
pub(crate) fn check_face_budget(count: usize) -> GeodesicResult<()> {
    if count > MAX_FACES {
        return Err(GeodesicError::TooManyFaces {
            count,
            max: MAX_FACES,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_budget() {
        assert!(check_face_budget(0).is_ok());
        assert!(check_face_budget(MAX_FACES).is_ok());
        assert_eq!(
            check_face_budget(MAX_FACES + 1),
            Err(GeodesicError::TooManyFaces {
                count: MAX_FACES + 1,
                max: MAX_FACES
            })
        );
    }
}
