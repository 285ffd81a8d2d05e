use crate::config::Selectors;
use crate::error::AttachError;
use crate::surface::Surface;

/// Writes the current year into the footer.
pub fn stamp_year<S: Surface>(
    surface: &S,
    selectors: &Selectors,
    year: i32,
) -> Result<(), AttachError> {
    let node = surface
        .by_id(selectors.year_id)
        .ok_or(AttachError::MissingElement(selectors.year_id))?;
    surface.set_text(&node, &year.to_string());
    Ok(())
}
