use thiserror::Error;

/// The two recognized failure kinds. Neither propagates beyond its component
/// and neither is retried.
#[derive(Debug, Error)]
pub enum SiteError {
    /// Fatal to the particle background only: logged once, the frame loop
    /// never starts, the rest of the page stays usable.
    #[error("2d drawing surface unavailable")]
    DrawingSurfaceUnavailable,

    /// Non-fatal: the scroll-into-view step is skipped, index and indicator
    /// state still update.
    #[error("section element not found: #{0}")]
    SectionElementNotFound(String),
}
