// Preference extraction: pulls structured career preferences out of a
// transcript and routes each one by confidence before the UI sees it.

pub mod extractor;
pub mod handlers;
pub mod prompts;
pub mod routing;
