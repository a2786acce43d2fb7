// Resume Parsing Engine
// Implements: text normalization, section segmentation, field and list extraction, export.
// Everything below `handlers` is synchronous, pure, and never fails.

pub mod contact;
pub mod export;
pub mod handlers;
pub mod header;
pub mod lists;
pub mod normalize;
pub mod pipeline;
pub mod sections;
pub mod skills;
