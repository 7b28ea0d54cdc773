// Adapters layer: concrete catalog sources (static fixtures, hosted REST service).

pub mod fixtures;
pub mod remote;
