//! Core types: Ruling, DocRef, Tag

mod doc_ref;
mod ruling;
mod tag;

pub use doc_ref::{DocRef, ParseDocRefError};
pub use ruling::{ParseRulingError, Ruling, RulingBuilder};
pub use tag::{ParseTagError, Tag, join_tags, split_tags};
