//! tutora-export
//!
//! PDF generation for lesson documents: a pure pagination layout engine
//! plus the PDF byte emission on top of it.

pub mod layout;
pub mod pdf;
