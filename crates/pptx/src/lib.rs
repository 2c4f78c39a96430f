//! PPTX (Office Open XML) writer backend.
//!
//! Assembles .pptx packages (ZIP archives of interrelated XML parts) from
//! an in-memory `deck_core::Presentation`.

pub mod parts;
pub mod template;
pub mod writer;

pub use parts::SlideId;
pub use writer::PptxWriter;
