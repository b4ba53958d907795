//! The generation pipeline, stage by stage.
//!
//! ```text
//! template + links + config
//!  │
//!  ├─ 1. ai       one chat-completions call (best-effort, skipped when AI is off)
//!  ├─ 2. splice   substitute the AI intro between the template's two anchors
//!  ├─ 3. build    line-by-line hyperlink matching → HyperlinkedDocument
//!  └─ 4. package  WordprocessingML + relationships → .docx bytes
//! ```
//!
//! Stages 2–4 are pure and synchronous; only stage 1 touches the network,
//! and its failure never aborts the run (the splice is simply skipped).

pub mod ai;
pub mod build;
pub mod package;
pub mod splice;
