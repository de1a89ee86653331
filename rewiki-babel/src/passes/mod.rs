//! Pass implementations
//!
//! One module per family of wiki constructs. Each pass is a self-contained rewrite of the
//! whole text; they only interact through the order the pipeline runs them in (see
//! [`crate::pipeline`]).

pub mod color;
pub mod decoration;
pub mod emphasis;
pub mod escape;
pub mod link;
pub mod media;
pub mod section;

pub use color::ColorPass;
pub use decoration::{StrikethroughPass, UnderlinePass};
pub use emphasis::{BoldPass, SizePass};
pub use escape::{TildeContinuationPass, TripleQuotePass};
pub use link::LinkPass;
pub use media::{AmazonPass, ImagePass, YoutubePass};
pub use section::SectionPass;
