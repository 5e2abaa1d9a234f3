//! Sealscan section layer.
//!
//! Specification pages lay out their outline with short prefixes and
//! indentation:
//!
//! ```text
//! 1.05    SUBMITTALS
//!     A.  Action Submittals
//!         1.  Product Data
//!             a.  Manufacturer datasheets
//! ```
//!
//! [`SectionResolver`] walks one page's canonical source text, remembers the
//! latest article, paragraph, subparagraph and item it has seen, and maps
//! any byte offset back to a code such as `1.05-A-1-a`.
//!
//! Pages are linked by their tail state: the hierarchy at the end of one
//! page seeds the resolver of the next.
//!
//! ```
//! use section::SectionResolver;
//!
//! let page_one = "1.05 SUBMITTALS\nA. Action Submittals\nSealed by the Engineer of Record.";
//! let first = SectionResolver::new(page_one, None);
//! let at = page_one.find("Sealed").unwrap();
//! assert_eq!(first.resolve(at).as_deref(), Some("1.05-A"));
//!
//! let second = SectionResolver::new("continued on the next page", first.tail_state());
//! assert_eq!(second.resolve(0).as_deref(), Some("1.05-A"));
//! ```
//!
//! The resolver never fails: text with no recognizable outline simply
//! resolves to `None` everywhere.

mod entry;
mod patterns;
mod resolver;

pub use crate::entry::SectionEntry;
pub use crate::patterns::Marker;
pub use crate::resolver::{SectionResolver, SEED_DEPTH_CAP};
