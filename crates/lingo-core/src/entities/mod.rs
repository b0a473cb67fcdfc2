//! Entity structs for all lingo domain objects.
//!
//! Each entity maps to a table in the libSQL database (see
//! `lingo-db/migrations/001_initial.sql`). All structs derive `Serialize`,
//! `Deserialize`, and `JsonSchema`.

mod group;
mod review;
mod session;
mod word;

pub use group::Group;
pub use review::{WordReview, WordStats};
pub use session::{StudyActivity, StudySession};
pub use word::Word;
