//! Persistence and lookup collaborators.

pub mod memory;
pub mod schema;
pub mod surreal;
pub mod traits;

pub use memory::MemoryStore;
pub use surreal::SurrealStore;
pub use traits::{
    AccessStore, Career, ProfileStore, RecommendationSource, ResultRecord, ResultStore,
    SkillCourse, StoreError,
};
