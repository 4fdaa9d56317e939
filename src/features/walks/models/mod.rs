mod walk;

pub use walk::{Walk, WalkDraft, WalkRow};
