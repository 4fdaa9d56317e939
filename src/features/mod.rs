pub mod regions;
pub mod walk_difficulties;
pub mod walks;
