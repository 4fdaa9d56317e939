mod region;

pub use region::{Region, RegionDraft};
