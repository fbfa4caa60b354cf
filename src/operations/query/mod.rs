mod area;
mod is_monotone;
mod is_valid;

pub use area::FaceArea;
pub use is_monotone::IsMonotone;
pub use is_valid::IsValid;

pub(crate) use is_monotone::is_monotone_ring;
