pub mod breeds;
pub mod dogs;
