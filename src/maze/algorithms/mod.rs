mod wilsons;

pub use wilsons::Wilsons;

/// Random number generator used wherever determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;
