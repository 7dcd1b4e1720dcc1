//! Athletic profiles.
//!
//! Profiles define realistic cadence, duration and body measurements for each
//! activity type. They are used by [`crate::generator::PackageGenerator`] to produce
//! sensor packages that resemble what a real wearable would send.

mod runner;
mod swimmer;
mod walker;

pub use runner::RunnerProfile;
pub use swimmer::SwimmerProfile;
pub use walker::WalkerProfile;

use rand::RngCore;
use workouts::ActivityType;

/// Trait for athletic profiles.
///
/// Implementations should provide:
/// - Cadence (steps or strokes per minute)
/// - Typical workout duration
/// - Body weight distribution
/// - Any activity-specific readings that follow the common three
pub trait AthleteProfile: Send + Sync {
    fn activity_type(&self) -> ActivityType;

    /// Actions (steps or strokes) per minute.
    fn cadence(&self) -> f64;

    /// Workout duration range in hours, `(min, max)`.
    fn duration_range(&self) -> (f64, f64);

    /// Body weight in kg as `(mean, std_dev)`.
    fn weight(&self) -> (f64, f64) {
        (75.0, 10.0)
    }

    /// Day-to-day cadence variance as a coefficient of variation (0.0 - 1.0).
    fn variance(&self) -> f64;

    /// Readings that follow action, duration and weight, in package order.
    fn extra_fields(&self, duration: f64, rng: &mut dyn RngCore) -> Vec<f64>;
}
