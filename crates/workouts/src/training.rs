use crate::{
    errors::{Result, WorkoutError},
    models::ActivityType,
    report::InfoMessage,
};

pub const M_IN_KM: f64 = 1000.0;
pub const MINUTES_IN_HOUR: f64 = 60.0;
/// Distance covered per step, in meters.
pub const LEN_STEP: f64 = 0.65;

/// Readings every workout carries, in package order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingData {
    /// Steps taken or strokes made.
    pub action: f64,
    /// Hours.
    pub duration: f64,
    /// Kilograms.
    pub weight: f64,
}

pub trait Training {
    fn activity_type(&self) -> ActivityType;
    fn data(&self) -> &TrainingData;

    fn len_step(&self) -> f64 {
        LEN_STEP
    }

    /// Distance in km.
    fn distance(&self) -> f64 {
        self.data().action * self.len_step() / M_IN_KM
    }

    /// Mean speed in km/h.
    fn mean_speed(&self) -> f64 {
        self.distance() / self.data().duration
    }

    /// Calories (kcal) spent over the whole workout.
    fn spent_calories(&self) -> f64;

    fn show_training_info(&self) -> InfoMessage {
        InfoMessage {
            training_type: self.activity_type().name().to_string(),
            duration: self.data().duration,
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        }
    }
}

fn fields<const N: usize>(activity: ActivityType, values: &[f64]) -> Result<[f64; N]> {
    <[f64; N]>::try_from(values).map_err(|_| WorkoutError::InvalidArgumentCount {
        activity,
        expected: N,
        actual: values.len(),
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    data: TrainingData,
}

impl Running {
    const COEFF_CALORIE_1: f64 = 18.0;
    const COEFF_CALORIE_2: f64 = 20.0;

    pub fn new(action: f64, duration: f64, weight: f64) -> Self {
        Self {
            data: TrainingData {
                action,
                duration,
                weight,
            },
        }
    }

    pub fn from_values(values: &[f64]) -> Result<Self> {
        let [action, duration, weight] = fields(ActivityType::Running, values)?;
        Ok(Self::new(action, duration, weight))
    }
}

impl Training for Running {
    fn activity_type(&self) -> ActivityType {
        ActivityType::Running
    }

    fn data(&self) -> &TrainingData {
        &self.data
    }

    fn spent_calories(&self) -> f64 {
        let TrainingData {
            duration, weight, ..
        } = self.data;
        (Self::COEFF_CALORIE_1 * self.mean_speed() - Self::COEFF_CALORIE_2) * weight / M_IN_KM
            * duration
            * MINUTES_IN_HOUR
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    data: TrainingData,
    /// Centimeters.
    height: f64,
}

impl SportsWalking {
    const COEFF_CALORIE_1: f64 = 0.035;
    const COEFF_CALORIE_2: f64 = 0.029;

    pub fn new(action: f64, duration: f64, weight: f64, height: f64) -> Self {
        Self {
            data: TrainingData {
                action,
                duration,
                weight,
            },
            height,
        }
    }

    pub fn from_values(values: &[f64]) -> Result<Self> {
        let [action, duration, weight, height] = fields(ActivityType::SportsWalking, values)?;
        Ok(Self::new(action, duration, weight, height))
    }
}

impl Training for SportsWalking {
    fn activity_type(&self) -> ActivityType {
        ActivityType::SportsWalking
    }

    fn data(&self) -> &TrainingData {
        &self.data
    }

    fn spent_calories(&self) -> f64 {
        let TrainingData {
            duration, weight, ..
        } = self.data;
        // Suspect: speed² is floor-divided by height, so this term is zero for any
        // realistic walk. Kept as is because published figures depend on it.
        let speed_term = floor_div(self.mean_speed().powi(2), self.height);
        (Self::COEFF_CALORIE_1 * weight + speed_term * Self::COEFF_CALORIE_2 * weight)
            * duration
            * MINUTES_IN_HOUR
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    data: TrainingData,
    /// Pool length in meters.
    length_pool: f64,
    /// Laps swum.
    count_pool: f64,
}

impl Swimming {
    /// Distance covered per stroke, in meters.
    pub const LEN_STEP: f64 = 1.38;
    const MEAN_SPEED_SHIFT: f64 = 1.1;
    const COEFF_CALORIE_1: f64 = 2.0;

    pub fn new(action: f64, duration: f64, weight: f64, length_pool: f64, count_pool: f64) -> Self {
        Self {
            data: TrainingData {
                action,
                duration,
                weight,
            },
            length_pool,
            count_pool,
        }
    }

    pub fn from_values(values: &[f64]) -> Result<Self> {
        let [action, duration, weight, length_pool, count_pool] =
            fields(ActivityType::Swimming, values)?;
        Ok(Self::new(action, duration, weight, length_pool, count_pool))
    }
}

impl Training for Swimming {
    fn activity_type(&self) -> ActivityType {
        ActivityType::Swimming
    }

    fn data(&self) -> &TrainingData {
        &self.data
    }

    fn len_step(&self) -> f64 {
        Self::LEN_STEP
    }

    fn mean_speed(&self) -> f64 {
        self.length_pool * self.count_pool / M_IN_KM / self.data.duration
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + Self::MEAN_SPEED_SHIFT) * Self::COEFF_CALORIE_1 * self.data.weight
    }
}

/// A resolved workout of any supported activity type.
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    fn inner(&self) -> &dyn Training {
        match self {
            Workout::Running(w) => w,
            Workout::SportsWalking(w) => w,
            Workout::Swimming(w) => w,
        }
    }
}

impl Training for Workout {
    fn activity_type(&self) -> ActivityType {
        self.inner().activity_type()
    }

    fn data(&self) -> &TrainingData {
        self.inner().data()
    }

    fn len_step(&self) -> f64 {
        self.inner().len_step()
    }

    fn distance(&self) -> f64 {
        self.inner().distance()
    }

    fn mean_speed(&self) -> f64 {
        self.inner().mean_speed()
    }

    fn spent_calories(&self) -> f64 {
        self.inner().spent_calories()
    }
}

impl From<Running> for Workout {
    fn from(w: Running) -> Self {
        Workout::Running(w)
    }
}

impl From<SportsWalking> for Workout {
    fn from(w: SportsWalking) -> Self {
        Workout::SportsWalking(w)
    }
}

impl From<Swimming> for Workout {
    fn from(w: Swimming) -> Self {
        Workout::Swimming(w)
    }
}

/// Float floor division computed from the remainder, as Python's `//` does.
///
/// Differs from `(a / b).floor()` when the quotient rounds up to a whole number:
/// `floor_div(1.0, 0.1)` is 9, not 10.
fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && (b < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }
    if div == 0.0 {
        return 0.0_f64.copysign(a / b);
    }
    let mut floored = div.floor();
    if div - floored > 0.5 {
        floored += 1.0;
    }
    floored
}
