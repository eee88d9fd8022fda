use catalog::MealType;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanningError {
    #[error("{meal} picks cover {actual} days but the requested horizon is {expected}")]
    HorizonMismatch {
        meal: MealType,
        expected: usize,
        actual: usize,
    },

    #[error("day index {index} is out of range for a {len}-day menu")]
    DayOutOfRange { index: usize, len: usize },

    #[error("the candidate pool offers no alternative dish for day {index}")]
    NoAlternative { index: usize },
}
