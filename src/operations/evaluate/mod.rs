mod fitness;

pub use fitness::{Evaluate, FitnessBreakdown};
