//! MedAssist Triage: keyword tables and the pure functions over them.
//!
//! Everything here is stateless: doctor recommendation, severity scoring,
//! symptom detection and input validation all read immutable tables that
//! are built once per process.

pub mod recommend;
pub mod severity;
pub mod specialty;
pub mod symptoms;
pub mod validation;

pub use recommend::{recommend, recommend_in};
pub use severity::{assess, assess_in, has_urgent_indicator, SeverityLevel, SeverityResult};
pub use specialty::{specialty_map, Specialty};
pub use symptoms::has_symptoms;
pub use validation::{validate, ValidationError};
