//! The catalog of grades and steps making up a pay scale.

use serde::{Deserialize, Serialize};

use super::{Grade, GradeStep, Step};

/// The grades for which salary data exists, combined with every step.
///
/// The full list of [`GradeStep`] combinations is computed from the grades
/// rather than maintained by hand.
///
/// # Example
///
/// ```
/// use pay_scale_engine::models::{Grade, PayScale};
///
/// let scale = PayScale::new([Grade::new(10), Grade::new(13)]);
/// assert_eq!(scale.grade_steps().len(), 12);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayScale {
    grades: Vec<Grade>,
}

impl PayScale {
    /// Creates a pay scale from its grades. Repeated grades are kept once,
    /// in order of first appearance.
    pub fn new(grades: impl IntoIterator<Item = Grade>) -> Self {
        let mut unique = Vec::new();
        for grade in grades {
            if !unique.contains(&grade) {
                unique.push(grade);
            }
        }
        Self { grades: unique }
    }

    /// Returns the grades in configured order.
    pub fn grades(&self) -> &[Grade] {
        &self.grades
    }

    /// Returns true if the grade belongs to this scale.
    pub fn contains(&self, grade: Grade) -> bool {
        self.grades.contains(&grade)
    }

    /// Returns every grade+step combination: grades in configured order,
    /// steps ascending within each grade.
    pub fn grade_steps(&self) -> Vec<GradeStep> {
        self.grades
            .iter()
            .flat_map(|&grade| Step::ALL.into_iter().map(move |step| GradeStep::new(grade, step)))
            .collect()
    }
}
