use super::domain::{EthicalCriteria, Grade};
use super::rubric;

/// Sum of the five criterion scores.
pub(crate) fn total_score(criteria: &EthicalCriteria) -> u8 {
    criteria.iter().map(|(_, criterion)| criterion.score).sum()
}

impl Grade {
    /// Step function over the total, evaluated from the best grade down.
    pub fn from_total(total: u8) -> Self {
        if total >= rubric::GRADE_A_MIN {
            Grade::A
        } else if total >= rubric::GRADE_B_MIN {
            Grade::B
        } else if total >= rubric::GRADE_C_MIN {
            Grade::C
        } else if total >= rubric::GRADE_D_MIN {
            Grade::D
        } else {
            Grade::E
        }
    }
}
