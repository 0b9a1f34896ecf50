use crate::scoring::domain::Grade;
use crate::scoring::rubric;

#[test]
fn grade_boundaries_match_rubric() {
    assert_eq!(Grade::from_total(100), Grade::A);
    assert_eq!(Grade::from_total(80), Grade::A);
    assert_eq!(Grade::from_total(79), Grade::B);
    assert_eq!(Grade::from_total(60), Grade::B);
    assert_eq!(Grade::from_total(59), Grade::C);
    assert_eq!(Grade::from_total(40), Grade::C);
    assert_eq!(Grade::from_total(39), Grade::D);
    assert_eq!(Grade::from_total(20), Grade::D);
    assert_eq!(Grade::from_total(19), Grade::E);
    assert_eq!(Grade::from_total(0), Grade::E);
}

#[test]
fn grade_never_worsens_as_total_rises() {
    let mut previous = Grade::from_total(0);
    for total in 1..=rubric::TOTAL_MAX {
        let grade = Grade::from_total(total);
        assert!(grade.rank() >= previous.rank(), "total {total}");
        previous = grade;
    }
}
