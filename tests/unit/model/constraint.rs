//! Tests for constraint kinds and constraint construction

#[cfg(test)]
mod tests {

    use pips_solver::SolverError;
    use pips_solver::model::constraint::{Constraint, ConstraintKind};
    use pips_solver::spatial::grid::Cell;

    #[test]
    fn test_operand_requirements() {
        let needing: Vec<ConstraintKind> = ConstraintKind::ALL
            .into_iter()
            .filter(|kind| kind.requires_operand())
            .collect();

        assert_eq!(
            needing,
            vec![
                ConstraintKind::GreaterThan,
                ConstraintKind::LessThan,
                ConstraintKind::Sum
            ]
        );
    }

    #[test]
    fn test_kind_parses_case_insensitively() {
        assert_eq!("EQUAL".parse().ok(), Some(ConstraintKind::Equal));
        assert_eq!("not_equal".parse().ok(), Some(ConstraintKind::NotEqual));
        assert_eq!(" Sum ".parse().ok(), Some(ConstraintKind::Sum));

        for kind in ConstraintKind::ALL {
            assert_eq!(kind.name().parse::<ConstraintKind>().ok(), Some(kind));
        }
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let result = "MODULO".parse::<ConstraintKind>();
        assert!(matches!(
            result,
            Err(SolverError::UnknownConstraintKind { ref name }) if name == "MODULO"
        ));
    }

    #[test]
    fn test_missing_operand_is_rejected() {
        let region = vec![Cell::new(0, 0)];

        for kind in [
            ConstraintKind::GreaterThan,
            ConstraintKind::LessThan,
            ConstraintKind::Sum,
        ] {
            let result = Constraint::new(kind, None, region.clone());
            assert!(
                matches!(result, Err(SolverError::MissingOperand { kind: k }) if k == kind),
                "{kind} without operand should fail"
            );
        }
    }

    // Rules that ignore the operand accept one anyway
    #[test]
    fn test_operand_optional_for_other_kinds() {
        let region = vec![Cell::new(0, 0), Cell::new(0, 1)];

        let equal = Constraint::new(ConstraintKind::Equal, Some(3), region.clone());
        assert_eq!(equal.ok().and_then(|c| c.operand()), Some(3));

        let blank = Constraint::new(ConstraintKind::Blank, None, region);
        assert!(blank.is_ok());
    }

    #[test]
    fn test_shorthand_constructors() {
        let region = vec![Cell::new(1, 1)];

        let sum = Constraint::sum(6, region.clone());
        assert_eq!(sum.kind(), ConstraintKind::Sum);
        assert_eq!(sum.operand(), Some(6));
        assert_eq!(sum.region(), region.as_slice());

        assert_eq!(Constraint::greater_than(2, region.clone()).operand(), Some(2));
        assert_eq!(Constraint::less_than(4, region.clone()).operand(), Some(4));
        assert_eq!(Constraint::equal(region.clone()).operand(), None);
        assert_eq!(
            Constraint::not_equal(region.clone()).kind(),
            ConstraintKind::NotEqual
        );
        assert_eq!(Constraint::blank(region).kind(), ConstraintKind::Blank);
    }

    #[test]
    fn test_display() {
        let region = vec![Cell::new(0, 0), Cell::new(0, 1)];
        assert_eq!(
            Constraint::sum(6, region.clone()).to_string(),
            "SUM 6 over 2 cells"
        );
        assert_eq!(
            Constraint::not_equal(region).to_string(),
            "NOT_EQUAL over 2 cells"
        );
    }
}
