use super::*;
use crate::noun::NounKind;

fn parse(text: &str) -> Noun {
    text.parse().expect("test program should parse")
}

fn run(revision: Revision, program: &str) -> Result<Noun, Crash> {
    nock_with(revision, &parse(program))
}

fn run_both(program: &str) -> String {
    let four = run(Revision::Nock4, program).expect("4K should reduce");
    let five = run(Revision::Nock5, program).expect("5K should reduce");
    assert_eq!(four, five, "revisions disagree on {}", program);
    four.to_string()
}

#[test]
fn test_quote_through_atom_tail() {
    assert_eq!(run_both("[0 1 2]"), "2");
}

#[test]
fn test_atom_and_atom_tail_pass_through() {
    assert_eq!(nock(&Noun::atom(5)).unwrap(), Noun::atom(5));
    assert_eq!(nock(&parse("[3 4]")).unwrap().to_string(), "[3 4]");
}

#[test]
fn test_slot() {
    assert_eq!(run_both("[57 [0 1]]"), "57");
    assert_eq!(run_both("[[132 19] [0 3]]"), "19");
    assert_eq!(run_both("[[[4 5] [6 14 15]] [0 7]]"), "[14 15]");
}

#[test]
fn test_constant() {
    assert_eq!(run_both("[42 [1 153 218]]"), "[153 218]");
}

#[test]
fn test_increment() {
    assert_eq!(run_both("[42 [4 0 1]]"), "43");
    assert_eq!(run_both("[57 [4 0 1]]"), "58");
    assert_eq!(run_both("[[132 19] [4 0 3]]"), "20");
}

#[test]
fn test_increment_property() {
    for x in [0u64, 1, 2, 41, 255, 1 << 32, u64::MAX - 1] {
        let program = Noun::cell(Noun::atom(x), Noun::increment(Noun::slot(1)));
        for revision in Revision::ALL {
            assert_eq!(nock_with(revision, &program), Ok(Noun::atom(x + 1)));
        }
    }
}

#[test]
fn test_increment_overflow() {
    let program = Noun::cell(Noun::atom(u64::MAX), Noun::increment(Noun::slot(1)));
    assert_eq!(
        nock(&program),
        Err(Crash::AtomOverflow { value: u64::MAX })
    );
}

#[test]
fn test_increment_cell_crashes() {
    let err = run(Revision::Nock4, "[[1 2] [4 0 1]]").unwrap_err();
    assert_eq!(
        err,
        Crash::TypeMismatch {
            expected: NounKind::Atom,
            found: parse("[1 2]"),
        }
    );
}

#[test]
fn test_quote_ignores_subject() {
    let value = parse("[1 [2 3] 4]");
    for subject in [Noun::atom(0), parse("[9 9]"), parse("[[1 2] 3 4]")] {
        let program = Noun::cell(subject, Noun::constant(value.clone()));
        for revision in Revision::ALL {
            assert_eq!(nock_with(revision, &program).unwrap(), value);
        }
    }
}

#[test]
fn test_distribution() {
    assert_eq!(run_both("[42 [[4 0 1] [3 0 1]]]"), "[43 1]");
}

#[test]
fn test_cell_test() {
    assert_eq!(run_both("[[1 2] [3 0 1]]"), "0");
    assert_eq!(run_both("[7 [3 0 1]]"), "1");
}

#[test]
fn test_evaluate() {
    assert_eq!(run_both("[77 [2 [1 42] [1 1 153 218]]]"), "[153 218]");
}

#[test]
fn test_compose_and_push() {
    assert_eq!(run_both("[42 [7 [4 0 1] [4 0 1]]]"), "44");
    assert_eq!(run_both("[42 [8 [4 0 1] [0 1]]]"), "[43 42]");
    assert_eq!(run_both("[42 [8 [4 0 1] [4 0 3]]]"), "43");
}

#[test]
fn test_branch() {
    assert_eq!(run_both("[42 [6 [1 0] [4 0 1] [1 233]]]"), "43");
    assert_eq!(run_both("[42 [6 [1 1] [4 0 1] [1 233]]]"), "233");
}

#[test]
fn test_branch_other_atoms_take_else() {
    assert_eq!(run_both("[42 [6 [1 2] [4 0 1] [1 233]]]"), "233");
    assert_eq!(run_both("[42 [6 [1 99] [4 0 1] [1 233]]]"), "233");
}

#[test]
fn test_branch_on_cell_crashes() {
    for revision in Revision::ALL {
        let err = run(revision, "[42 [6 [1 0 0] [4 0 1] [1 233]]]").unwrap_err();
        assert!(matches!(
            err,
            Crash::TypeMismatch {
                expected: NounKind::Atom,
                ..
            }
        ));
    }
}

#[test]
fn test_branch_skips_untaken_arm() {
    // The else arm would crash: slot 2 of an atom.
    assert_eq!(run_both("[42 [6 [1 0] [1 7] [0 2]]]"), "7");
}

#[test]
fn test_equals() {
    assert_eq!(run_both("[[1 1] [5 [0 2] [0 3]]]"), "0");
    assert_eq!(run_both("[[1 2] [5 [0 2] [0 3]]]"), "1");
    assert_eq!(run_both("[[[1 2] [1 2]] [5 [0 2] [0 3]]]"), "0");
    assert_eq!(run_both("[[[1 2] [1 3]] [5 [0 2] [0 3]]]"), "1");
}

#[test]
fn test_equals_5k_needs_a_cell_product() {
    // 5K reduces the whole argument as one formula; a quoted atom is no pair.
    let err = run(Revision::Nock5, "[0 [5 1 7]]").unwrap_err();
    assert!(matches!(
        err,
        Crash::TypeMismatch {
            expected: NounKind::Cell,
            ..
        }
    ));
}

#[test]
fn test_decrement() {
    let program = "[42 [8 [1 0] 8 [1 6 [5 [0 7] 4 0 6] [0 6] 9 2 [0 2] [4 0 6] 0 7] 9 2 0 1]]";
    assert_eq!(run_both(program), "41");
}

#[test]
fn test_invoke() {
    // Core [arm payload] with arm = [0 3]: return the payload.
    assert_eq!(run_both("[0 [9 2 [1 [0 3] 77]]]"), "77");
}

#[test]
fn test_5k_hint() {
    assert_eq!(
        run(Revision::Nock5, "[[132 19] [10 37 [4 0 3]]]").unwrap(),
        Noun::atom(20)
    );
    assert_eq!(
        run(Revision::Nock5, "[[132 19] [10 [1 [4 0 2]] [4 0 3]]]").unwrap(),
        Noun::atom(20)
    );
}

#[test]
fn test_5k_dynamic_hint_crash_propagates() {
    let err = run(Revision::Nock5, "[[132 19] [10 [1 [0 4]] [4 0 3]]]").unwrap_err();
    assert_eq!(err, Crash::AddressOutOfRange { axis: 4 });
}

#[test]
fn test_5k_has_no_opcode_11() {
    assert_eq!(
        run(Revision::Nock5, "[[132 19] [11 37 [4 0 3]]]"),
        Err(Crash::InvalidOpcode {
            opcode: 11,
            revision: Revision::Nock5,
        })
    );
}

#[test]
fn test_4k_hint() {
    assert_eq!(
        run(Revision::Nock4, "[[132 19] [11 37 [4 0 3]]]").unwrap(),
        Noun::atom(20)
    );
    assert_eq!(
        run(Revision::Nock4, "[[132 19] [11 [1 [4 0 2]] [4 0 3]]]").unwrap(),
        Noun::atom(20)
    );
}

#[test]
fn test_4k_edit() {
    assert_eq!(
        run(Revision::Nock4, "[42 [10 [6 [0 1]] [1 20 60 70]]]")
            .unwrap()
            .to_string(),
        "[20 [42 70]]"
    );
}

#[test]
fn test_4k_edit_whole_target() {
    assert_eq!(
        run(Revision::Nock4, "[42 [10 [1 [1 5]] [0 1]]]").unwrap(),
        Noun::atom(5)
    );
}

#[test]
fn test_4k_edit_needs_axis_pair() {
    let err = run(Revision::Nock4, "[42 [10 37 [0 1]]]").unwrap_err();
    assert!(matches!(
        err,
        Crash::TypeMismatch {
            expected: NounKind::Cell,
            ..
        }
    ));
}

#[test]
fn test_4k_edit_out_of_range() {
    assert_eq!(
        run(Revision::Nock4, "[42 [10 [2 [1 0]] [0 1]]]"),
        Err(Crash::AddressOutOfRange { axis: 2 })
    );
}

#[test]
fn test_current_revision_edits() {
    assert_eq!(
        nock(&parse("[42 [10 [6 [0 1]] [1 20 60 70]]]"))
            .unwrap()
            .to_string(),
        "[20 [42 70]]"
    );
}

#[test]
fn test_invalid_opcode() {
    assert_eq!(
        run(Revision::Nock4, "[0 [12 0 1]]"),
        Err(Crash::InvalidOpcode {
            opcode: 12,
            revision: Revision::Nock4,
        })
    );
    assert_eq!(
        run(Revision::Nock4, "[0 [99 0 1]]"),
        Err(Crash::InvalidOpcode {
            opcode: 99,
            revision: Revision::Nock4,
        })
    );
}

#[test]
fn test_atom_formula_crashes() {
    let interpreter = Interpreter::default();
    let err = interpreter.tar(&Noun::atom(1), &Noun::atom(0)).unwrap_err();
    assert!(matches!(
        err,
        Crash::TypeMismatch {
            expected: NounKind::Cell,
            ..
        }
    ));
}

#[test]
fn test_slot_out_of_range_crashes() {
    assert_eq!(
        run(Revision::Nock4, "[42 [0 2]]"),
        Err(Crash::AddressOutOfRange { axis: 2 })
    );
    assert_eq!(
        run(Revision::Nock5, "[[1 2] [0 0]]"),
        Err(Crash::AddressOutOfRange { axis: 0 })
    );
}

#[test]
fn test_interpreter_tar_directly() {
    let interpreter = Interpreter::new(Revision::Nock5);
    assert_eq!(interpreter.revision(), Revision::Nock5);
    let product = interpreter
        .tar(&Noun::atom(41), &Noun::increment(Noun::slot(1)))
        .unwrap();
    assert_eq!(product, Noun::atom(42));
}

#[test]
fn test_formula_constructors_reduce() {
    let subject = parse("[[4 5] [6 14 15]]");
    let formula = Noun::branch(
        Noun::cell_test(Noun::slot(7)),
        Noun::compose(Noun::slot(7), Noun::increment(Noun::slot(3))),
        Noun::constant(Noun::atom(0)),
    );
    for revision in Revision::ALL {
        let product = Interpreter::new(revision).tar(&subject, &formula).unwrap();
        assert_eq!(product, Noun::atom(16));
    }
}

#[test]
fn test_edit_constructor_reduces() {
    let formula = Noun::edit(
        6,
        Noun::slot(1),
        Noun::constant(parse("[20 60 70]")),
    );
    let product = Interpreter::new(Revision::Nock4)
        .tar(&Noun::atom(42), &formula)
        .unwrap();
    assert_eq!(product.to_string(), "[20 [42 70]]");
}
