//! Algebraic properties of merging and scoring.

use dqq_model::{AnswerSet, Demographics, Gender, QUESTION_COUNT, QuestionId};
use dqq_score::{merge_answer_sets, score};
use proptest::prelude::*;

fn answer_sets() -> impl Strategy<Value = AnswerSet> {
    proptest::collection::vec(any::<bool>(), QUESTION_COUNT).prop_map(|values| {
        let mut set = AnswerSet::all_false();
        for (question, value) in QuestionId::ALL.into_iter().zip(values) {
            set.set(question, value);
        }
        set
    })
}

fn demographics() -> impl Strategy<Value = Demographics> {
    (
        proptest::option::of(0u32..=110),
        proptest::option::of(prop_oneof![Just(Gender::Male), Just(Gender::Female)]),
    )
        .prop_map(|(age, gender)| Demographics::new(age, gender))
}

proptest! {
    #[test]
    fn scoring_is_total_deterministic_and_bounded(
        answers in answer_sets(),
        demographics in demographics(),
    ) {
        let result = score(&answers, &demographics);
        prop_assert_eq!(&result, &score(&answers, &demographics));

        prop_assert!(result.ncdp <= 9);
        prop_assert!(result.ncdr <= 8);
        prop_assert!(result.fgds <= 10);
        prop_assert!((1..=18).contains(&result.gdr));
        prop_assert_eq!(result.gdr, result.ncdp as i8 - result.ncdr as i8 + 9);
        prop_assert_eq!(result.vegfr + result.zvegfr, 1);
        prop_assert!(result.all5 <= result.all5a);
    }

    #[test]
    fn mddw_follows_the_eligibility_gate(
        answers in answer_sets(),
        demographics in demographics(),
    ) {
        let result = score(&answers, &demographics);
        match result.mddw {
            Some(value) => {
                prop_assert!(demographics.mddw_eligible());
                prop_assert_eq!(value, u8::from(result.fgds >= 5));
            }
            None => prop_assert!(!demographics.mddw_eligible()),
        }
    }

    #[test]
    fn merge_is_commutative(a in answer_sets(), b in answer_sets()) {
        prop_assert_eq!(merge_answer_sets([&a, &b]), merge_answer_sets([&b, &a]));
    }

    #[test]
    fn merge_is_idempotent(a in answer_sets()) {
        prop_assert_eq!(merge_answer_sets([&a]), Some(a));
        prop_assert_eq!(merge_answer_sets([&a, &a]), Some(a));
    }

    #[test]
    fn merge_is_monotone(a in answer_sets(), b in answer_sets(), c in answer_sets()) {
        let smaller = merge_answer_sets([&a, &b]).unwrap();
        let larger = merge_answer_sets([&a, &b, &c]).unwrap();
        for question in QuestionId::ALL {
            if smaller.get(question) {
                prop_assert!(larger.get(question));
            }
        }
    }

    #[test]
    fn merged_scores_never_lose_consumption_flags(a in answer_sets(), b in answer_sets()) {
        let demographics = Demographics::new(Some(30), Some(Gender::Female));
        let merged = merge_answer_sets([&a, &b]).unwrap();
        let single = score(&a, &demographics);
        let combined = score(&merged, &demographics);
        for question in QuestionId::ALL {
            prop_assert!(combined.questions.get(question) >= single.questions.get(question));
        }
        prop_assert!(combined.fgds >= single.fgds);
        prop_assert!(combined.ncdp >= single.ncdp);
        prop_assert!(combined.ncdr >= single.ncdr);
    }
}
