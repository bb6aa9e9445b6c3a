//! Diet-quality indicator calculation per the FAO/FHI360 DQQ scoring rules.
//!
//! Every indicator is a count or OR-combination of individual question flags.
//! The question-to-composite mapping below reproduces the published tables
//! verbatim; several questions contribute to more than one composite by
//! design, so the mapping must never be re-derived from the food-group labels.

use dqq_model::{AnswerSet, Demographics, DietQualityIndicators, QuestionFlags};
use dqq_model::QuestionId as Q;
use tracing::trace;

/// Grains, white roots and tubers (starchy staples).
const STARCHY_STAPLES: [Q; 3] = [Q::Dqq1, Q::Dqq2, Q::Dqq3];
/// All vegetable questions.
const VEGETABLES: [Q; 3] = [Q::Dqq5, Q::Dqq6, Q::Dqq7];
/// All fruit questions.
const FRUITS: [Q; 3] = [Q::Dqq8, Q::Dqq9, Q::Dqq10];
/// Any vegetable or fruit.
const VEGETABLES_OR_FRUITS: [Q; 6] = [Q::Dqq5, Q::Dqq6, Q::Dqq7, Q::Dqq8, Q::Dqq9, Q::Dqq10];
/// Pulses, nuts, and seeds.
const PULSES_NUTS_SEEDS: [Q; 2] = [Q::Dqq4, Q::Dqq21];
/// Cheese, yogurt, and fluid milk.
const DAIRY: [Q; 3] = [Q::Dqq14, Q::Dqq15, Q::Dqq25];
/// Meat, poultry, and fish, including processed meats.
const FLESH_FOODS: [Q; 5] = [Q::Dqq16, Q::Dqq17, Q::Dqq18, Q::Dqq19, Q::Dqq20];
/// Unprocessed red meat, ruminant or non-ruminant.
const UNPROCESSED_RED_MEAT: [Q; 2] = [Q::Dqq17, Q::Dqq18];
/// All animal-source foods: eggs, dairy, and flesh foods.
const ANIMAL_SOURCE_FOODS: [Q; 9] = [
    Q::Dqq13,
    Q::Dqq14,
    Q::Dqq15,
    Q::Dqq16,
    Q::Dqq17,
    Q::Dqq18,
    Q::Dqq19,
    Q::Dqq20,
    Q::Dqq25,
];
/// Vitamin A-rich vegetables and fruits.
const VITAMIN_A_PRODUCE: [Q; 2] = [Q::Dqq5, Q::Dqq8];
/// Citrus and other fruits.
const OTHER_FRUITS: [Q; 2] = [Q::Dqq9, Q::Dqq10];
/// Baked and other sweets.
const SWEET_FOODS: [Q; 2] = [Q::Dqq11, Q::Dqq12];
/// Sweet tea/coffee/cocoa, fruit drinks, and soft drinks.
const SWEET_BEVERAGES: [Q; 3] = [Q::Dqq26, Q::Dqq27, Q::Dqq28];
/// Salty snacks, instant noodles, and deep-fried foods.
const SALTY_OR_FRIED_SNACKS: [Q; 3] = [Q::Dqq22, Q::Dqq23, Q::Dqq24];
/// Salty snacks, instant noodles, and fast food.
///
/// NOTE: DQQ22 and DQQ23 also feed the NCD-Risk score, so salty snacks can
/// count against a day twice. This matches the published scoring tables as
/// written; flagged for review with the nutrition methodology owners rather
/// than deduplicated here.
const SALTY_SNACKS_NOODLES_FAST_FOOD: [Q; 3] = [Q::Dqq22, Q::Dqq23, Q::Dqq29];

/// Minimum FGDS for the MDD-W indicator.
const MDDW_THRESHOLD: u8 = 5;

/// External contract for callers holding possibly-absent documents: either
/// side missing yields `None` ("no result"), never a partial computation.
pub fn calculate(
    answers: Option<&AnswerSet>,
    demographics: Option<&Demographics>,
) -> Option<DietQualityIndicators> {
    match (answers, demographics) {
        (Some(answers), Some(demographics)) => Some(score(answers, demographics)),
        _ => None,
    }
}

/// Compute the full indicator set for one merged answer set.
///
/// Pure and total: the same inputs always produce the same result, an
/// all-false answer set scores zero everywhere, and incomplete demographics
/// only null out MDD-W.
pub fn score(answers: &AnswerSet, demographics: &Demographics) -> DietQualityIndicators {
    let flag = |question: Q| u8::from(answers.get(question));
    let any = |questions: &[Q]| u8::from(answers.any(questions));

    // NCD-Protect: one point per protective food group, 9 max.
    let ncdp = flag(Q::Dqq2)
        + flag(Q::Dqq4)
        + flag(Q::Dqq21)
        + flag(Q::Dqq5)
        + flag(Q::Dqq6)
        + flag(Q::Dqq7)
        + flag(Q::Dqq8)
        + flag(Q::Dqq9)
        + flag(Q::Dqq10);

    // NCD-Risk: one point per risk food group, 8 max. Red meat counts once
    // whether ruminant or not, as do instant noodles and fast food.
    let ncdr = flag(Q::Dqq28)
        + flag(Q::Dqq11)
        + flag(Q::Dqq12)
        + flag(Q::Dqq16)
        + any(&UNPROCESSED_RED_MEAT)
        + flag(Q::Dqq24)
        + any(&[Q::Dqq23, Q::Dqq29])
        + flag(Q::Dqq22);

    // GDR proxy centered on 9: all-protective scores 18, all-risk scores 1.
    let gdr = ncdp as i8 - ncdr as i8 + 9;

    // Food Group Diversity Score over the 10 MDD-W food groups.
    let fgds = any(&STARCHY_STAPLES)
        + flag(Q::Dqq4)
        + flag(Q::Dqq21)
        + any(&DAIRY)
        + any(&FLESH_FOODS)
        + flag(Q::Dqq13)
        + flag(Q::Dqq6)
        + any(&VITAMIN_A_PRODUCE)
        + flag(Q::Dqq7)
        + any(&OTHER_FRUITS);

    // MDD-W is only defined for women aged 15-49.
    let mddw = if demographics.mddw_eligible() {
        Some(u8::from(fgds >= MDDW_THRESHOLD))
    } else {
        None
    };

    let all5a = any(&VEGETABLES);
    let all5b = any(&FRUITS);
    let all5c = any(&PULSES_NUTS_SEEDS);
    let all5d = any(&ANIMAL_SOURCE_FOODS);
    let all5e = any(&STARCHY_STAPLES);
    let all5 = all5a & all5b & all5c & all5d & all5e;

    let vegfr = any(&VEGETABLES_OR_FRUITS);

    let result = DietQualityIndicators {
        ncdp,
        ncdr,
        gdr,
        fgds,
        mddw,
        all5,
        all5a,
        all5b,
        all5c,
        all5d,
        all5e,
        vegfr,
        zvegfr: 1 - vegfr,
        whole_grain_consumption: flag(Q::Dqq2),
        pulse_consumption: flag(Q::Dqq4),
        nuts_seeds_consumption: flag(Q::Dqq21),
        processed_meat_consumption: flag(Q::Dqq16),
        deep_fried_consumption: flag(Q::Dqq24),
        soft_drink_consumption: flag(Q::Dqq28),
        dveg_consumption: flag(Q::Dqq6),
        oveg_consumption: flag(Q::Dqq7),
        ofr_consumption: flag(Q::Dqq10),
        safd: any(&SALTY_OR_FRIED_SNACKS),
        swtfd: any(&SWEET_FOODS),
        swtbev: any(&SWEET_BEVERAGES),
        snf: any(&SALTY_SNACKS_NOODLES_FAST_FOOD),
        dairy: any(&DAIRY),
        anml: any(&FLESH_FOODS),
        umeat: any(&UNPROCESSED_RED_MEAT),
        questions: QuestionFlags::from(answers),
    };
    trace!(ncdp, ncdr, fgds, "scored answer set");
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use dqq_model::Gender;

    fn woman_30() -> Demographics {
        Demographics::new(Some(30), Some(Gender::Female))
    }

    #[test]
    fn all_false_scores_zero() {
        let result = score(&AnswerSet::all_false(), &woman_30());
        assert_eq!(result.ncdp, 0);
        assert_eq!(result.ncdr, 0);
        assert_eq!(result.gdr, 9);
        assert_eq!(result.fgds, 0);
        assert_eq!(result.all5, 0);
        assert_eq!(result.mddw, Some(0));
        assert_eq!(result.vegfr, 0);
        assert_eq!(result.zvegfr, 1);
    }

    #[test]
    fn missing_inputs_yield_no_result() {
        assert_eq!(calculate(None, None), None);
        assert_eq!(calculate(Some(&AnswerSet::all_false()), None), None);
        assert_eq!(calculate(None, Some(&woman_30())), None);
        assert!(calculate(Some(&AnswerSet::all_false()), Some(&woman_30())).is_some());
    }

    #[test]
    fn dark_green_vegetables_only() {
        let answers = AnswerSet::from_consumed(&[Q::Dqq6]);
        let result = score(&answers, &woman_30());
        assert_eq!(result.dveg_consumption, 1);
        assert_eq!(result.vegfr, 1);
        assert_eq!(result.zvegfr, 0);
        assert_eq!(result.all5a, 1);
        assert_eq!(result.all5, 0);
        assert_eq!(result.fgds, 1);
        assert_eq!(result.ncdp, 1);
        assert_eq!(result.mddw, Some(0));
    }

    #[test]
    fn one_key_per_diversity_group_scores_ten() {
        // One representative question from each of the 10 FGDS groups.
        let answers = AnswerSet::from_consumed(&[
            Q::Dqq1,  // starchy staple
            Q::Dqq4,  // pulses
            Q::Dqq21, // nuts and seeds
            Q::Dqq25, // dairy
            Q::Dqq20, // flesh foods
            Q::Dqq13, // eggs
            Q::Dqq6,  // dark green leafy vegetables
            Q::Dqq5,  // vitamin A-rich produce
            Q::Dqq7,  // other vegetables
            Q::Dqq9,  // citrus
        ]);
        let result = score(&answers, &Demographics::new(Some(25), Some(Gender::Female)));
        assert_eq!(result.fgds, 10);
        assert_eq!(result.mddw, Some(1));
        assert_eq!(result.all5, 1);
    }

    #[test]
    fn red_meat_counts_once_in_risk_score() {
        let both = AnswerSet::from_consumed(&[Q::Dqq17, Q::Dqq18]);
        let one = AnswerSet::from_consumed(&[Q::Dqq17]);
        assert_eq!(score(&both, &woman_30()).ncdr, 1);
        assert_eq!(score(&one, &woman_30()).ncdr, 1);
        assert_eq!(score(&both, &woman_30()).umeat, 1);
    }

    #[test]
    fn noodles_and_fast_food_count_once_in_risk_score() {
        let both = AnswerSet::from_consumed(&[Q::Dqq23, Q::Dqq29]);
        let result = score(&both, &woman_30());
        assert_eq!(result.ncdr, 1);
        assert_eq!(result.snf, 1);
        assert_eq!(result.safd, 1);
    }

    #[test]
    fn salty_snacks_feed_both_risk_score_and_composites() {
        // Kept as published: DQQ22 contributes to ncdr and to safd/snf.
        let answers = AnswerSet::from_consumed(&[Q::Dqq22]);
        let result = score(&answers, &woman_30());
        assert_eq!(result.ncdr, 1);
        assert_eq!(result.safd, 1);
        assert_eq!(result.snf, 1);
    }

    #[test]
    fn gdr_extremes() {
        let all_protective = AnswerSet::from_consumed(&[
            Q::Dqq2,
            Q::Dqq4,
            Q::Dqq21,
            Q::Dqq5,
            Q::Dqq6,
            Q::Dqq7,
            Q::Dqq8,
            Q::Dqq9,
            Q::Dqq10,
        ]);
        assert_eq!(score(&all_protective, &woman_30()).gdr, 18);

        let all_risk = AnswerSet::from_consumed(&[
            Q::Dqq28,
            Q::Dqq11,
            Q::Dqq12,
            Q::Dqq16,
            Q::Dqq17,
            Q::Dqq24,
            Q::Dqq23,
            Q::Dqq22,
        ]);
        assert_eq!(score(&all_risk, &woman_30()).gdr, 1);
    }

    #[test]
    fn mddw_gating_ignores_fgds_when_ineligible() {
        let diverse = AnswerSet::from_consumed(&[
            Q::Dqq1,
            Q::Dqq4,
            Q::Dqq21,
            Q::Dqq25,
            Q::Dqq20,
            Q::Dqq13,
        ]);
        let man = Demographics::new(Some(30), Some(Gender::Male));
        let too_old = Demographics::new(Some(50), Some(Gender::Female));
        let unknown = Demographics::default();
        assert_eq!(score(&diverse, &man).mddw, None);
        assert_eq!(score(&diverse, &too_old).mddw, None);
        assert_eq!(score(&diverse, &unknown).mddw, None);
        assert_eq!(score(&diverse, &woman_30()).mddw, Some(1));
    }
}
