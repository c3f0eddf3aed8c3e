// Unit tests for the roommate compatibility scorer

use roommate_match::core::{
    budget::calculate_budget_points,
    compatibility::calculate_compatibility,
};
use roommate_match::models::{
    BudgetRange, Personality, PetsTolerance, RoommateProfile, SleepSchedule, SmokingPreference,
    SocialLevel,
};

fn create_full_profile(id: &str) -> RoommateProfile {
    RoommateProfile {
        user_id: id.to_string(),
        university: Some("Université Mohammed V".to_string()),
        location: Some("Agdal, Rabat".to_string()),
        cleanliness_level: Some(3),
        sleep_schedule: Some(SleepSchedule::Regular),
        personality: Some(Personality::Ambivert),
        social_level: Some(SocialLevel::Moderate),
        smoking_preference: Some(SmokingPreference::NoSmoking),
        pets_tolerance: Some(PetsTolerance::Neutral),
        budget_min: Some(1500.0),
        budget_max: Some(3000.0),
        interests: vec!["football".to_string(), "cooking".to_string(), "gaming".to_string()],
        bio: Some("Engineering student, tidy, early classes".to_string()),
    }
}

fn create_opposite_profile(id: &str) -> RoommateProfile {
    RoommateProfile {
        user_id: id.to_string(),
        university: Some("Université Cadi Ayyad".to_string()),
        location: Some("Guéliz, Marrakech".to_string()),
        cleanliness_level: Some(1),
        sleep_schedule: Some(SleepSchedule::Night),
        personality: Some(Personality::Extrovert),
        social_level: Some(SocialLevel::High),
        smoking_preference: Some(SmokingPreference::Regularly),
        pets_tolerance: Some(PetsTolerance::LovePets),
        budget_min: Some(4000.0),
        budget_max: Some(6000.0),
        interests: vec!["clubbing".to_string(), "surfing".to_string()],
        bio: None,
    }
}

fn create_early_introvert(id: &str) -> RoommateProfile {
    RoommateProfile {
        user_id: id.to_string(),
        university: Some("Université Mohammed V".to_string()),
        location: Some("Agdal, Rabat".to_string()),
        cleanliness_level: Some(5),
        sleep_schedule: Some(SleepSchedule::Early),
        personality: Some(Personality::Introvert),
        social_level: Some(SocialLevel::Quiet),
        smoking_preference: Some(SmokingPreference::NoSmoking),
        pets_tolerance: Some(PetsTolerance::NoPets),
        budget_min: Some(1000.0),
        budget_max: Some(2000.0),
        interests: vec!["reading".to_string(), "chess".to_string()],
        bio: None,
    }
}

#[test]
fn test_self_match_returns_sentinel() {
    for profile in [create_full_profile("p"), create_opposite_profile("q"), RoommateProfile::new("r")] {
        let result = calculate_compatibility(Some(&profile), Some(&profile));
        assert_eq!(result.score, 0);
        assert!(result.details.is_none());
    }
}

#[test]
fn test_same_user_id_is_self_match_even_with_different_fields() {
    let a = create_full_profile("same");
    let b = create_opposite_profile("same");
    let result = calculate_compatibility(Some(&a), Some(&b));
    assert!(result.is_empty());
}

#[test]
fn test_score_is_within_range() {
    let profiles = vec![
        create_full_profile("a"),
        create_opposite_profile("b"),
        create_early_introvert("c"),
        RoommateProfile::new("d"),
    ];

    for a in &profiles {
        for b in &profiles {
            let result = calculate_compatibility(Some(a), Some(b));
            assert!(result.score <= 100, "{} vs {} scored {}", a.user_id, b.user_id, result.score);
        }
    }
}

#[test]
fn test_score_is_symmetric() {
    let profiles = vec![
        create_full_profile("a"),
        create_opposite_profile("b"),
        create_early_introvert("c"),
        RoommateProfile::new("d"),
    ];

    for a in &profiles {
        for b in &profiles {
            let forward = calculate_compatibility(Some(a), Some(b));
            let backward = calculate_compatibility(Some(b), Some(a));
            assert_eq!(forward.score, backward.score, "{} vs {}", a.user_id, b.user_id);
        }
    }
}

#[test]
fn test_budget_overlap_example() {
    let a = BudgetRange { min: 1000.0, max: 2000.0 };
    let b = BudgetRange { min: 1500.0, max: 2500.0 };
    let (points, overlap) = calculate_budget_points(&a, &b);
    assert_eq!(overlap, 500.0);
    assert_eq!(points, 5);
}

#[test]
fn test_budget_points_in_full_score() {
    let mut a = create_full_profile("a");
    let mut b = create_full_profile("b");
    a.budget_min = Some(1000.0);
    a.budget_max = Some(2000.0);
    b.budget_min = Some(1500.0);
    b.budget_max = Some(2500.0);

    let details = calculate_compatibility(Some(&a), Some(&b)).details.unwrap();
    assert_eq!(details.breakdown.budget, 5);
    assert_eq!(details.budget_overlap, 500.0);
}

#[test]
fn test_cleanliness_diff_of_two() {
    let mut a = create_full_profile("a");
    let mut b = create_full_profile("b");
    a.cleanliness_level = Some(2);
    b.cleanliness_level = Some(4);

    let details = calculate_compatibility(Some(&a), Some(&b)).details.unwrap();
    assert_eq!(details.cleanliness_diff, Some(2));
    assert_eq!(details.breakdown.cleanliness, 8);
}

#[test]
fn test_identical_profiles_score_100() {
    let a = create_full_profile("a");
    let b = create_full_profile("b");
    let result = calculate_compatibility(Some(&a), Some(&b));

    assert_eq!(result.score, 100);
    let details = result.details.unwrap();
    assert!(details.same_university);
    assert!(details.same_location);
    assert!(details.same_sleep_schedule);
    assert!(details.same_personality);
    assert!(details.same_social_level);
    assert!(details.same_smoking);
    assert!(details.same_pets);
    assert_eq!(details.common_interests, 3);
}

#[test]
fn test_opposite_profiles_score_low() {
    let a = create_early_introvert("a");
    let mut b = create_opposite_profile("b");
    b.cleanliness_level = Some(1);

    let result = calculate_compatibility(Some(&a), Some(&b));
    let details = result.details.unwrap();

    // Only the partial-credit floors apply: 3 + 4 + 3 + 4 + 0 + 2
    assert_eq!(result.score, 16);
    assert!(result.score < 30);
    assert_eq!(details.breakdown.budget, 0);
    assert_eq!(details.breakdown.interests, 0);
    assert_eq!(details.common_interests, 0);
}

#[test]
fn test_breakdown_sums_to_score_below_cap() {
    let a = create_full_profile("a");
    let b = create_early_introvert("b");
    let result = calculate_compatibility(Some(&a), Some(&b));
    let details = result.details.unwrap();

    assert!(details.breakdown.total() <= 100);
    assert_eq!(u16::from(result.score), details.breakdown.total());
}

#[test]
fn test_missing_fields_are_neutral() {
    let a = RoommateProfile::new("a");
    let b = RoommateProfile::new("b");
    let result = calculate_compatibility(Some(&a), Some(&b));
    let details = result.details.unwrap();

    // Default budgets [0, 10000] overlap fully
    assert_eq!(details.breakdown.budget, 10);
    assert!(!details.same_university);
    assert_eq!(details.cleanliness_diff, None);
    // cleanliness 3 + sleep 4 + personality 3 + social 4 + smoking 0 + pets 2 + budget 10
    assert_eq!(result.score, 26);
}

#[test]
fn test_flexible_sleeper_gets_partial_credit() {
    let mut a = create_full_profile("a");
    let mut b = create_full_profile("b");
    a.sleep_schedule = Some(SleepSchedule::Flexible);
    b.sleep_schedule = Some(SleepSchedule::Night);

    let details = calculate_compatibility(Some(&a), Some(&b)).details.unwrap();
    assert_eq!(details.breakdown.sleep_schedule, 8);
    assert!(!details.same_sleep_schedule);
}

#[test]
fn test_smoking_and_pets_partial_credit() {
    let mut a = create_full_profile("a");
    let mut b = create_full_profile("b");
    a.smoking_preference = Some(SmokingPreference::Occasionally);
    a.pets_tolerance = Some(PetsTolerance::LovePets);
    b.smoking_preference = Some(SmokingPreference::NoSmoking);
    b.pets_tolerance = Some(PetsTolerance::Neutral);

    let details = calculate_compatibility(Some(&a), Some(&b)).details.unwrap();
    assert_eq!(details.breakdown.smoking, 5);
    assert_eq!(details.breakdown.pets, 5);
}

#[test]
fn test_social_labels_both_mentioning_social_get_partial_credit() {
    let a: RoommateProfile =
        serde_json::from_str(r#"{"userId": "a", "socialLevel": "Not very social"}"#).unwrap();
    let b: RoommateProfile =
        serde_json::from_str(r#"{"userId": "b", "socialLevel": "Very social"}"#).unwrap();
    let c: RoommateProfile =
        serde_json::from_str(r#"{"userId": "c", "socialLevel": "Prefer quiet"}"#).unwrap();

    let reserved_vs_high = calculate_compatibility(Some(&a), Some(&b)).details.unwrap();
    assert_eq!(reserved_vs_high.breakdown.social_level, 7);
    assert!(!reserved_vs_high.same_social_level);

    // "Prefer quiet" never says "social"
    let quiet_vs_high = calculate_compatibility(Some(&c), Some(&b)).details.unwrap();
    assert_eq!(quiet_vs_high.breakdown.social_level, 4);
}

#[test]
fn test_interests_are_exact_tags() {
    let mut a = create_full_profile("a");
    let mut b = create_full_profile("b");
    a.interests = vec!["Coding".to_string(), "chess".to_string()];
    b.interests = vec!["coding".to_string(), "chess".to_string()];

    let details = calculate_compatibility(Some(&a), Some(&b)).details.unwrap();
    assert_eq!(details.common_interests, 1);
    assert_eq!(details.breakdown.interests, 3);
}
