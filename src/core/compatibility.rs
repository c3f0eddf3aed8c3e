use std::collections::HashSet;

use crate::core::budget::calculate_budget_points;
use crate::models::{
    MatchDetails, MatchScore, Personality, PetsTolerance, RoommateProfile, ScoreBreakdown,
    SleepSchedule, SmokingPreference, SocialLevel,
};

/// Highest score a pair can reach
pub const MAX_SCORE: u8 = 100;

pub const UNIVERSITY_POINTS: u8 = 15;
pub const LOCATION_POINTS: u8 = 15;
pub const INTERESTS_POINTS: u8 = 5;

/// Calculate a compatibility score (0-100) between two roommate profiles
///
/// | criterion      | max |
/// |----------------|-----|
/// | university     | 15  |
/// | location       | 15  |
/// | cleanliness    | 15  |
/// | sleep schedule | 12  |
/// | personality    | 10  |
/// | social level   | 10  |
/// | smoking        | 10  |
/// | pets           | 8   |
/// | budget overlap | 10  |
/// | interests      | 5   |
///
/// Each criterion contributes whole points; the sum is capped at 100.
/// An absent profile or a self-match yields [`MatchScore::empty`].
pub fn calculate_compatibility(
    a: Option<&RoommateProfile>,
    b: Option<&RoommateProfile>,
) -> MatchScore {
    let (a, b) = match (a, b) {
        (Some(a), Some(b)) if a.user_id != b.user_id => (a, b),
        _ => return MatchScore::empty(),
    };

    let same_university = same_text(&a.university, &b.university);
    let same_location = same_text(&a.location, &b.location);
    let (cleanliness, cleanliness_diff) = cleanliness_points(a.cleanliness_level, b.cleanliness_level);
    let (budget, budget_overlap) = calculate_budget_points(&a.budget(), &b.budget());
    let (interests, common_interests) = interest_points(&a.interests, &b.interests);

    let breakdown = ScoreBreakdown {
        university: if same_university { UNIVERSITY_POINTS } else { 0 },
        location: if same_location { LOCATION_POINTS } else { 0 },
        cleanliness,
        sleep_schedule: sleep_schedule_points(a.sleep_schedule, b.sleep_schedule),
        personality: personality_points(a.personality, b.personality),
        social_level: social_level_points(a.social_level, b.social_level),
        smoking: smoking_points(a.smoking_preference, b.smoking_preference),
        pets: pets_points(a.pets_tolerance, b.pets_tolerance),
        budget,
        interests,
    };

    let score = breakdown.total().min(u16::from(MAX_SCORE)) as u8;

    MatchScore {
        score,
        details: Some(MatchDetails {
            same_university,
            same_location,
            cleanliness_diff,
            same_sleep_schedule: same_category(a.sleep_schedule, b.sleep_schedule),
            same_personality: same_category(a.personality, b.personality),
            same_social_level: same_category(a.social_level, b.social_level),
            same_smoking: same_category(a.smoking_preference, b.smoking_preference),
            same_pets: same_category(a.pets_tolerance, b.pets_tolerance),
            budget_overlap,
            common_interests,
            breakdown,
        }),
    }
}

/// Absent values never count as a match
#[inline]
fn same_text(a: &Option<String>, b: &Option<String>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a == b)
}

#[inline]
fn same_category<T: PartialEq>(a: Option<T>, b: Option<T>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a == b)
}

/// Cleanliness points (0-15) from the difference of two 1-5 levels
#[inline]
fn cleanliness_points(a: Option<u8>, b: Option<u8>) -> (u8, Option<u8>) {
    let diff = match (a, b) {
        (Some(a), Some(b)) => Some(a.abs_diff(b)),
        _ => None,
    };

    let points = match diff {
        Some(0) => 15,
        Some(1) => 12,
        Some(2) => 8,
        _ => 3,
    };

    (points, diff)
}

#[inline]
fn sleep_schedule_points(a: Option<SleepSchedule>, b: Option<SleepSchedule>) -> u8 {
    match (a, b) {
        (Some(a), Some(b)) if a == b => 12,
        (Some(SleepSchedule::Flexible), _) | (_, Some(SleepSchedule::Flexible)) => 8,
        _ => 4,
    }
}

#[inline]
fn personality_points(a: Option<Personality>, b: Option<Personality>) -> u8 {
    match (a, b) {
        (Some(a), Some(b)) if a == b => 10,
        (Some(Personality::Ambivert), _) | (_, Some(Personality::Ambivert)) => 7,
        _ => 3,
    }
}

#[inline]
fn social_level_points(a: Option<SocialLevel>, b: Option<SocialLevel>) -> u8 {
    match (a, b) {
        (Some(a), Some(b)) if a == b => 10,
        (Some(SocialLevel::Moderate), _) | (_, Some(SocialLevel::Moderate)) => 7,
        (Some(a), Some(b)) if a.mentions_social() && b.mentions_social() => 7,
        _ => 4,
    }
}

#[inline]
fn smoking_points(a: Option<SmokingPreference>, b: Option<SmokingPreference>) -> u8 {
    use SmokingPreference::{NoSmoking, Occasionally};

    match (a, b) {
        (Some(a), Some(b)) if a == b => 10,
        (Some(NoSmoking), Some(Occasionally)) | (Some(Occasionally), Some(NoSmoking)) => 5,
        _ => 0,
    }
}

#[inline]
fn pets_points(a: Option<PetsTolerance>, b: Option<PetsTolerance>) -> u8 {
    use PetsTolerance::{LovePets, NoPets};

    match (a, b) {
        (Some(a), Some(b)) if a == b => 8,
        (Some(LovePets), other) | (other, Some(LovePets)) if other != Some(NoPets) => 5,
        _ => 2,
    }
}

/// Shared interest points (0-5) and the number of common interests
///
/// Interests compare as a set of exact tags; blank tags are ignored.
fn interest_points(a: &[String], b: &[String]) -> (u8, usize) {
    let a = interest_set(a);
    let b = interest_set(b);

    let common = a.intersection(&b).count();
    let denominator = a.len().max(b.len()).max(1);
    let points = (f64::from(INTERESTS_POINTS) * common as f64 / denominator as f64).round();

    (points as u8, common)
}

fn interest_set(interests: &[String]) -> HashSet<&str> {
    interests
        .iter()
        .map(String::as_str)
        .filter(|interest| !interest.trim().is_empty())
        .collect()
}
