use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A free-text label that does not map onto any known category
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognised {kind} label: {label:?}")]
pub struct UnknownLabel {
    pub kind: &'static str,
    pub label: String,
}

impl UnknownLabel {
    fn new(kind: &'static str, label: &str) -> Self {
        Self {
            kind,
            label: label.to_string(),
        }
    }
}

/// Shared Display/Serialize impls: every category renders as its canonical label.
macro_rules! labelled_category {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.label())
            }
        }
    };
}

/// Preferred sleep rhythm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SleepSchedule {
    Early,
    Night,
    Flexible,
    Regular,
}

impl SleepSchedule {
    pub fn label(&self) -> &'static str {
        match self {
            SleepSchedule::Early => "Early bird",
            SleepSchedule::Night => "Night owl",
            SleepSchedule::Flexible => "Flexible",
            SleepSchedule::Regular => "Regular schedule",
        }
    }
}

impl FromStr for SleepSchedule {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim().to_lowercase();
        if label.contains("flexible") {
            Ok(SleepSchedule::Flexible)
        } else if label.contains("early") || label.contains("morning") {
            Ok(SleepSchedule::Early)
        } else if label.contains("night") || label.contains("late") {
            Ok(SleepSchedule::Night)
        } else if label.contains("regular") {
            Ok(SleepSchedule::Regular)
        } else {
            Err(UnknownLabel::new("sleep schedule", s))
        }
    }
}

labelled_category!(SleepSchedule);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Personality {
    Introvert,
    Extrovert,
    Ambivert,
}

impl Personality {
    pub fn label(&self) -> &'static str {
        match self {
            Personality::Introvert => "Introvert",
            Personality::Extrovert => "Extrovert",
            Personality::Ambivert => "Ambivert",
        }
    }
}

impl FromStr for Personality {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim().to_lowercase();
        if label.contains("ambivert") {
            Ok(Personality::Ambivert)
        } else if label.contains("introvert") {
            Ok(Personality::Introvert)
        } else if label.contains("extrovert") || label.contains("extravert") {
            Ok(Personality::Extrovert)
        } else {
            Err(UnknownLabel::new("personality", s))
        }
    }
}

labelled_category!(Personality);

/// How much social activity a student wants at home
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialLevel {
    Quiet,
    Reserved,
    Moderate,
    High,
}

impl SocialLevel {
    pub fn label(&self) -> &'static str {
        match self {
            SocialLevel::Quiet => "Prefer quiet",
            SocialLevel::Reserved => "Not very social",
            SocialLevel::Moderate => "Moderately social",
            SocialLevel::High => "Very social",
        }
    }

    /// Whether the label describes itself in terms of being social
    pub fn mentions_social(&self) -> bool {
        !matches!(self, SocialLevel::Quiet)
    }
}

impl FromStr for SocialLevel {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim().to_lowercase();
        // Low-social labels are checked first: "not very social" still says "social"
        if ["quiet", "private", "low", "reserved", "not "]
            .iter()
            .any(|keyword| label.contains(keyword))
        {
            if label.contains("social") {
                Ok(SocialLevel::Reserved)
            } else {
                Ok(SocialLevel::Quiet)
            }
        } else if label.contains("moderate") {
            Ok(SocialLevel::Moderate)
        } else if label.contains("social") || label.contains("high") || label.contains("outgoing") {
            Ok(SocialLevel::High)
        } else {
            Err(UnknownLabel::new("social level", s))
        }
    }
}

labelled_category!(SocialLevel);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SmokingPreference {
    NoSmoking,
    Occasionally,
    Regularly,
}

impl SmokingPreference {
    pub fn label(&self) -> &'static str {
        match self {
            SmokingPreference::NoSmoking => "No smoking",
            SmokingPreference::Occasionally => "Occasionally",
            SmokingPreference::Regularly => "Regularly",
        }
    }
}

impl FromStr for SmokingPreference {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim().to_lowercase();
        if label.starts_with("no") || label.contains("non") || label.contains("never") {
            Ok(SmokingPreference::NoSmoking)
        } else if label.contains("occasion") || label.contains("social") {
            Ok(SmokingPreference::Occasionally)
        } else if label.contains("regular") || label.contains("daily") || label.contains("often") {
            Ok(SmokingPreference::Regularly)
        } else {
            Err(UnknownLabel::new("smoking preference", s))
        }
    }
}

labelled_category!(SmokingPreference);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PetsTolerance {
    NoPets,
    Neutral,
    LovePets,
}

impl PetsTolerance {
    pub fn label(&self) -> &'static str {
        match self {
            PetsTolerance::NoPets => "No pets",
            PetsTolerance::Neutral => "Neutral",
            PetsTolerance::LovePets => "Love pets",
        }
    }
}

impl FromStr for PetsTolerance {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim().to_lowercase();
        if label.starts_with("no") || label.contains("allerg") {
            Ok(PetsTolerance::NoPets)
        } else if label.contains("love") {
            Ok(PetsTolerance::LovePets)
        } else if label.contains("neutral") || label.contains("ok") || label.contains("fine") {
            Ok(PetsTolerance::Neutral)
        } else {
            Err(UnknownLabel::new("pets tolerance", s))
        }
    }
}

labelled_category!(PetsTolerance);

/// Deserialize an optional free-text label, mapping unknown labels to `None`
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|label| label.parse().ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sleep_schedule_labels() {
        assert_eq!("Early bird (before 11pm)".parse::<SleepSchedule>(), Ok(SleepSchedule::Early));
        assert_eq!("Night owl".parse::<SleepSchedule>(), Ok(SleepSchedule::Night));
        assert_eq!("flexible".parse::<SleepSchedule>(), Ok(SleepSchedule::Flexible));
        assert_eq!("Regular (11pm - 7am)".parse::<SleepSchedule>(), Ok(SleepSchedule::Regular));
        assert!("whenever".parse::<SleepSchedule>().is_err());
    }

    #[test]
    fn test_social_level_labels() {
        assert_eq!("Not very social".parse::<SocialLevel>(), Ok(SocialLevel::Reserved));
        assert_eq!("Low-key, not social".parse::<SocialLevel>(), Ok(SocialLevel::Reserved));
        assert_eq!("Prefer quiet".parse::<SocialLevel>(), Ok(SocialLevel::Quiet));
        assert_eq!("Private".parse::<SocialLevel>(), Ok(SocialLevel::Quiet));
        assert_eq!("Moderately Social".parse::<SocialLevel>(), Ok(SocialLevel::Moderate));
        assert_eq!("Very Social".parse::<SocialLevel>(), Ok(SocialLevel::High));
    }

    #[test]
    fn test_smoking_and_pets_labels() {
        assert_eq!("Non-smoker".parse::<SmokingPreference>(), Ok(SmokingPreference::NoSmoking));
        assert_eq!("Occasionally".parse::<SmokingPreference>(), Ok(SmokingPreference::Occasionally));
        assert_eq!("Regularly".parse::<SmokingPreference>(), Ok(SmokingPreference::Regularly));
        assert_eq!("No pets".parse::<PetsTolerance>(), Ok(PetsTolerance::NoPets));
        assert_eq!("Love pets!".parse::<PetsTolerance>(), Ok(PetsTolerance::LovePets));
        assert_eq!("Neutral".parse::<PetsTolerance>(), Ok(PetsTolerance::Neutral));
    }

    #[test]
    fn test_canonical_labels_parse_back() {
        for schedule in [
            SleepSchedule::Early,
            SleepSchedule::Night,
            SleepSchedule::Flexible,
            SleepSchedule::Regular,
        ] {
            assert_eq!(schedule.label().parse::<SleepSchedule>(), Ok(schedule));
        }
        for level in [
            SocialLevel::Quiet,
            SocialLevel::Reserved,
            SocialLevel::Moderate,
            SocialLevel::High,
        ] {
            assert_eq!(level.to_string().parse::<SocialLevel>(), Ok(level));
        }
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&PetsTolerance::LovePets).unwrap();
        assert_eq!(json, "\"Love pets\"");
    }
}
