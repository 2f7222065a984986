use crate::models::{CustomerProfile, Education, Gender, ScoreBreakdown};

// All weights are in hundredths so that totals compare exactly against the
// threshold; 0.1 + 0.2 + 0.1 + 0.1 must equal 0.5, not 0.5000000000000001.

/// Ages strictly above this fall into the high bucket
pub const AGE_PIVOT: u32 = 30;
pub const AGE_HIGH: u32 = 30;
pub const AGE_LOW: u32 = 10;

pub const GENDER_FEMALE: u32 = 20;
pub const GENDER_MALE: u32 = 15;

pub const EDUCATION_GRADUATE: u32 = 30;
pub const EDUCATION_BACHELOR: u32 = 20;
pub const EDUCATION_HIGH_SCHOOL: u32 = 10;

pub const REVIEW_HIGH: u32 = 40;
pub const REVIEW_MID: u32 = 20;
pub const REVIEW_LOW: u32 = 10;

/// A total strictly above this is labelled "will purchase"
pub const PURCHASE_THRESHOLD: u32 = 50;

/// Score every feature of a profile
///
/// Scoring formula (weights shown as decimals):
/// total = age (0.3 if > 30, else 0.1)
///       + gender (0.2 female, 0.15 male)
///       + education (0.3 graduate, 0.2 bachelor, 0.1 high school)
///       + review (0.4 if >= 4, 0.2 if >= 3, else 0.1)
pub fn score_profile(profile: &CustomerProfile) -> ScoreBreakdown {
    ScoreBreakdown {
        age: age_score(profile.age),
        gender: gender_score(profile.gender),
        education: education_score(profile.education),
        review: review_score(profile.review_score),
    }
}

#[inline]
pub fn age_score(age: u32) -> u32 {
    if age > AGE_PIVOT {
        AGE_HIGH
    } else {
        AGE_LOW
    }
}

#[inline]
pub fn gender_score(gender: Gender) -> u32 {
    match gender {
        Gender::Female => GENDER_FEMALE,
        Gender::Male => GENDER_MALE,
    }
}

#[inline]
pub fn education_score(education: Education) -> u32 {
    match education {
        Education::Graduate => EDUCATION_GRADUATE,
        Education::Bachelor => EDUCATION_BACHELOR,
        Education::HighSchool => EDUCATION_HIGH_SCHOOL,
    }
}

#[inline]
pub fn review_score(review_score: u8) -> u32 {
    if review_score >= 4 {
        REVIEW_HIGH
    } else if review_score >= 3 {
        REVIEW_MID
    } else {
        REVIEW_LOW
    }
}

/// Convert hundredths to the decimal weight shown to users
pub fn as_weight(points: u32) -> f64 {
    points as f64 / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_boundary() {
        assert_eq!(age_score(30), AGE_LOW);
        assert_eq!(age_score(31), AGE_HIGH);
        assert_eq!(age_score(18), AGE_LOW);
    }

    #[test]
    fn test_review_buckets() {
        assert_eq!(review_score(1), REVIEW_LOW);
        assert_eq!(review_score(2), REVIEW_LOW);
        assert_eq!(review_score(3), REVIEW_MID);
        assert_eq!(review_score(4), REVIEW_HIGH);
        assert_eq!(review_score(5), REVIEW_HIGH);
    }

    #[test]
    fn test_score_profile() {
        let profile = CustomerProfile {
            age: 35,
            gender: Gender::Female,
            education: Education::Graduate,
            review_score: 5,
        };

        let breakdown = score_profile(&profile);
        assert_eq!(breakdown.total(), 120);
        assert_eq!(as_weight(breakdown.gender), 0.2);
    }
}
