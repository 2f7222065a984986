use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use crate::error::EstimateError;

/// Customer gender as collected by the prediction form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl FromStr for Gender {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(EstimateError::InvalidValue {
                field: ProfileField::Gender,
                value: s.to_string(),
                reason: "must be one of: Male, Female".to_string(),
            }),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
        }
    }
}

/// Highest completed education level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Education {
    #[serde(alias = "High School")]
    HighSchool,
    Bachelor,
    Graduate,
}

impl FromStr for Education {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "highschool" => Ok(Education::HighSchool),
            "bachelor" => Ok(Education::Bachelor),
            "graduate" => Ok(Education::Graduate),
            _ => Err(EstimateError::InvalidValue {
                field: ProfileField::Education,
                value: s.to_string(),
                reason: "must be one of: High School, Bachelor, Graduate".to_string(),
            }),
        }
    }
}

impl fmt::Display for Education {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Education::HighSchool => write!(f, "High School"),
            Education::Bachelor => write!(f, "Bachelor"),
            Education::Graduate => write!(f, "Graduate"),
        }
    }
}

/// The four inputs the estimator needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfileField {
    Age,
    Gender,
    Education,
    ReviewScore,
}

impl ProfileField {
    pub const ALL: [ProfileField; 4] = [
        ProfileField::Age,
        ProfileField::Gender,
        ProfileField::Education,
        ProfileField::ReviewScore,
    ];
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProfileField::Age => "age",
            ProfileField::Gender => "gender",
            ProfileField::Education => "education",
            ProfileField::ReviewScore => "reviewScore",
        };
        f.write_str(name)
    }
}

/// A fully specified customer description, ready to be scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerProfile {
    pub age: u32,
    pub gender: Gender,
    pub education: Education,
    #[serde(rename = "reviewScore")]
    pub review_score: u8,
}

/// Integer form inputs arrive either as JSON numbers or as select-box strings
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(i64),
    Text(String),
}

/// Accept `35`, `"35"` or `""` (treated as absent)
fn lenient_integer<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64> + FromStr,
    <T as FromStr>::Err: fmt::Display,
{
    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(n)) => T::try_from(n)
            .map(Some)
            .map_err(|_| de::Error::custom(format!("integer {} is out of range", n))),
        Some(NumberOrText::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(NumberOrText::Text(s)) => s.trim().parse().map(Some).map_err(de::Error::custom),
    }
}

/// Partially filled profile as supplied by a form or request body
///
/// Every field is optional so that a missing input can be reported instead of
/// rejected at the deserialization layer. Enum fields stay as strings until
/// [`ProfileDraft::to_profile`] parses them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ProfileDraft {
    #[serde(default, deserialize_with = "lenient_integer")]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub education: Option<String>,
    #[validate(range(min = 1, max = 5))]
    #[serde(default, deserialize_with = "lenient_integer", alias = "review_score", rename = "reviewScore")]
    pub review_score: Option<i64>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

impl ProfileDraft {
    /// Fields that are absent, or blank for the string inputs
    pub fn missing_fields(&self) -> Vec<ProfileField> {
        ProfileField::ALL
            .into_iter()
            .filter(|field| match field {
                ProfileField::Age => self.age.is_none(),
                ProfileField::Gender => non_blank(&self.gender).is_none(),
                ProfileField::Education => non_blank(&self.education).is_none(),
                ProfileField::ReviewScore => self.review_score.is_none(),
            })
            .collect()
    }

    /// Overwrite the fields present in `patch`, leaving the others untouched
    pub fn merge(&mut self, patch: ProfileDraft) {
        if patch.age.is_some() {
            self.age = patch.age;
        }
        if patch.gender.is_some() {
            self.gender = patch.gender;
        }
        if patch.education.is_some() {
            self.education = patch.education;
        }
        if patch.review_score.is_some() {
            self.review_score = patch.review_score;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.missing_fields().len() == ProfileField::ALL.len()
    }

    /// Validate the draft and build a [`CustomerProfile`]
    ///
    /// Missing fields are checked first and reported all at once.
    pub fn to_profile(&self) -> Result<CustomerProfile, EstimateError> {
        let (Some(age), Some(gender), Some(education), Some(review_score)) = (
            self.age,
            non_blank(&self.gender),
            non_blank(&self.education),
            self.review_score,
        ) else {
            return Err(EstimateError::MissingField {
                fields: self.missing_fields(),
            });
        };

        if let Err(errors) = self.validate() {
            return Err(EstimateError::InvalidValue {
                field: ProfileField::ReviewScore,
                value: review_score.to_string(),
                reason: errors.to_string(),
            });
        }

        Ok(CustomerProfile {
            age,
            gender: gender.parse()?,
            education: education.parse()?,
            // within 1..=5 after validation
            review_score: review_score as u8,
        })
    }
}

impl From<CustomerProfile> for ProfileDraft {
    fn from(profile: CustomerProfile) -> Self {
        Self {
            age: Some(profile.age),
            gender: Some(profile.gender.to_string()),
            education: Some(profile.education.to_string()),
            review_score: Some(profile.review_score.into()),
        }
    }
}

/// Per-feature contributions, in hundredths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub age: u32,
    pub gender: u32,
    pub education: u32,
    pub review: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.age + self.gender + self.education + self.review
    }
}

/// Human-readable form of the label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Likelihood {
    Likely,
    Unlikely,
}

impl Likelihood {
    pub fn describe(&self) -> &'static str {
        match self {
            Likelihood::Likely => "This customer is likely to make a purchase.",
            Likelihood::Unlikely => "This customer is unlikely to make a purchase.",
        }
    }
}

impl fmt::Display for Likelihood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Likelihood::Likely => write!(f, "likely"),
            Likelihood::Unlikely => write!(f, "unlikely"),
        }
    }
}

/// Outcome of scoring one profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResult {
    #[serde(rename = "willPurchase")]
    pub will_purchase: bool,
    pub breakdown: ScoreBreakdown,
}

impl PredictionResult {
    pub fn likelihood(&self) -> Likelihood {
        if self.will_purchase {
            Likelihood::Likely
        } else {
            Likelihood::Unlikely
        }
    }

    /// Total score as a decimal, e.g. `0.65`
    pub fn total_score(&self) -> f64 {
        self.breakdown.total() as f64 / 100.0
    }
}
