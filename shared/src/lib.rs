use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Opaque identity reference for an actor on the platform.
///
/// The frontend never inspects the contents; it only forwards the value on
/// contribution calls so the backend can route funds to its custody account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Principal(String);

impl Principal {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Principal {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Closed set of project categories offered by the creation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Technology,
    Healthcare,
    Education,
    Environment,
    Agriculture,
    Finance,
    Gaming,
    Art,
    #[serde(rename = "Social Impact")]
    SocialImpact,
    Other,
}

impl Category {
    /// Every selectable category, in the order the form shows them.
    pub const ALL: [Category; 10] = [
        Category::Technology,
        Category::Healthcare,
        Category::Education,
        Category::Environment,
        Category::Agriculture,
        Category::Finance,
        Category::Gaming,
        Category::Art,
        Category::SocialImpact,
        Category::Other,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Technology => "Technology",
            Category::Healthcare => "Healthcare",
            Category::Education => "Education",
            Category::Environment => "Environment",
            Category::Agriculture => "Agriculture",
            Category::Finance => "Finance",
            Category::Gaming => "Gaming",
            Category::Art => "Art",
            Category::SocialImpact => "Social Impact",
            Category::Other => "Other",
        }
    }

    /// Look up a category by its display name. Anything outside the fixed
    /// set, including the empty string, is rejected.
    pub fn from_name(name: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Lifecycle filter for campaign listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CampaignStatus {
    Active,
    Ended,
}

/// Summary row for the campaign dashboard, joined with its idea by the
/// backend. All monetary fields are in base units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignCard {
    pub id: u64,
    pub idea_id: u64,
    pub title: String,
    pub category: String,
    pub amount_raised: u64,
    pub goal: u64,
    /// Seconds since the Unix epoch.
    pub end_date: u64,
    /// Whole days until `end_date`; negative once the campaign has ended.
    pub days_left: i64,
}

/// Request to create a new project idea. The funding goal has already been
/// converted to base units by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateIdeaRequest {
    pub title: String,
    pub description: String,
    pub funding_goal: u64,
    pub legal_entity: String,
    pub contact_info: String,
    pub category: Category,
    pub business_registration: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateIdeaResponse {
    pub idea_id: u64,
}

/// Best-effort registration of the contributing user. The backend treats an
/// already-registered user as a failure, which callers may ignore.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterUserRequest {
    pub display_name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributeRequest {
    /// Custody identity of the platform backend receiving the funds.
    pub payee: Principal,
    pub campaign_id: u64,
    pub amount_base_units: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributeResponse {
    pub contribution_id: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfirmPaymentRequest {
    pub contribution_id: u64,
    pub payee: Principal,
}

/// Session state as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionResponse {
    pub authenticated: bool,
    pub principal: Option<Principal>,
    pub display_name: Option<String>,
    pub email: Option<String>,
}

// ------------- Currency conversion -------------

/// Smallest indivisible units per display token (8 decimal places).
pub const BASE_UNITS_PER_TOKEN: u64 = 100_000_000;

/// Number of fractional digits carried by the base-unit representation.
pub const BASE_UNIT_DECIMALS: usize = 8;

#[derive(Debug, Clone, PartialEq)]
pub enum AmountParseError {
    Empty,
    Invalid,
    Negative,
    OutOfRange,
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountParseError::Empty => write!(f, "amount is empty"),
            AmountParseError::Invalid => write!(f, "amount is not a decimal number"),
            AmountParseError::Negative => write!(f, "amount is negative"),
            AmountParseError::OutOfRange => write!(f, "amount is too large"),
        }
    }
}

impl std::error::Error for AmountParseError {}

/// Convert a human-entered decimal token amount to base units.
///
/// Parsing is pure integer arithmetic on the digit string, so fractional
/// digits beyond the eighth are truncated, never rounded up, and amounts
/// with up to 8 fractional digits convert exactly.
pub fn to_base_units(input: &str) -> Result<u64, AmountParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AmountParseError::Empty);
    }
    if trimmed.contains('-') {
        return Err(AmountParseError::Negative);
    }
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);

    let (whole_digits, frac_digits) = match unsigned.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (unsigned, ""),
    };
    if whole_digits.is_empty() && frac_digits.is_empty() {
        return Err(AmountParseError::Invalid);
    }
    if !whole_digits.bytes().all(|b| b.is_ascii_digit())
        || !frac_digits.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(AmountParseError::Invalid);
    }

    let whole: u64 = if whole_digits.is_empty() {
        0
    } else {
        whole_digits.parse().map_err(|_| AmountParseError::OutOfRange)?
    };

    // Truncate to the smallest representable unit.
    let kept = &frac_digits[..frac_digits.len().min(BASE_UNIT_DECIMALS)];
    let mut frac: u64 = if kept.is_empty() {
        0
    } else {
        kept.parse().map_err(|_| AmountParseError::Invalid)?
    };
    frac *= 10u64.pow((BASE_UNIT_DECIMALS - kept.len()) as u32);

    whole
        .checked_mul(BASE_UNITS_PER_TOKEN)
        .and_then(|units| units.checked_add(frac))
        .ok_or(AmountParseError::OutOfRange)
}

/// Inverse scaling for display purposes only; never sent back to the actor.
pub fn from_base_units(units: u64) -> f64 {
    units as f64 / BASE_UNITS_PER_TOKEN as f64
}

/// Render base units as a decimal string with the full 8 fractional digits,
/// e.g. `1_250_000_000` becomes `"12.50000000"`.
pub fn format_base_units(units: u64) -> String {
    format!(
        "{}.{:08}",
        units / BASE_UNITS_PER_TOKEN,
        units % BASE_UNITS_PER_TOKEN
    )
}

// ------------- Form validation -------------

pub const TITLE_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MIN_CHARS: usize = 10;
pub const DESCRIPTION_MAX_CHARS: usize = 500;
/// Upper bound for a single contribution, in display tokens.
pub const MAX_CONTRIBUTION_TOKENS: f64 = 1000.0;

/// Field-scoped validation failures, keyed by form field name.
///
/// A non-empty map blocks submission entirely; nothing reaches the network
/// until every field passes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    errors: BTreeMap<&'static str, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

/// Raw field values bound to the project creation form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    pub funding_goal: String,
    pub legal_entity: String,
    pub contact_info: String,
    pub category: String,
    pub business_registration: String,
}

/// Validated project creation input. The funding goal stays a decimal
/// string; conversion to base units happens at submission time.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCreationRequest {
    pub title: String,
    pub description: String,
    pub funding_goal: String,
    pub legal_entity: String,
    pub contact_info: String,
    pub category: Category,
    pub business_registration: u8,
}

impl ProjectForm {
    /// Check every field and either produce the typed request or a map of
    /// per-field messages. Synchronous and pure; no I/O.
    pub fn validate(&self) -> Result<ProjectCreationRequest, FieldErrors> {
        let mut errors = FieldErrors::new();

        let title = self.title.trim();
        if title.is_empty() {
            errors.insert("title", "Title is required");
        } else if title.chars().count() > TITLE_MAX_CHARS {
            errors.insert(
                "title",
                format!("Title must be at most {} characters", TITLE_MAX_CHARS),
            );
        }

        let description = self.description.trim();
        let description_chars = description.chars().count();
        if description_chars < DESCRIPTION_MIN_CHARS || description_chars > DESCRIPTION_MAX_CHARS {
            errors.insert(
                "description",
                format!(
                    "Description must be between {} and {} characters",
                    DESCRIPTION_MIN_CHARS, DESCRIPTION_MAX_CHARS
                ),
            );
        }

        let funding_goal = self.funding_goal.trim();
        if funding_goal.is_empty() {
            errors.insert("funding_goal", "Funding goal is required");
        } else {
            match funding_goal.parse::<f64>() {
                Ok(goal) if goal.is_finite() && goal > 0.0 => {}
                Ok(_) => {
                    errors.insert("funding_goal", "Funding goal must be greater than 0");
                }
                Err(_) => {
                    errors.insert("funding_goal", "Funding goal must be a number");
                }
            }
        }

        let legal_entity = self.legal_entity.trim();
        if legal_entity.is_empty() {
            errors.insert("legal_entity", "Legal entity is required");
        }

        let contact_info = self.contact_info.trim();
        if contact_info.is_empty() {
            errors.insert("contact_info", "Contact email is required");
        } else if !is_well_formed_email(contact_info) {
            errors.insert("contact_info", "Contact info must be a valid email address");
        }

        let category = Category::from_name(self.category.trim());
        if category.is_none() {
            errors.insert("category", "Please choose a category");
        }

        let business_registration = self.business_registration.trim();
        let registration_number = if business_registration.is_empty() {
            errors.insert("business_registration", "Business registration is required");
            None
        } else {
            match business_registration.parse::<u8>() {
                Ok(number) => Some(number),
                Err(_) => {
                    errors.insert(
                        "business_registration",
                        "Business registration must be a whole number between 0 and 255",
                    );
                    None
                }
            }
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ProjectCreationRequest {
            title: title.to_string(),
            description: description.to_string(),
            funding_goal: funding_goal.to_string(),
            legal_entity: legal_entity.to_string(),
            contact_info: contact_info.to_string(),
            // Both unwraps are guarded by the error check above.
            category: category.unwrap(),
            business_registration: registration_number.unwrap(),
        })
    }
}

/// Raw field values bound to the contribution form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContributionForm {
    pub amount: String,
}

/// Validated contribution amount, still in decimal-string form.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidContribution {
    pub amount: String,
}

impl ContributionForm {
    pub fn validate(&self) -> Result<ValidContribution, FieldErrors> {
        let mut errors = FieldErrors::new();

        let amount = self.amount.trim();
        if amount.is_empty() {
            errors.insert("amount", "Amount is required");
        } else {
            match amount.parse::<f64>() {
                // The range check fails with one composite message no matter
                // which bound broke.
                Ok(value) if value.is_finite() && value > 0.0 && value <= MAX_CONTRIBUTION_TOKENS => {}
                Ok(_) => {
                    errors.insert(
                        "amount",
                        format!(
                            "Amount must be greater than 0 and at most {}",
                            MAX_CONTRIBUTION_TOKENS as u64
                        ),
                    );
                }
                Err(_) => {
                    errors.insert("amount", "Amount must be a number");
                }
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ValidContribution {
            amount: amount.to_string(),
        })
    }
}

fn is_well_formed_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_project_form() -> ProjectForm {
        ProjectForm {
            title: "Eco-Friendly Water Bottles".to_string(),
            description: "Reusable bottles made from recycled materials".to_string(),
            funding_goal: "12.5".to_string(),
            legal_entity: "EcoCorp LLC".to_string(),
            contact_info: "contact@ecocorp.example".to_string(),
            category: "Environment".to_string(),
            business_registration: "1".to_string(),
        }
    }

    #[test]
    fn test_to_base_units_scales_by_eight_decimals() {
        assert_eq!(to_base_units("12.5").unwrap(), 1_250_000_000);
        assert_eq!(to_base_units("1000").unwrap(), 100_000_000_000);
        assert_eq!(to_base_units("0.00000001").unwrap(), 1);
        assert_eq!(to_base_units("1.15").unwrap(), 115_000_000);
        assert_eq!(to_base_units("  3.25  ").unwrap(), 325_000_000);
        assert_eq!(to_base_units(".5").unwrap(), 50_000_000);
        assert_eq!(to_base_units("7.").unwrap(), 700_000_000);
    }

    #[test]
    fn test_to_base_units_truncates_never_rounds() {
        // Ninth fractional digit is dropped even when it would round up.
        assert_eq!(to_base_units("0.123456789").unwrap(), 12_345_678);
        assert_eq!(to_base_units("0.999999999").unwrap(), 99_999_999);
        assert_eq!(to_base_units("1.000000009").unwrap(), 100_000_000);
    }

    #[test]
    fn test_to_base_units_rejects_garbage() {
        assert_eq!(to_base_units(""), Err(AmountParseError::Empty));
        assert_eq!(to_base_units("   "), Err(AmountParseError::Empty));
        assert_eq!(to_base_units("abc"), Err(AmountParseError::Invalid));
        assert_eq!(to_base_units("1.2.3"), Err(AmountParseError::Invalid));
        assert_eq!(to_base_units("."), Err(AmountParseError::Invalid));
        assert_eq!(to_base_units("-5"), Err(AmountParseError::Negative));
        assert_eq!(to_base_units("1e8"), Err(AmountParseError::Invalid));
    }

    #[test]
    fn test_base_unit_round_trip_recovers_truncated_input() {
        let cases = [
            ("12.5", "12.50000000"),
            ("0.00000001", "0.00000001"),
            ("1000", "1000.00000000"),
            ("42.12345678", "42.12345678"),
            // More than 8 fractional digits: tail truncated.
            ("42.123456789", "42.12345678"),
        ];
        for (input, expected) in cases {
            assert_eq!(format_base_units(to_base_units(input).unwrap()), expected);
        }
    }

    #[test]
    fn test_from_base_units_is_display_inverse() {
        assert_eq!(from_base_units(1_250_000_000), 12.5);
        assert_eq!(from_base_units(0), 0.0);
    }

    #[test]
    fn test_contribution_amount_boundaries() {
        assert!(ContributionForm { amount: "1000".to_string() }.validate().is_ok());
        assert!(ContributionForm { amount: "0.00000001".to_string() }.validate().is_ok());
        assert!(ContributionForm { amount: "0".to_string() }.validate().is_err());
        assert!(ContributionForm { amount: "-1".to_string() }.validate().is_err());
        assert!(ContributionForm { amount: "1000.00000001".to_string() }.validate().is_err());
    }

    #[test]
    fn test_contribution_range_failure_uses_one_composite_message() {
        let too_low = ContributionForm { amount: "0".to_string() }.validate().unwrap_err();
        let too_high = ContributionForm { amount: "1500".to_string() }.validate().unwrap_err();
        assert_eq!(too_low.get("amount"), too_high.get("amount"));
        assert_eq!(
            too_low.get("amount"),
            Some("Amount must be greater than 0 and at most 1000")
        );
    }

    #[test]
    fn test_contribution_non_numeric_input() {
        let errors = ContributionForm { amount: "lots".to_string() }.validate().unwrap_err();
        assert_eq!(errors.get("amount"), Some("Amount must be a number"));
        let errors = ContributionForm { amount: "".to_string() }.validate().unwrap_err();
        assert_eq!(errors.get("amount"), Some("Amount is required"));
    }

    #[test]
    fn test_category_set_is_closed() {
        assert_eq!(Category::ALL.len(), 10);
        assert_eq!(Category::from_name("Technology"), Some(Category::Technology));
        assert_eq!(Category::from_name("Other"), Some(Category::Other));
        assert_eq!(Category::from_name(""), None);
        assert_eq!(Category::from_name("Blockchain"), None);
        assert_eq!(Category::from_name("technology"), None);
    }

    #[test]
    fn test_category_serializes_as_display_name() {
        assert_eq!(
            serde_json::to_string(&Category::SocialImpact).unwrap(),
            "\"Social Impact\""
        );
        assert_eq!(serde_json::to_string(&Category::Gaming).unwrap(), "\"Gaming\"");
    }

    #[test]
    fn test_project_form_happy_path() {
        let request = valid_project_form().validate().unwrap();
        assert_eq!(request.title, "Eco-Friendly Water Bottles");
        assert_eq!(request.category, Category::Environment);
        assert_eq!(request.business_registration, 1);
        assert_eq!(request.funding_goal, "12.5");
    }

    #[test]
    fn test_project_form_rejects_bad_fields() {
        let mut form = valid_project_form();
        form.title = String::new();
        form.description = "too short".to_string();
        form.funding_goal = "-3".to_string();
        form.contact_info = "not-an-email".to_string();
        form.category = "Blockchain".to_string();
        form.business_registration = "many".to_string();

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 6);
        assert_eq!(errors.get("title"), Some("Title is required"));
        assert!(errors.get("description").is_some());
        assert_eq!(errors.get("funding_goal"), Some("Funding goal must be greater than 0"));
        assert!(errors.get("contact_info").is_some());
        assert_eq!(errors.get("category"), Some("Please choose a category"));
        assert!(errors.get("business_registration").is_some());
        assert!(errors.get("legal_entity").is_none());
    }

    #[test]
    fn test_description_length_bounds_are_inclusive() {
        let mut form = valid_project_form();
        form.description = "a".repeat(10);
        assert!(form.validate().is_ok());
        form.description = "a".repeat(9);
        assert!(form.validate().is_err());
        form.description = "a".repeat(500);
        assert!(form.validate().is_ok());
        form.description = "a".repeat(501);
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_title_length_bound_is_inclusive() {
        let mut form = valid_project_form();
        form.title = "t".repeat(100);
        assert!(form.validate().is_ok());
        form.title = "t".repeat(101);
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_email_grammar() {
        assert!(is_well_formed_email("a@b.co"));
        assert!(is_well_formed_email("first.last@sub.domain.example"));
        assert!(!is_well_formed_email("plain"));
        assert!(!is_well_formed_email("a@b"));
        assert!(!is_well_formed_email("@b.co"));
        assert!(!is_well_formed_email("a@"));
        assert!(!is_well_formed_email("a b@c.example"));
        assert!(!is_well_formed_email("a@@c.example"));
        assert!(!is_well_formed_email("a@.example"));
    }

    #[test]
    fn test_validation_is_all_or_nothing() {
        let mut form = valid_project_form();
        form.contact_info = "bad".to_string();
        // One bad field fails the whole form; no partial record comes back.
        assert!(form.validate().is_err());
    }
}
