use serde::{Deserialize, Serialize};
use std::fmt;

/// Country the customer banks in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Geography {
    France,
    Germany,
    Spain,
}

impl Geography {
    pub const ALL: [Geography; 3] = [Geography::France, Geography::Germany, Geography::Spain];

    pub fn as_str(&self) -> &'static str {
        match self {
            Geography::France => "France",
            Geography::Germany => "Germany",
            Geography::Spain => "Spain",
        }
    }
}

impl fmt::Display for Geography {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Loyalty card tier. The external names are upper-case by contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardType {
    Silver,
    Gold,
    Platinum,
    Diamond,
}

impl CardType {
    pub const ALL: [CardType; 4] = [
        CardType::Silver,
        CardType::Gold,
        CardType::Platinum,
        CardType::Diamond,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CardType::Silver => "SILVER",
            CardType::Gold => "GOLD",
            CardType::Platinum => "PLATINUM",
            CardType::Diamond => "DIAMOND",
        }
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One fully-populated feature vector describing a single customer.
///
/// The struct is strongly typed; the mapping to the external column names the
/// pipeline was fit on (including the embedded-space names) lives in
/// `domain::ml::field_registry`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub credit_score: u32,
    pub geography: Geography,
    pub gender: Gender,
    pub age: u32,
    pub tenure: u32,
    pub balance: f64,
    pub num_of_products: u32,
    pub has_cr_card: bool,
    pub is_active_member: bool,
    pub estimated_salary: f64,
    pub complain: bool,
    pub satisfaction_score: u32,
    pub card_type: CardType,
    pub point_earned: u32,
}

impl Default for CustomerRecord {
    /// Form defaults: a mid-range, unremarkable customer.
    fn default() -> Self {
        Self {
            credit_score: 650,
            geography: Geography::France,
            gender: Gender::Male,
            age: 40,
            tenure: 5,
            balance: 50_000.0,
            num_of_products: 1,
            has_cr_card: true,
            is_active_member: true,
            estimated_salary: 80_000.0,
            complain: false,
            satisfaction_score: 3,
            card_type: CardType::Silver,
            point_earned: 3_000,
        }
    }
}

/// Binary outcome of a churn inference. Class 1 is the churn class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChurnLabel {
    Retained,
    Churned,
}

impl ChurnLabel {
    pub fn from_class(class: u8) -> Self {
        if class == 1 {
            ChurnLabel::Churned
        } else {
            ChurnLabel::Retained
        }
    }

    pub fn as_class(&self) -> u8 {
        match self {
            ChurnLabel::Retained => 0,
            ChurnLabel::Churned => 1,
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            ChurnLabel::Retained => "NOT LIKELY TO CHURN",
            ChurnLabel::Churned => "LIKELY TO CHURN",
        }
    }
}
