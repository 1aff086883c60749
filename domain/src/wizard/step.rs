//! Wizard steps and the fields each one owns.

use crate::core::error::DomainError;
use crate::quote::Field;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Total number of steps in the wizard.
pub const TOTAL_STEPS: u8 = 5;

/// One screen of the quote wizard.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    #[default]
    LivestockDetails,
    PickupLocation,
    DropoffLocation,
    Timeline,
    ContactInformation,
}

impl Step {
    pub fn all() -> &'static [Step] {
        &[
            Step::LivestockDetails,
            Step::PickupLocation,
            Step::DropoffLocation,
            Step::Timeline,
            Step::ContactInformation,
        ]
    }

    pub fn first() -> Self {
        Step::LivestockDetails
    }

    pub fn last() -> Self {
        Step::ContactInformation
    }

    /// Convert a 1-based step number to a `Step`.
    pub fn from_number(n: u8) -> Result<Self, DomainError> {
        match n {
            1 => Ok(Step::LivestockDetails),
            2 => Ok(Step::PickupLocation),
            3 => Ok(Step::DropoffLocation),
            4 => Ok(Step::Timeline),
            5 => Ok(Step::ContactInformation),
            _ => Err(DomainError::InvalidStep(n)),
        }
    }

    /// 1-based step number
    pub fn number(self) -> u8 {
        match self {
            Step::LivestockDetails => 1,
            Step::PickupLocation => 2,
            Step::DropoffLocation => 3,
            Step::Timeline => 4,
            Step::ContactInformation => 5,
        }
    }

    pub fn is_first(self) -> bool {
        self == Step::first()
    }

    pub fn is_last(self) -> bool {
        self == Step::last()
    }

    /// Following step, or `None` on the last step
    pub fn next(self) -> Option<Self> {
        Step::from_number(self.number() + 1).ok()
    }

    /// Preceding step, or `None` on the first step
    pub fn previous(self) -> Option<Self> {
        Step::from_number(self.number() - 1).ok()
    }

    /// Title shown above the progress bar
    pub fn title(self) -> &'static str {
        match self {
            Step::LivestockDetails => "Livestock Details",
            Step::PickupLocation => "Pickup Location",
            Step::DropoffLocation => "Dropoff Location",
            Step::Timeline => "Timeline",
            Step::ContactInformation => "Contact Information",
        }
    }

    /// Question heading the step's inputs
    pub fn heading(self) -> &'static str {
        match self {
            Step::LivestockDetails => "What are you hauling?",
            Step::PickupLocation => "Where are we picking up?",
            Step::DropoffLocation => "Where are we delivering?",
            Step::Timeline => "When do you need pickup?",
            Step::ContactInformation => "How can we reach you?",
        }
    }

    /// Every field shown on this step, in form order
    pub fn fields(self) -> &'static [Field] {
        match self {
            Step::LivestockDetails => &[Field::Species, Field::Quantity],
            Step::PickupLocation => &[Field::PickupCity, Field::PickupState, Field::PickupZip],
            Step::DropoffLocation => {
                &[Field::DropoffCity, Field::DropoffState, Field::DropoffZip]
            }
            Step::Timeline => &[Field::Timeline, Field::Notes],
            Step::ContactInformation => &[Field::Name, Field::Phone, Field::Email],
        }
    }

    /// Fields checked by this step's validation rule
    pub fn validated_fields(self) -> &'static [Field] {
        match self {
            Step::LivestockDetails => &[Field::Species, Field::Quantity],
            Step::PickupLocation => &[Field::PickupCity, Field::PickupState],
            Step::DropoffLocation => &[Field::DropoffCity, Field::DropoffState],
            Step::Timeline => &[Field::Timeline],
            Step::ContactInformation => &[Field::Name, Field::Phone, Field::Email],
        }
    }

    /// The step a field is shown on
    pub fn owning(field: Field) -> Self {
        Step::all()
            .iter()
            .copied()
            .find(|step| step.fields().contains(&field))
            .unwrap_or(Step::first())
    }

    /// Share of the wizard completed when this step is showing, in percent
    pub fn progress_percent(self) -> u8 {
        self.number() * 100 / TOTAL_STEPS
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
