use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fulfilment and payment options a business can advertise
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BusinessOption {
    #[serde(rename = "Cash on Delivery")]
    CashOnDelivery,
    #[serde(rename = "Pickup In-Store")]
    PickupInStore,
    #[serde(rename = "Digital Payments")]
    DigitalPayments,
    #[serde(rename = "Next-Day Delivery")]
    NextDayDelivery,
}

impl BusinessOption {
    pub const ALL: [BusinessOption; 4] = [
        BusinessOption::CashOnDelivery,
        BusinessOption::PickupInStore,
        BusinessOption::DigitalPayments,
        BusinessOption::NextDayDelivery,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BusinessOption::CashOnDelivery => "Cash on Delivery",
            BusinessOption::PickupInStore => "Pickup In-Store",
            BusinessOption::DigitalPayments => "Digital Payments",
            BusinessOption::NextDayDelivery => "Next-Day Delivery",
        }
    }
}

/// Listing category, chosen from a fixed list
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BusinessCategory {
    Restaurant,
    #[serde(rename = "Retail Store")]
    RetailStore,
    #[serde(rename = "Service Business")]
    ServiceBusiness,
    Healthcare,
    #[serde(rename = "Beauty & Salon")]
    BeautySalon,
    Technology,
    Automotive,
    #[serde(rename = "Real Estate")]
    RealEstate,
    Education,
    Entertainment,
    Other,
}

impl BusinessCategory {
    pub const ALL: [BusinessCategory; 11] = [
        BusinessCategory::Restaurant,
        BusinessCategory::RetailStore,
        BusinessCategory::ServiceBusiness,
        BusinessCategory::Healthcare,
        BusinessCategory::BeautySalon,
        BusinessCategory::Technology,
        BusinessCategory::Automotive,
        BusinessCategory::RealEstate,
        BusinessCategory::Education,
        BusinessCategory::Entertainment,
        BusinessCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BusinessCategory::Restaurant => "Restaurant",
            BusinessCategory::RetailStore => "Retail Store",
            BusinessCategory::ServiceBusiness => "Service Business",
            BusinessCategory::Healthcare => "Healthcare",
            BusinessCategory::BeautySalon => "Beauty & Salon",
            BusinessCategory::Technology => "Technology",
            BusinessCategory::Automotive => "Automotive",
            BusinessCategory::RealEstate => "Real Estate",
            BusinessCategory::Education => "Education",
            BusinessCategory::Entertainment => "Entertainment",
            BusinessCategory::Other => "Other",
        }
    }
}

/// Answer to "do you want an online shop?"
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OnlineShopOption {
    #[default]
    Sure,
    No,
}

impl OnlineShopOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            OnlineShopOption::Sure => "sure",
            OnlineShopOption::No => "no",
        }
    }
}

/// How the listing fee is paid. Only shown when an online shop is wanted.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentOption {
    #[default]
    Stripe,
    Bank,
}

impl PaymentOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentOption::Stripe => "stripe",
            PaymentOption::Bank => "bank",
        }
    }
}

/// Products offered as checkboxes before any custom entries
pub const PREDEFINED_PRODUCTS: [&str; 6] = [
    "Espresso Latte",
    "Cappuccino",
    "Cold Brew",
    "Tea",
    "Pastries",
    "Sandwiches",
];

/// Returned when a display string or wire value is not part of an enumeration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value:?}")]
pub struct UnknownValue {
    pub kind: &'static str,
    pub value: String,
}

macro_rules! display_and_parse {
    ($ty:ty, $kind:literal, $all:expr) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = UnknownValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $all.into_iter()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| UnknownValue {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

display_and_parse!(BusinessOption, "business option", BusinessOption::ALL);
display_and_parse!(BusinessCategory, "category", BusinessCategory::ALL);
display_and_parse!(
    OnlineShopOption,
    "online shop option",
    [OnlineShopOption::Sure, OnlineShopOption::No]
);
display_and_parse!(
    PaymentOption,
    "payment option",
    [PaymentOption::Stripe, PaymentOption::Bank]
);
