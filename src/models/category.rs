//! Closed category sets for expenses and income
//!
//! Categories are fixed enumerations rather than user-defined records. Names
//! coming from user input are parsed with `FromStr` and unknown values are
//! rejected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when a category name is not part of the fixed set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory {
    pub kind: &'static str,
    pub name: String,
}

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown {} category: '{}'", self.kind, self.name)
    }
}

impl std::error::Error for UnknownCategory {}

macro_rules! define_categories {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal, [$($variant:ident => $icon:literal),+ $(,)?]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every category, in display order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The category's display name
            pub fn name(&self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant)),+
                }
            }

            /// Emoji shown next to the category in listings
            pub fn icon(&self) -> &'static str {
                match self {
                    $($name::$variant => $icon),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(self.name())
            }
        }

        impl FromStr for $name {
            type Err = UnknownCategory;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|c| c.name().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| UnknownCategory {
                        kind: $kind,
                        name: wanted.to_string(),
                    })
            }
        }
    };
}

define_categories!(
    /// Category of an expense (and of a budget)
    ExpenseCategory, "expense", [
        Food => "🍔",
        Transportation => "🚗",
        Entertainment => "🎬",
        Shopping => "🛍️",
        Bills => "📄",
        Utilities => "💡",
        Grocery => "🛒",
        Other => "📦",
    ]
);

define_categories!(
    /// Category of an income entry
    IncomeCategory, "income", [
        Salary => "💼",
        Freelance => "💻",
        Investment => "📈",
        Business => "🏢",
        Gift => "🎁",
        Other => "💰",
    ]
);
