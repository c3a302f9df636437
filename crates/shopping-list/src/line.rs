//! Cart line value types.
//!
//! A [`CartLine`] is one ingredient amount taken from one recipe in a cart.
//! An [`AggregatedLine`] is the sum of every cart line sharing the same
//! ingredient name and unit.

use crate::error::ShoppingListError;

/// One validated `(ingredient, unit, amount)` tuple from a cart recipe.
///
/// ## Invariants
/// - `ingredient_name` and `unit` are non-blank. They are otherwise kept
///   exactly as supplied; no trimming or case folding happens here.
/// - `amount` is strictly positive.
///
/// # Examples
/// ```
/// use shopping_list::CartLine;
///
/// let line = CartLine::try_new("Flour", "g", 500).expect("valid line");
/// assert_eq!(line.amount(), 500);
/// assert!(CartLine::try_new("Flour", "g", 0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CartLine {
    ingredient_name: String,
    unit: String,
    amount: u32,
}

impl CartLine {
    /// Validate raw store values and build a cart line.
    ///
    /// `amount` is accepted as a wide signed integer so values read from the
    /// store can be checked before narrowing.
    ///
    /// # Errors
    ///
    /// Returns [`ShoppingListError::InvalidInput`] when the ingredient name
    /// or unit is blank, or when `amount` is not in `1..=u32::MAX`.
    pub fn try_new(
        ingredient_name: impl Into<String>,
        unit: impl Into<String>,
        amount: i64,
    ) -> Result<Self, ShoppingListError> {
        let name = ingredient_name.into();
        if name.trim().is_empty() {
            return Err(ShoppingListError::invalid_input(
                "ingredient_name",
                "must not be blank",
            ));
        }

        let measurement_unit = unit.into();
        if measurement_unit.trim().is_empty() {
            return Err(ShoppingListError::invalid_input("unit", "must not be blank"));
        }

        if amount <= 0 {
            return Err(ShoppingListError::invalid_input(
                "amount",
                format!("must be positive, got {amount}"),
            ));
        }
        let checked = u32::try_from(amount).map_err(|_| {
            ShoppingListError::invalid_input(
                "amount",
                format!("must not exceed {}, got {amount}", u32::MAX),
            )
        })?;

        Ok(Self {
            ingredient_name: name,
            unit: measurement_unit,
            amount: checked,
        })
    }

    /// Ingredient name as stored.
    #[must_use]
    pub fn ingredient_name(&self) -> &str {
        self.ingredient_name.as_str()
    }

    /// Measurement unit as stored.
    #[must_use]
    pub fn unit(&self) -> &str {
        self.unit.as_str()
    }

    /// Positive amount in `unit`.
    #[must_use]
    pub const fn amount(&self) -> u32 {
        self.amount
    }

    pub(crate) fn into_parts(self) -> (String, String, u32) {
        (self.ingredient_name, self.unit, self.amount)
    }
}

/// Total amount of one ingredient in one unit across the whole cart.
///
/// Produced only by [`crate::aggregate`], so `total_amount` is always the
/// exact sum of a non-empty group of cart lines.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AggregatedLine {
    ingredient_name: String,
    unit: String,
    total_amount: u64,
}

impl AggregatedLine {
    pub(crate) const fn new(ingredient_name: String, unit: String, total_amount: u64) -> Self {
        Self {
            ingredient_name,
            unit,
            total_amount,
        }
    }

    /// Ingredient name shared by every line in the group.
    #[must_use]
    pub fn ingredient_name(&self) -> &str {
        self.ingredient_name.as_str()
    }

    /// Measurement unit shared by every line in the group.
    #[must_use]
    pub fn unit(&self) -> &str {
        self.unit.as_str()
    }

    /// Sum of the group's amounts.
    #[must_use]
    pub const fn total_amount(&self) -> u64 {
        self.total_amount
    }
}

impl TryFrom<AggregatedLine> for CartLine {
    type Error = ShoppingListError;

    /// Feed an aggregated total back in as a single cart line.
    ///
    /// Fails only when the total no longer fits a cart line amount.
    fn try_from(value: AggregatedLine) -> Result<Self, Self::Error> {
        let AggregatedLine {
            ingredient_name,
            unit,
            total_amount,
        } = value;
        let amount = i64::try_from(total_amount).map_err(|_| {
            ShoppingListError::invalid_input(
                "amount",
                format!("total {total_amount} exceeds the cart line range"),
            )
        })?;
        Self::try_new(ingredient_name, unit, amount)
    }
}
