use serde::{Deserialize, Serialize};

/// The arithmetic operation a grid challenge is built from.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// `a + b`
    #[display("+")]
    Sum,
    /// `a × b`
    #[display("×")]
    Product,
}

impl Operation {
    /// Both operations, in the order a pair emits its challenges.
    pub const ALL: [Self; 2] = [Self::Sum, Self::Product];

    /// Applies the operation to two operands.
    #[must_use]
    pub fn apply(self, a: u8, b: u8) -> u16 {
        let (a, b) = (u16::from(a), u16::from(b));
        match self {
            Self::Sum => a + b,
            Self::Product => a * b,
        }
    }

    /// Advances a player's operation choice: none, sum, product, none.
    ///
    /// ```
    /// use tetonor_core::Operation;
    ///
    /// assert_eq!(Operation::cycle(None), Some(Operation::Sum));
    /// assert_eq!(Operation::cycle(Some(Operation::Sum)), Some(Operation::Product));
    /// assert_eq!(Operation::cycle(Some(Operation::Product)), None);
    /// ```
    #[must_use]
    pub const fn cycle(current: Option<Self>) -> Option<Self> {
        match current {
            None => Some(Self::Sum),
            Some(Self::Sum) => Some(Self::Product),
            Some(Self::Product) => None,
        }
    }
}

/// Two operands together with their sum and product.
///
/// The operands are always stored in ascending order (`a <= b`). Pairs are created
/// once by the generator and never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pair {
    /// Smaller operand.
    pub a: u8,
    /// Larger operand.
    pub b: u8,
    /// `a + b`
    pub sum: u16,
    /// `a × b`
    pub product: u16,
}

impl Pair {
    /// Creates a pair from two operands in any order.
    #[must_use]
    pub fn new(x: u8, y: u8) -> Self {
        let (a, b) = if x <= y { (x, y) } else { (y, x) };
        Self {
            a,
            b,
            sum: Operation::Sum.apply(a, b),
            product: Operation::Product.apply(a, b),
        }
    }

    /// Returns the result of `operation` for this pair.
    #[must_use]
    pub const fn result(&self, operation: Operation) -> u16 {
        match operation {
            Operation::Sum => self.sum,
            Operation::Product => self.product,
        }
    }

    /// The ordered operands as a key.
    #[must_use]
    pub const fn operands(&self) -> (u8, u8) {
        (self.a, self.b)
    }

    /// The `(sum, product)` signature of the pair.
    ///
    /// Two pairs with the same signature would make a puzzle ambiguous.
    #[must_use]
    pub const fn signature(&self) -> (u16, u16) {
        (self.sum, self.product)
    }

    /// Returns `true` if the sum and the product differ.
    ///
    /// Only `(2, 2)` fails this within the operand bounds.
    #[must_use]
    pub const fn has_distinct_results(&self) -> bool {
        self.sum != self.product
    }
}
