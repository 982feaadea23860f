//! Prefix, postfix and infix operators.

/// Prefix operators (`!x`, `-x`, `++x`, ...).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PrefixOp {
    Increment,
    Decrement,
    Plus,
    Minus,
    Complement,
    Not,
}

impl PrefixOp {
    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Increment => "++",
            Self::Decrement => "--",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Complement => "~",
            Self::Not => "!",
        }
    }
}

/// Postfix operators (`x++`, `x--`).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PostfixOp {
    Increment,
    Decrement,
}

impl PostfixOp {
    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Increment => "++",
            Self::Decrement => "--",
        }
    }
}

/// Infix (binary) operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InfixOp {
    // Arithmetic
    Times,
    Divide,
    Remainder,
    Plus,
    Minus,

    // Shifts
    LeftShift,
    RightShiftSigned,
    RightShiftUnsigned,

    // Comparison
    Less,
    Greater,
    LessEquals,
    GreaterEquals,
    Equals,
    NotEquals,

    // Bitwise
    Xor,
    And,
    Or,

    // Logical
    ConditionalAnd,
    ConditionalOr,
}

impl InfixOp {
    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Times => "*",
            Self::Divide => "/",
            Self::Remainder => "%",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::LeftShift => "<<",
            Self::RightShiftSigned => ">>",
            Self::RightShiftUnsigned => ">>>",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEquals => "<=",
            Self::GreaterEquals => ">=",
            Self::Equals => "==",
            Self::NotEquals => "!=",
            Self::Xor => "^",
            Self::And => "&",
            Self::Or => "|",
            Self::ConditionalAnd => "&&",
            Self::ConditionalOr => "||",
        }
    }

    /// `&&` and `||`: both operands must be boolean.
    pub const fn is_logical(self) -> bool {
        matches!(self, Self::ConditionalAnd | Self::ConditionalOr)
    }

    /// Operators whose operands are integers in the common case.
    ///
    /// Equality is excluded: `==` and `!=` accept any operand type.
    pub const fn is_numeric(self) -> bool {
        !matches!(
            self,
            Self::Equals | Self::NotEquals | Self::ConditionalAnd | Self::ConditionalOr
        )
    }
}
