use std::{fmt::Display, num::NonZeroI32, ops::Neg};

/// A literal represented by an integer, positive for a selected subset and negative for an
/// excluded one.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Literal {
    // We choose a nonzeroi32 since 0 terminates a clause in DIMACS
    inner: NonZeroI32,
}

impl Literal {
    /// The variable this literal talks about, i.e. the 1-indexed subset position.
    pub fn var(self) -> usize {
        self.inner.unsigned_abs().get() as usize
    }

    pub fn is_positive(self) -> bool {
        self.inner.get() > 0
    }

    pub fn raw(&self) -> i32 {
        i32::from(self.inner)
    }
}

impl Neg for Literal {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        self.inner = -self.inner;
        self
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Literal {
            inner: NonZeroI32::new(value).expect("cannot create literal with id 0"),
        }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}
