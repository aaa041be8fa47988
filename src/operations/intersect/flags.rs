use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Structural facts observed while classifying a segment pair.
///
/// U and V name the first and second segment. `U1`/`U2`/`V1`/`V2` mark the
/// input endpoints that coincide with the reported geometry.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Flags(u8);

impl Flags {
    pub const EMPTY: Self = Self(0);
    pub const PARALLEL: Self = Self(1 << 0);
    pub const COLLINEAR: Self = Self(1 << 1);
    pub const DEGENERATE_U: Self = Self(1 << 2);
    pub const DEGENERATE_V: Self = Self(1 << 3);
    pub const U1: Self = Self(1 << 4);
    pub const U2: Self = Self(1 << 5);
    pub const V1: Self = Self(1 << 6);
    pub const V2: Self = Self(1 << 7);

    const NAMES: [(Self, &'static str); 8] = [
        (Self::PARALLEL, "PARALLEL"),
        (Self::COLLINEAR, "COLLINEAR"),
        (Self::DEGENERATE_U, "DEGENERATE_U"),
        (Self::DEGENERATE_V, "DEGENERATE_V"),
        (Self::U1, "U1"),
        (Self::U2, "U2"),
        (Self::V1, "V1"),
        (Self::V2, "V2"),
    ];

    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if every bit of `other` is set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    /// Inserts `other` when `condition` holds.
    pub fn set_if(&mut self, other: Self, condition: bool) {
        if condition {
            self.insert(other);
        }
    }

    /// Exchanges the roles of U and V: `DEGENERATE_U` <-> `DEGENERATE_V`,
    /// `U1` <-> `V1`, `U2` <-> `V2`. `PARALLEL` and `COLLINEAR` are kept.
    #[must_use]
    pub const fn swap_uv(self) -> Self {
        let shared = self.0 & (Self::PARALLEL.0 | Self::COLLINEAR.0);
        let degenerate_u = (self.0 & Self::DEGENERATE_U.0) << 1;
        let degenerate_v = (self.0 & Self::DEGENERATE_V.0) >> 1;
        let u_ends = (self.0 & (Self::U1.0 | Self::U2.0)) << 2;
        let v_ends = (self.0 & (Self::V1.0 | Self::V2.0)) >> 2;
        Self(shared | degenerate_u | degenerate_v | u_ends | v_ends)
    }

    /// Exchanges `U1` and `U2`, as when segment U is reversed.
    #[must_use]
    pub const fn swap_u_ends(self) -> Self {
        let rest = self.0 & !(Self::U1.0 | Self::U2.0);
        let u1 = (self.0 & Self::U1.0) << 1;
        let u2 = (self.0 & Self::U2.0) >> 1;
        Self(rest | u1 | u2)
    }
}

impl BitOr for Flags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("Flags(EMPTY)");
        }
        f.write_str("Flags(")?;
        let mut first = true;
        for (flag, name) in Self::NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        f.write_str(")")
    }
}
