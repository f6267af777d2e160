/*
 * kes is licensed under The 3-Clause BSD, see LICENSE.
 */

//! Closed enumerations naming eccentricity regimes, starters, and kernels.

/// Eccentricity regime, decided by the fixed threshold [`crate::constants::ECC_EPS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EccentricityRegime {
    /// `e` is non-finite or negative.
    Invalid,
    /// `0 <= e <= ECC_EPS`.
    Circular,
    /// `ECC_EPS < e < 1 - ECC_EPS`.
    Elliptic,
    /// `|e - 1| <= ECC_EPS`.
    Parabolic,
    /// `e > 1 + ECC_EPS`.
    Hyperbolic,
}

/// Starter identifier. `None` is invalid input; `Total` is a terminator
/// used only for bounds-checking and iteration, never returned by any
/// function.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StarterId {
    None = 0,
    S0,
    S1,
    S2,
    S3,
    S4,
    S5,
    S6,
    S7,
    S8,
    S9,
    S10,
    S11,
    S12,
    S13,
    S14,
    Total,
}

impl StarterId {
    /// All starters implemented for the elliptic regime, in catalog order.
    pub const ELLIPTIC: [StarterId; 15] = [
        StarterId::S0,
        StarterId::S1,
        StarterId::S2,
        StarterId::S3,
        StarterId::S4,
        StarterId::S5,
        StarterId::S6,
        StarterId::S7,
        StarterId::S8,
        StarterId::S9,
        StarterId::S10,
        StarterId::S11,
        StarterId::S12,
        StarterId::S13,
        StarterId::S14,
    ];

    /// `true` for any tag in `0..Total` other than `None`.
    pub fn is_valid(self) -> bool {
        !matches!(self, StarterId::None | StarterId::Total) && (self as u8) < (StarterId::Total as u8)
    }
}

/// Kernel (solver) identifier. `None` is invalid input; `Total` is a
/// terminator used only for bounds-checking and iteration.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KernelId {
    None = 0,
    Bisection,
    FixedPoint,
    NewtonRaphson,
    Halley,
    DanbyBurkardt4,
    DanbyBurkardt5,
    LaguerreConway,
    Secant,
    WegsteinSecant,
    Mikkola,
    Markley,
    Nijenhuis,
    Total,
}

impl KernelId {
    pub const ALL: [KernelId; 12] = [
        KernelId::Bisection,
        KernelId::FixedPoint,
        KernelId::NewtonRaphson,
        KernelId::Halley,
        KernelId::DanbyBurkardt4,
        KernelId::DanbyBurkardt5,
        KernelId::LaguerreConway,
        KernelId::Secant,
        KernelId::WegsteinSecant,
        KernelId::Mikkola,
        KernelId::Markley,
        KernelId::Nijenhuis,
    ];

    /// `true` for any tag in `0..Total` other than `None`.
    pub fn is_valid(self) -> bool {
        !matches!(self, KernelId::None | KernelId::Total) && (self as u8) < (KernelId::Total as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_validity() {
        assert!(!StarterId::None.is_valid());
        assert!(!StarterId::Total.is_valid());
        assert!(StarterId::S7.is_valid());
        assert_eq!(StarterId::ELLIPTIC.len(), 15);
    }

    #[test]
    fn kernel_validity() {
        assert!(!KernelId::None.is_valid());
        assert!(!KernelId::Total.is_valid());
        assert!(KernelId::Nijenhuis.is_valid());
        assert_eq!(KernelId::ALL.len(), 12);
    }
}
