//! Error vocabulary of the machine.
//!
//! Brew failures are a closed set of [`ErrorKind`] values aggregated in an
//! [`ErrorSet`] bitmask. [`CoffeeMachineError`] covers driver-level failures
//! (locking, order files) that never come out of a brew itself.

use serde::Serialize;
use thiserror::Error;

/// Everything that can go wrong while brewing. The display messages are the
/// texts shown to the user by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Error)]
pub enum ErrorKind {
    #[error("Empty water tank")]
    EmptyWaterTank,
    #[error("Not enough water in heater to boil")]
    NotEnoughWaterToBoil,
    #[error("Too low water temperature")]
    BadTemp,
    #[error("Empty milk tank")]
    EmptyMilkTank,
    #[error("Not enough beans to grind")]
    NotEnoughBeansToGrind,
    #[error("Full trash bin")]
    FullTrash,
    #[error("Pump error")]
    PumpError,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 7] = [
        ErrorKind::EmptyWaterTank,
        ErrorKind::NotEnoughWaterToBoil,
        ErrorKind::BadTemp,
        ErrorKind::EmptyMilkTank,
        ErrorKind::NotEnoughBeansToGrind,
        ErrorKind::FullTrash,
        ErrorKind::PumpError,
    ];

    /// Kinds the machine can recover from with a refill or an emptied bin.
    /// The rest need a changed request.
    pub fn is_recoverable(self) -> bool {
        matches!(
            self,
            ErrorKind::EmptyWaterTank
                | ErrorKind::EmptyMilkTank
                | ErrorKind::NotEnoughBeansToGrind
                | ErrorKind::FullTrash
        )
    }

    fn mask(self) -> u8 {
        match self {
            ErrorKind::EmptyWaterTank => 1 << 0,
            ErrorKind::NotEnoughWaterToBoil => 1 << 1,
            ErrorKind::BadTemp => 1 << 2,
            ErrorKind::EmptyMilkTank => 1 << 3,
            ErrorKind::NotEnoughBeansToGrind => 1 << 4,
            ErrorKind::FullTrash => 1 << 5,
            ErrorKind::PumpError => 1 << 6,
        }
    }
}

/// Set of error kinds present on a device or aggregated by the mechanism.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ErrorSet {
    bits: u8,
}

impl ErrorSet {
    pub fn new() -> ErrorSet {
        ErrorSet::default()
    }

    /// Records a kind as present. Inserting twice is a no-op.
    pub fn insert(&mut self, kind: ErrorKind) {
        self.bits |= kind.mask();
    }

    pub fn remove(&mut self, kind: ErrorKind) {
        self.bits &= !kind.mask();
    }

    pub fn contains(&self, kind: ErrorKind) -> bool {
        self.bits & kind.mask() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn merge(&mut self, other: ErrorSet) {
        self.bits |= other.bits;
    }

    pub fn iter(&self) -> impl Iterator<Item = ErrorKind> + '_ {
        ErrorKind::ALL.into_iter().filter(|kind| self.contains(*kind))
    }
}

/// Failures of the machinery around the brew core.
#[derive(Debug, Error)]
pub enum CoffeeMachineError {
    #[error("a lock of the shared mechanism was poisoned")]
    LockError,
    #[error("could not read the orders file")]
    FileReaderError,
    #[error("unknown coffee type '{0}'")]
    UnknownRecipe(String),
}

impl<T> From<std::sync::PoisonError<T>> for CoffeeMachineError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        CoffeeMachineError::LockError
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_empty() {
        let errors = ErrorSet::new();
        assert_eq!(true, errors.is_empty());
        assert_eq!(false, errors.contains(ErrorKind::EmptyWaterTank));
    }

    #[test]
    fn should_insert_and_remove_kinds() {
        let mut errors = ErrorSet::new();
        errors.insert(ErrorKind::FullTrash);
        errors.insert(ErrorKind::BadTemp);
        assert_eq!(true, errors.contains(ErrorKind::FullTrash));
        assert_eq!(true, errors.contains(ErrorKind::BadTemp));
        errors.remove(ErrorKind::FullTrash);
        assert_eq!(false, errors.contains(ErrorKind::FullTrash));
        assert_eq!(true, errors.contains(ErrorKind::BadTemp));
    }

    #[test]
    fn should_insert_idempotently() {
        let mut errors = ErrorSet::new();
        errors.insert(ErrorKind::EmptyMilkTank);
        errors.insert(ErrorKind::EmptyMilkTank);
        assert_eq!(1, errors.iter().count());
    }

    #[test]
    fn should_merge_two_sets() {
        let mut first = ErrorSet::new();
        first.insert(ErrorKind::EmptyWaterTank);
        let mut second = ErrorSet::new();
        second.insert(ErrorKind::PumpError);
        first.merge(second);
        assert_eq!(true, first.contains(ErrorKind::EmptyWaterTank));
        assert_eq!(true, first.contains(ErrorKind::PumpError));
    }

    #[test]
    fn should_iterate_over_present_kinds_only() {
        let mut errors = ErrorSet::new();
        errors.insert(ErrorKind::NotEnoughBeansToGrind);
        errors.insert(ErrorKind::FullTrash);
        let kinds: Vec<ErrorKind> = errors.iter().collect();
        assert_eq!(
            vec![ErrorKind::NotEnoughBeansToGrind, ErrorKind::FullTrash],
            kinds
        );
    }

    #[test]
    fn should_mark_resource_exhaustion_as_recoverable() {
        assert_eq!(true, ErrorKind::EmptyWaterTank.is_recoverable());
        assert_eq!(true, ErrorKind::FullTrash.is_recoverable());
        assert_eq!(false, ErrorKind::BadTemp.is_recoverable());
        assert_eq!(false, ErrorKind::NotEnoughWaterToBoil.is_recoverable());
    }

    #[test]
    fn should_display_the_user_facing_messages() {
        assert_eq!("Empty water tank", ErrorKind::EmptyWaterTank.to_string());
        assert_eq!(
            "Not enough water in heater to boil",
            ErrorKind::NotEnoughWaterToBoil.to_string()
        );
        assert_eq!("Full trash bin", ErrorKind::FullTrash.to_string());
    }
}
