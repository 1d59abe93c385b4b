//! Trash bin for the wastes of processed beans.

use crate::constants::TRASH_BIN_CAPACITY;
use crate::device::Device;
use crate::errors::{ErrorKind, ErrorSet};

pub struct TrashBin {
    current_level: u64,
    errors: ErrorSet,
}

impl TrashBin {
    pub fn new() -> TrashBin {
        TrashBin {
            current_level: 0,
            errors: ErrorSet::new(),
        }
    }

    /// Drops one portion of waste into the bin. The bin accepts it even when
    /// full; callers must consult [`TrashBin::check_capacity`] before brewing.
    pub fn add_trash(&mut self) {
        self.current_level += 1;
    }

    /// Records `FullTrash` when the bin has no room left. Returns whether
    /// there is still capacity.
    pub fn check_capacity(&mut self) -> bool {
        if self.current_level >= TRASH_BIN_CAPACITY {
            self.add_error(ErrorKind::FullTrash);
            return false;
        }
        true
    }

    pub fn current_level(&self) -> u64 {
        self.current_level
    }
}

impl Device for TrashBin {
    /// Throws the trash away and clears the bin's errors. This is the "empty
    /// trash" maintenance operation.
    fn cleanup(&mut self) {
        self.current_level = 0;
        self.errors = ErrorSet::new();
    }

    fn device_errors(&self) -> ErrorSet {
        self.errors
    }

    fn add_error(&mut self, kind: ErrorKind) {
        self.errors.insert(kind);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_collect_one_portion_of_waste() {
        let mut trash = TrashBin::new();
        trash.add_trash();
        assert_eq!(1, trash.current_level());
        assert_eq!(true, trash.check_capacity());
    }

    #[test]
    fn should_report_a_full_bin() {
        let mut trash = TrashBin::new();
        for _ in 0..TRASH_BIN_CAPACITY {
            trash.add_trash();
        }
        assert_eq!(false, trash.check_capacity());
        assert_eq!(true, trash.device_errors().contains(ErrorKind::FullTrash));
    }

    #[test]
    fn should_throw_away_the_trash() {
        let mut trash = TrashBin::new();
        for _ in 0..TRASH_BIN_CAPACITY {
            trash.add_trash();
        }
        trash.check_capacity();
        trash.cleanup();
        assert_eq!(0, trash.current_level());
        assert_eq!(true, trash.device_errors().is_empty());
    }
}
