// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Standard error enum for register-map lookups.

use core::convert::TryFrom;

/// Errors returned by the checked accessors of the register map.
///
/// The numbering follows the Tock kernel's `ErrorCode`, so a driver can pass
/// a value straight through to its own error path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(usize)]
pub enum ErrorCode {
    /// Generic failure condition
    FAIL = 0,
    /// An invalid parameter was passed, such as a pad or channel index
    /// beyond what this device implements
    INVAL = 5,
    /// A view was requested over a span of the wrong size
    SIZE = 6,
    /// The name or operation has no counterpart on this device
    NOSUPPORT = 9,
    /// The block does not exist on this device or core
    NODEVICE = 10,
}

impl From<ErrorCode> for usize {
    fn from(err: ErrorCode) -> usize {
        err as usize
    }
}

impl TryFrom<usize> for ErrorCode {
    type Error = ();

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ErrorCode::FAIL),
            5 => Ok(ErrorCode::INVAL),
            6 => Ok(ErrorCode::SIZE),
            9 => Ok(ErrorCode::NOSUPPORT),
            10 => Ok(ErrorCode::NODEVICE),
            _ => Err(()),
        }
    }
}

/// Returns `Ok(index)` when `index < limit`.
pub(crate) const fn check_index(index: usize, limit: usize) -> Result<usize, ErrorCode> {
    if index < limit {
        Ok(index)
    } else {
        Err(ErrorCode::INVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_codes_round_trip() {
        for code in [
            ErrorCode::FAIL,
            ErrorCode::INVAL,
            ErrorCode::SIZE,
            ErrorCode::NOSUPPORT,
            ErrorCode::NODEVICE,
        ] {
            assert_eq!(ErrorCode::try_from(usize::from(code)), Ok(code));
        }
        assert_eq!(ErrorCode::try_from(1), Err(()));
    }

    #[test]
    fn index_check() {
        assert_eq!(check_index(15, 16), Ok(15));
        assert_eq!(check_index(16, 16), Err(ErrorCode::INVAL));
    }
}
