#[cfg(all(not(test), not(feature = "debug-checks")))]
pub const XWORD_ASSERT_LEVEL_DEFINITION: u8 = XWORD_ASSERT_SIMPLE;

#[cfg(any(test, feature = "debug-checks"))]
pub const XWORD_ASSERT_LEVEL_DEFINITION: u8 = XWORD_ASSERT_EXTREME;

pub const XWORD_ASSERT_SIMPLE: u8 = 1;
pub const XWORD_ASSERT_MODERATE: u8 = 2;
pub const XWORD_ASSERT_ADVANCED: u8 = 3;
pub const XWORD_ASSERT_EXTREME: u8 = 4;

#[macro_export]
#[doc(hidden)]
macro_rules! xword_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::XWORD_ASSERT_LEVEL_DEFINITION >= $crate::asserts::XWORD_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! xword_assert_eq_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::XWORD_ASSERT_LEVEL_DEFINITION >= $crate::asserts::XWORD_ASSERT_SIMPLE {
            assert_eq!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! xword_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::XWORD_ASSERT_LEVEL_DEFINITION >= $crate::asserts::XWORD_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! xword_assert_advanced {
    ($($arg:tt)*) => {
        if $crate::asserts::XWORD_ASSERT_LEVEL_DEFINITION >= $crate::asserts::XWORD_ASSERT_ADVANCED {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! xword_assert_extreme {
    ($($arg:tt)*) => {
        if $crate::asserts::XWORD_ASSERT_LEVEL_DEFINITION >= $crate::asserts::XWORD_ASSERT_EXTREME {
            assert!($($arg)*);
        }
    };
}
