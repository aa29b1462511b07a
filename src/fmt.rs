#![macro_use]
#![allow(unused)]

// Logging only reaches defmt on bare-metal builds; host test and doctest
// binaries have no global logger to link against.

#[allow(unused_macros)]
#[collapse_debuginfo(yes)]
macro_rules! trace {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(all(feature = "defmt", target_os = "none"))]
            ::defmt::trace!($s $(, $x)*);
            #[cfg(not(all(feature = "defmt", target_os = "none")))]
            let _ = ($( & $x ),*);
        }
    };
}

#[allow(unused_macros)]
#[collapse_debuginfo(yes)]
macro_rules! debug {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(all(feature = "defmt", target_os = "none"))]
            ::defmt::debug!($s $(, $x)*);
            #[cfg(not(all(feature = "defmt", target_os = "none")))]
            let _ = ($( & $x ),*);
        }
    };
}

#[allow(unused_macros)]
#[collapse_debuginfo(yes)]
macro_rules! warn {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(all(feature = "defmt", target_os = "none"))]
            ::defmt::warn!($s $(, $x)*);
            #[cfg(not(all(feature = "defmt", target_os = "none")))]
            let _ = ($( & $x ),*);
        }
    };
}
