// tests/support/mod.rs
// Shared fakes and builders for the service test binaries. Individual test
// crates use different subsets, so allow the resulting dead_code warnings.
#[allow(dead_code, unused_imports)]
pub mod builders;

#[allow(dead_code, unused_imports)]
pub mod fakes;

#[allow(unused_imports)]
pub use builders::*;
#[allow(unused_imports)]
pub use fakes::*;
