pub mod mocks;
pub mod points_tests;
