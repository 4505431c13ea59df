pub mod error;
pub mod executable_utils;
pub mod model;
pub mod processor;
pub mod scorers;
pub mod storage;
pub mod validator;
