#![allow(dead_code, unused_imports)]

pub mod builders;
pub mod mock_resolvers;
pub mod strategies;

pub use builders::*;
pub use mock_resolvers::*;
pub use strategies::*;
