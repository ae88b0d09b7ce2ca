//! Anonymous identity utilities

mod jwt;

pub use jwt::{Claims, JwtService, TokenPair, TokenType, ANONYMOUS_PROVIDER};
