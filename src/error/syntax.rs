//! TypeScript parser errors

use super::impl_error_constructors;

impl_error_constructors!({
    SyntaxParserFailed(reason),
});

pub use self::SyntaxParserFailed as parser_failed;
