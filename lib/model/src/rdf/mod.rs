mod language_string;
mod simple_literal;
mod string_literal;

pub use language_string::LanguageStringRef;
pub use simple_literal::SimpleLiteralRef;
pub use string_literal::CompatibleStringArgs;
pub use string_literal::OwnedStringLiteral;
pub use string_literal::StringLiteralRef;
