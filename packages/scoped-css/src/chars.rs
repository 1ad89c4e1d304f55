//! Character constants used by the rule parser state machine

// Whitespace
pub const TAB: char = '\t';
pub const NEWLINE: char = '\n';
pub const SPACE: char = ' ';

// Punctuation
pub const STAR: char = '*';
pub const COMMA: char = ',';
pub const MINUS: char = '-';
pub const SLASH: char = '/';
pub const AT: char = '@';

// Braces
pub const LBRACE: char = '{';
pub const RBRACE: char = '}';
