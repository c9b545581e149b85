// Limits of the input language

/// Longest accepted element or command name
pub const MAX_NAME_LENGTH: usize = 30;

/// Longest accepted program, in lines
pub const MAX_LINES: usize = 1000;

/// Most numeric arguments a `C` line may carry (three operands plus a jump)
pub const MAX_COMMAND_ARGS: usize = 4;
