use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating client phone numbers
    /// Digits with an optional leading "+", spaces, dots, dashes and parentheses
    /// - Valid: "+212 6 12 34 56 78", "0522-123456", "(05) 22.12.34.56"
    /// - Invalid: "phone", "12", "+", "06 12 ab 56"
    pub static ref PHONE_REGEX: Regex =
        Regex::new(r"^\+?[0-9()][0-9 ().\-]{4,}[0-9]$").unwrap();

    /// Regex for Expo device push tokens
    /// - Valid: "ExponentPushToken[xxxxxxxxxxxxxxxxxxxxxx]", "ExpoPushToken[abc]"
    /// - Invalid: "abc", "ExponentPushToken[]", "ExponentPushToken[abc"
    pub static ref EXPO_PUSH_TOKEN_REGEX: Regex =
        Regex::new(r"^Expo(nent)?PushToken\[[^\]\s]+\]$").unwrap();
}
